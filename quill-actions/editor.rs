use std::sync::Arc;

use ropey::Rope;

/// Zero-based character offset into the active document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorPosition {
  pub offset: usize,
}

impl CursorPosition {
  pub fn new(offset: usize) -> Self {
    Self { offset }
  }
}

/// The active editor surface: document identity, cursor, and the full-text
/// replace used to apply server-produced changes.
pub trait EditorManager: Send + Sync {
  fn uri(&self) -> Option<String>;

  fn cursor_position(&self) -> CursorPosition;

  fn text(&self) -> Rope;

  /// Full-text replace.
  fn replace_text(&self, text: &str);
}

pub trait EditorHost: Send + Sync {
  /// Manager for the active editor, or `None` when no editor has focus.
  /// Callers re-acquire on every use; the active editor can change between
  /// a menu build and a click.
  fn acquire_manager(&self) -> Option<Arc<dyn EditorManager>>;
}
