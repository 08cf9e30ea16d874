use std::{
  fmt,
  sync::Arc,
};

use futures_util::future::BoxFuture;

use crate::{
  error::MenuError,
  tree::MenuNode,
};

/// Callback bound to a menu entry. Invoked with the node that was selected;
/// the returned failure, if any, is surfaced to the host instead of being
/// dropped.
pub type ClickHandler =
  Arc<dyn Fn(&MenuNode) -> BoxFuture<'static, Result<(), MenuError>> + Send + Sync>;

/// A single entry produced by a contributor, before merging. `categories` is
/// the submenu path placing the item inside the hierarchy; an empty path
/// puts the item at the top level.
#[derive(Clone)]
pub struct ContextMenuItem {
  pub selector:   Option<String>,
  pub name:       String,
  pub categories: Vec<String>,
  pub on_click:   Option<ClickHandler>,
  pub children:   Vec<ContextMenuItem>,
}

impl ContextMenuItem {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      selector: None,
      name: name.into(),
      categories: Vec::new(),
      on_click: None,
      children: Vec::new(),
    }
  }

  pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
    self.selector = Some(selector.into());
    self
  }

  pub fn with_categories(
    mut self,
    categories: impl IntoIterator<Item = impl Into<String>>,
  ) -> Self {
    self.categories = categories.into_iter().map(Into::into).collect();
    self
  }

  pub fn with_on_click(mut self, on_click: ClickHandler) -> Self {
    self.on_click = Some(on_click);
    self
  }
}

impl fmt::Debug for ContextMenuItem {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ContextMenuItem")
      .field("selector", &self.selector)
      .field("name", &self.name)
      .field("categories", &self.categories)
      .field("on_click", &self.on_click.is_some())
      .field("children", &self.children)
      .finish()
  }
}
