use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::{
  editor::CursorPosition,
  payload::PayloadError,
  script::ScriptError,
  transport::TransportError,
};

/// A server-computed action available at a specific cursor position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionInfo {
  pub id:       String,
  pub label:    Option<String>,
  pub category: Vec<String>,
  pub has_ui:   bool,
}

impl ActionInfo {
  /// Display label, falling back to the internal action id.
  pub fn display_name(&self) -> &str {
    self.label.as_deref().unwrap_or(&self.id)
  }
}

/// Proposed full-text replacement for one document. `text: None` means the
/// server had no new content for that uri.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentChange {
  pub uri:  String,
  pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionsConfiguration {
  #[serde(rename = "enableUIActions")]
  pub enable_ui_actions: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfiguration {
  pub actions_configuration: ActionsConfiguration,
}

impl ServerConfiguration {
  pub fn ui_actions_enabled() -> Self {
    Self {
      actions_configuration: ActionsConfiguration {
        enable_ui_actions: true,
      },
    }
  }
}

/// Server-initiated request to run a UI script on the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUiRequest {
  pub ui_code: String,
}

/// Handler for display-UI requests; the resolved value is returned to the
/// server as the request's response.
pub type DisplayUiHandler =
  Arc<dyn Fn(DisplayUiRequest) -> BoxFuture<'static, Result<Value, ScriptError>> + Send + Sync>;

/// Typed interface over the language-analysis service, as consumed by the
/// action-based menu.
#[async_trait]
pub trait AnalysisConnection: Send + Sync {
  async fn calculate_context_actions(
    &self,
    uri: &str,
    position: CursorPosition,
  ) -> Result<Vec<ActionInfo>, ConnectionError>;

  async fn execute_context_action(
    &self,
    uri: &str,
    action: &ActionInfo,
    position: CursorPosition,
  ) -> Result<Vec<DocumentChange>, ConnectionError>;

  /// Tells the server a document now has the given full text.
  async fn document_changed(&self, uri: &str, text: &str) -> Result<(), ConnectionError>;

  async fn set_configuration(
    &self,
    configuration: &ServerConfiguration,
  ) -> Result<(), ConnectionError>;

  /// Registers the handler for server-initiated display-UI requests.
  /// Replacement semantics for repeated registration belong to the
  /// connection implementation.
  fn on_display_action_ui(&self, handler: DisplayUiHandler);

  /// Fire-and-forget diagnostic message on the server's debug channel.
  fn debug(&self, message: &str, channel: &str, origin: &str);
}

#[derive(Debug, Error)]
pub enum ConnectionError {
  #[error(transparent)]
  Transport(#[from] TransportError),
  #[error(transparent)]
  Payload(#[from] PayloadError),
}
