use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::{
  connection::{
    ActionInfo,
    AnalysisConnection,
    ConnectionError,
    DisplayUiHandler,
    DocumentChange,
    ServerConfiguration,
  },
  editor::CursorPosition,
  payload,
  transport::{
    AnalysisTransport,
    ServerRequestHandler,
  },
};

const CALCULATE_CONTEXT_ACTIONS: &str = "calculateEditorContextActions";
const EXECUTE_CONTEXT_ACTION: &str = "executeContextAction";
const DOCUMENT_CHANGED: &str = "documentChanged";
const SET_SERVER_CONFIGURATION: &str = "setServerConfiguration";
const DISPLAY_ACTION_UI: &str = "displayActionUI";
const DEBUG: &str = "debug";

/// Typed analysis-service client over an externally-owned transport.
pub struct AnalysisClient {
  transport: Arc<dyn AnalysisTransport>,
}

impl AnalysisClient {
  pub fn new(transport: Arc<dyn AnalysisTransport>) -> Self {
    Self { transport }
  }
}

#[async_trait]
impl AnalysisConnection for AnalysisClient {
  async fn calculate_context_actions(
    &self,
    uri: &str,
    position: CursorPosition,
  ) -> Result<Vec<ActionInfo>, ConnectionError> {
    let result = self
      .transport
      .request(
        CALCULATE_CONTEXT_ACTIONS,
        payload::context_actions_params(uri, position),
      )
      .await?;
    Ok(payload::parse_context_actions_response(Some(&result))?)
  }

  async fn execute_context_action(
    &self,
    uri: &str,
    action: &ActionInfo,
    position: CursorPosition,
  ) -> Result<Vec<DocumentChange>, ConnectionError> {
    let result = self
      .transport
      .request(
        EXECUTE_CONTEXT_ACTION,
        payload::execute_action_params(uri, &action.id, position),
      )
      .await?;
    Ok(payload::parse_document_changes_response(Some(&result))?)
  }

  async fn document_changed(&self, uri: &str, text: &str) -> Result<(), ConnectionError> {
    self
      .transport
      .notify(DOCUMENT_CHANGED, payload::document_changed_params(uri, text))?;
    Ok(())
  }

  async fn set_configuration(
    &self,
    configuration: &ServerConfiguration,
  ) -> Result<(), ConnectionError> {
    self.transport.notify(
      SET_SERVER_CONFIGURATION,
      payload::configuration_params(configuration),
    )?;
    Ok(())
  }

  fn on_display_action_ui(&self, handler: DisplayUiHandler) {
    let wrapped: ServerRequestHandler = Arc::new(move |params| {
      let handler = Arc::clone(&handler);
      Box::pin(async move {
        let request =
          payload::parse_display_ui_params(Some(&params)).map_err(|err| err.to_string())?;
        handler(request).await.map_err(|err| err.to_string())
      })
    });
    self.transport.on_server_request(DISPLAY_ACTION_UI, wrapped);
  }

  fn debug(&self, message: &str, channel: &str, origin: &str) {
    if let Err(err) = self
      .transport
      .notify(DEBUG, payload::debug_params(message, channel, origin))
    {
      debug!(error = %err, "failed to forward debug message");
    }
  }
}
