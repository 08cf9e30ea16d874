use std::sync::Arc;

use quill_menu::ContextMenuService;
use tracing::debug;

use crate::{
  connection::{
    AnalysisConnection,
    ConnectionError,
    DisplayUiHandler,
    ServerConfiguration,
  },
  contributor::ActionMenuContributor,
  editor::EditorHost,
  script::{
    ScriptEvaluator,
    ScriptScope,
  },
};

const UI_SCRIPT_VIRTUAL_PATH: &str = "context-actions/ui-script.js";
const DEBUG_CHANNEL: &str = "contextActions";
const DEBUG_ORIGIN: &str = "action_menu::display_ui";

/// Wires the action-based contributor into a menu service and owns the
/// server-facing side channels: display-UI evaluation and the configuration
/// update that enables UI-producing actions.
pub struct ActionMenu {
  connection:  Arc<dyn AnalysisConnection>,
  host:        Arc<dyn EditorHost>,
  evaluator:   Arc<dyn ScriptEvaluator>,
  initialized: bool,
}

impl ActionMenu {
  pub fn new(
    connection: Arc<dyn AnalysisConnection>,
    host: Arc<dyn EditorHost>,
    evaluator: Arc<dyn ScriptEvaluator>,
  ) -> Self {
    Self {
      connection,
      host,
      evaluator,
      initialized: false,
    }
  }

  /// Registers the action contributor, installs the display-UI handler, and
  /// enables UI-producing actions on the server.
  ///
  /// Nothing guards against running this twice: contributor registration is
  /// idempotent by id, while repeated handler registration and configuration
  /// updates are owned by the connection implementation.
  pub async fn initialize(
    &mut self,
    menu: &mut ContextMenuService,
    scope: ScriptScope,
    selector: Option<String>,
  ) -> Result<(), ConnectionError> {
    menu.register_contributor(Arc::new(ActionMenuContributor::new(
      Arc::clone(&self.connection),
      Arc::clone(&self.host),
      selector,
    )));

    self.install_display_ui_handler(scope);

    self
      .connection
      .set_configuration(&ServerConfiguration::ui_actions_enabled())
      .await?;

    self.initialized = true;
    debug!("action-based context menu initialized");
    Ok(())
  }

  pub fn is_initialized(&self) -> bool {
    self.initialized
  }

  fn install_display_ui_handler(&self, scope: ScriptScope) {
    let connection = Arc::clone(&self.connection);
    let evaluator = Arc::clone(&self.evaluator);

    let handler: DisplayUiHandler = Arc::new(move |request| {
      let connection = Arc::clone(&connection);
      let evaluator = Arc::clone(&evaluator);
      let scope = scope.clone();
      Box::pin(async move {
        connection.debug("received display-ui request", DEBUG_CHANNEL, DEBUG_ORIGIN);

        let outcome = evaluator
          .evaluate(&request.ui_code, UI_SCRIPT_VIRTUAL_PATH, scope)
          .await?;

        connection.debug(
          &format!("display-ui evaluation finished, result: {}", outcome.result),
          DEBUG_CHANNEL,
          DEBUG_ORIGIN,
        );
        Ok(outcome.result)
      })
    });

    self.connection.on_display_action_ui(handler);
  }
}
