use std::sync::Arc;

use async_trait::async_trait;
use quill_menu::{
  ClickHandler,
  ContextMenuItem,
  MenuContributor,
  MenuError,
};
use tracing::debug;

use crate::{
  connection::{
    ActionInfo,
    AnalysisConnection,
    ConnectionError,
  },
  editor::{
    CursorPosition,
    EditorHost,
  },
};

pub const ACTION_CONTRIBUTOR_ID: &str = "editor-context-actions";

/// Facade over the analysis service: turns the context actions available at
/// the cursor into menu items whose click handlers execute the action
/// remotely and apply the returned change to the active document.
pub struct ActionMenuContributor {
  connection: Arc<dyn AnalysisConnection>,
  host:       Arc<dyn EditorHost>,
  selector:   Option<String>,
}

impl ActionMenuContributor {
  pub fn new(
    connection: Arc<dyn AnalysisConnection>,
    host: Arc<dyn EditorHost>,
    selector: Option<String>,
  ) -> Self {
    Self {
      connection,
      host,
      selector,
    }
  }

  fn item_for_action(
    &self,
    uri: &str,
    position: CursorPosition,
    action: ActionInfo,
  ) -> ContextMenuItem {
    let name = action.display_name().to_string();
    let categories = action.category.clone();

    let connection = Arc::clone(&self.connection);
    let host = Arc::clone(&self.host);
    let uri = uri.to_string();
    let on_click: ClickHandler = Arc::new(move |_node| {
      let connection = Arc::clone(&connection);
      let host = Arc::clone(&host);
      let uri = uri.clone();
      let action = action.clone();
      Box::pin(async move {
        apply_context_action(connection, host, &uri, &action, position)
          .await
          .map_err(|err| MenuError::click(err.to_string()))
      })
    });

    ContextMenuItem {
      selector: self.selector.clone(),
      name,
      categories,
      on_click: Some(on_click),
      children: Vec::new(),
    }
  }
}

#[async_trait]
impl MenuContributor for ActionMenuContributor {
  fn id(&self) -> &str {
    ACTION_CONTRIBUTOR_ID
  }

  async fn calculate_items(&self) -> Result<Vec<ContextMenuItem>, MenuError> {
    let Some(manager) = self.host.acquire_manager() else {
      return Ok(Vec::new());
    };
    let Some(uri) = manager.uri() else {
      return Ok(Vec::new());
    };
    let position = manager.cursor_position();

    let actions = self
      .connection
      .calculate_context_actions(&uri, position)
      .await
      .map_err(|err| MenuError::contributor(ACTION_CONTRIBUTOR_ID, err.to_string()))?;
    debug!(uri = %uri, actions = actions.len(), "collected context actions");

    Ok(
      actions
        .into_iter()
        .map(|action| self.item_for_action(&uri, position, action))
        .collect(),
    )
  }
}

/// Executes the action remotely and applies any change addressed to the
/// document that is active at click time, which may differ from the one the
/// menu was built for. Changes addressed to other documents are dropped.
async fn apply_context_action(
  connection: Arc<dyn AnalysisConnection>,
  host: Arc<dyn EditorHost>,
  uri: &str,
  action: &ActionInfo,
  position: CursorPosition,
) -> Result<(), ConnectionError> {
  let changes = connection
    .execute_context_action(uri, action, position)
    .await?;

  let Some(manager) = host.acquire_manager() else {
    return Ok(());
  };
  let Some(current_uri) = manager.uri() else {
    return Ok(());
  };

  for change in changes {
    if change.uri != current_uri {
      continue;
    }
    let Some(text) = change.text else {
      continue;
    };

    manager.replace_text(&text);
    connection.document_changed(&current_uri, &text).await?;
  }

  Ok(())
}
