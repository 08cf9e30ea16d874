use serde::Deserialize;
use serde_json::{
  Value,
  json,
};
use thiserror::Error;

use crate::{
  connection::{
    ActionInfo,
    DisplayUiRequest,
    DocumentChange,
    ServerConfiguration,
  },
  editor::CursorPosition,
};

#[derive(Debug, Error)]
pub enum PayloadError {
  #[error("missing request params")]
  MissingParams,
  #[error("failed to decode analysis payload: {0}")]
  Decode(#[from] serde_json::Error),
}

pub fn context_actions_params(uri: &str, position: CursorPosition) -> Value {
  json!({
    "uri": uri,
    "position": position.offset,
  })
}

pub fn execute_action_params(uri: &str, action_id: &str, position: CursorPosition) -> Value {
  json!({
    "uri": uri,
    "actionId": action_id,
    "position": position.offset,
  })
}

pub fn document_changed_params(uri: &str, text: &str) -> Value {
  json!({
    "uri": uri,
    "text": text,
  })
}

pub fn configuration_params(configuration: &ServerConfiguration) -> Value {
  // A plain bool tree; serialization cannot fail.
  serde_json::to_value(configuration).unwrap_or(Value::Null)
}

pub fn debug_params(message: &str, channel: &str, origin: &str) -> Value {
  json!({
    "message": message,
    "channel": channel,
    "origin": origin,
  })
}

pub fn parse_context_actions_response(
  result: Option<&Value>,
) -> Result<Vec<ActionInfo>, PayloadError> {
  let Some(result) = result else {
    return Ok(Vec::new());
  };
  if result.is_null() {
    return Ok(Vec::new());
  }

  let payload: Vec<ActionPayload> = serde_json::from_value(result.clone())?;
  Ok(payload.into_iter().map(ActionPayload::into_action).collect())
}

pub fn parse_document_changes_response(
  result: Option<&Value>,
) -> Result<Vec<DocumentChange>, PayloadError> {
  let Some(result) = result else {
    return Ok(Vec::new());
  };
  if result.is_null() {
    return Ok(Vec::new());
  }

  let payload: Vec<DocumentChangePayload> = serde_json::from_value(result.clone())?;
  Ok(
    payload
      .into_iter()
      .map(DocumentChangePayload::into_change)
      .collect(),
  )
}

pub fn parse_display_ui_params(params: Option<&Value>) -> Result<DisplayUiRequest, PayloadError> {
  let Some(params) = params else {
    return Err(PayloadError::MissingParams);
  };

  let payload: DisplayUiPayload = serde_json::from_value(params.clone())?;
  Ok(DisplayUiRequest {
    ui_code: payload.ui_code,
  })
}

#[derive(Debug, Deserialize)]
struct ActionPayload {
  name:     String,
  label:    Option<String>,
  #[serde(default)]
  category: Vec<String>,
  #[serde(default, rename = "hasUI")]
  has_ui:   bool,
}

impl ActionPayload {
  fn into_action(self) -> ActionInfo {
    ActionInfo {
      id:       self.name,
      label:    self.label,
      category: self.category,
      has_ui:   self.has_ui,
    }
  }
}

#[derive(Debug, Deserialize)]
struct DocumentChangePayload {
  uri:  String,
  text: Option<String>,
}

impl DocumentChangePayload {
  fn into_change(self) -> DocumentChange {
    DocumentChange {
      uri:  self.uri,
      text: self.text,
    }
  }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DisplayUiPayload {
  ui_code: String,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn parse_actions_with_and_without_labels() {
    let value = json!([
      {
        "name": "extractType",
        "label": "Extract type",
        "category": ["Refactor"],
        "hasUI": true
      },
      {
        "name": "normalize"
      }
    ]);

    let actions = parse_context_actions_response(Some(&value)).expect("parse ok");
    assert_eq!(actions.len(), 2);

    assert_eq!(actions[0].id, "extractType");
    assert_eq!(actions[0].display_name(), "Extract type");
    assert_eq!(actions[0].category, ["Refactor"]);
    assert!(actions[0].has_ui);

    assert_eq!(actions[1].display_name(), "normalize");
    assert!(actions[1].category.is_empty());
    assert!(!actions[1].has_ui);
  }

  #[test]
  fn null_or_absent_result_is_an_empty_action_list() {
    assert!(parse_context_actions_response(None).expect("ok").is_empty());
    assert!(
      parse_context_actions_response(Some(&Value::Null))
        .expect("ok")
        .is_empty()
    );
  }

  #[test]
  fn parse_changes_keeps_null_texts() {
    let value = json!([
      { "uri": "file:///a.raml", "text": "content" },
      { "uri": "file:///b.raml", "text": null }
    ]);

    let changes = parse_document_changes_response(Some(&value)).expect("parse ok");
    assert_eq!(changes.len(), 2);
    assert_eq!(changes[0].text.as_deref(), Some("content"));
    assert_eq!(changes[1].text, None);
  }

  #[test]
  fn display_ui_params_require_the_code_field() {
    let request =
      parse_display_ui_params(Some(&json!({ "uiCode": "result = 1;" }))).expect("parse ok");
    assert_eq!(request.ui_code, "result = 1;");

    assert!(matches!(
      parse_display_ui_params(None),
      Err(PayloadError::MissingParams)
    ));
    assert!(parse_display_ui_params(Some(&json!({}))).is_err());
  }

  #[test]
  fn configuration_serializes_with_the_server_field_names() {
    let value = configuration_params(&ServerConfiguration::ui_actions_enabled());
    assert_eq!(
      value,
      json!({ "actionsConfiguration": { "enableUIActions": true } })
    );
  }

  #[test]
  fn request_params_carry_the_offset() {
    let value = context_actions_params("file:///a.raml", CursorPosition::new(17));
    assert_eq!(value, json!({ "uri": "file:///a.raml", "position": 17 }));

    let value = execute_action_params("file:///a.raml", "extractType", CursorPosition::new(17));
    assert_eq!(
      value,
      json!({ "uri": "file:///a.raml", "actionId": "extractType", "position": 17 })
    );
  }
}
