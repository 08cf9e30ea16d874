use std::{
  any::Any,
  sync::Arc,
};

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Opaque handle to a host object exposed to an evaluated script.
pub type Capability = Arc<dyn Any + Send + Sync>;

/// The capability set injected into an evaluated UI script: the editor/IDE
/// handle and the UI-widget library handle, and nothing else of the host.
#[derive(Clone)]
pub struct ScriptScope {
  pub ide: Capability,
  pub ui:  Capability,
}

impl ScriptScope {
  pub fn new(ide: Capability, ui: Capability) -> Self {
    Self { ide, ui }
  }
}

/// Result of one evaluation. A script declares its single return value
/// through the `result` contract field; no further shape is imposed on it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptOutcome {
  pub result: Value,
}

/// Sandboxed evaluation facility, owned by the host. `virtual_path` names
/// the script for diagnostics only; no file is read or written.
#[async_trait]
pub trait ScriptEvaluator: Send + Sync {
  async fn evaluate(
    &self,
    code: &str,
    virtual_path: &str,
    scope: ScriptScope,
  ) -> Result<ScriptOutcome, ScriptError>;
}

#[derive(Debug, Error)]
pub enum ScriptError {
  #[error("script evaluation failed: {0}")]
  Evaluation(String),
  #[error("script did not declare a result")]
  MissingResult,
}
