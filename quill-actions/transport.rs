use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::BoxFuture;
use serde_json::Value;
use thiserror::Error;

/// Handler for a server-initiated request. The error string becomes the
/// message of the error response sent back to the server.
pub type ServerRequestHandler =
  Arc<dyn Fn(Value) -> BoxFuture<'static, Result<Value, String>> + Send + Sync>;

/// Request/notify/push surface presented by the externally-owned client
/// connection to the analysis server. Wire framing, request routing, and
/// process management all live on the implementor's side of this trait.
#[async_trait]
pub trait AnalysisTransport: Send + Sync {
  async fn request(&self, method: &str, params: Value) -> Result<Value, TransportError>;

  fn notify(&self, method: &str, params: Value) -> Result<(), TransportError>;

  /// Registers the handler invoked when the server sends a request with the
  /// given method. Replacement semantics for repeated registration belong to
  /// the implementor.
  fn on_server_request(&self, method: &str, handler: ServerRequestHandler);
}

#[derive(Debug, Error)]
pub enum TransportError {
  #[error("request `{method}` failed: {reason}")]
  Request { method: String, reason: String },
  #[error("notification `{method}` failed: {reason}")]
  Notify { method: String, reason: String },
  #[error("connection is closed")]
  Closed,
}
