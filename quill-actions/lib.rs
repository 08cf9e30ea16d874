mod action_menu;
mod client;
mod connection;
mod contributor;
mod editor;
pub mod payload;
mod script;
mod transport;

pub use action_menu::ActionMenu;
pub use client::AnalysisClient;
pub use connection::{
  ActionInfo,
  ActionsConfiguration,
  AnalysisConnection,
  ConnectionError,
  DisplayUiHandler,
  DisplayUiRequest,
  DocumentChange,
  ServerConfiguration,
};
pub use contributor::{
  ACTION_CONTRIBUTOR_ID,
  ActionMenuContributor,
};
pub use editor::{
  CursorPosition,
  EditorHost,
  EditorManager,
};
pub use payload::PayloadError;
pub use script::{
  Capability,
  ScriptError,
  ScriptEvaluator,
  ScriptOutcome,
  ScriptScope,
};
pub use transport::{
  AnalysisTransport,
  ServerRequestHandler,
  TransportError,
};
