mod contributor;
mod error;
mod item;
mod manual;
mod service;
mod tree;

pub use contributor::{
  ContributorRegistry,
  MenuContributor,
};
pub use error::MenuError;
pub use item::{
  ClickHandler,
  ContextMenuItem,
};
pub use manual::ManualItemContributor;
pub use service::ContextMenuService;
pub use tree::{
  MenuNode,
  merge_items,
};
