use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;

use crate::{
  error::MenuError,
  item::ContextMenuItem,
};

/// A pluggable source of menu items. Every registered contributor is asked
/// for its items on each menu calculation.
#[async_trait]
pub trait MenuContributor: Send + Sync {
  /// Registry key. Registering another contributor under the same id
  /// replaces this one.
  fn id(&self) -> &str;

  async fn calculate_items(&self) -> Result<Vec<ContextMenuItem>, MenuError>;

  /// Notification that a calculation is starting. Issued synchronously in
  /// registration order and never awaited; implementations must tolerate
  /// overlapping calculations.
  fn calculation_started(&self) {}

  /// Notification that a calculation produced a tree. Skipped when the
  /// calculation fails.
  fn calculation_finished(&self) {}
}

#[derive(Default)]
pub struct ContributorRegistry {
  contributors: IndexMap<String, Arc<dyn MenuContributor>>,
}

impl ContributorRegistry {
  pub fn new() -> Self {
    Self {
      contributors: IndexMap::new(),
    }
  }

  /// Inserts or silently overwrites the entry at the contributor's id. A
  /// replaced contributor keeps its original iteration slot, so merge order
  /// stays stable across re-registration.
  pub fn register(&mut self, contributor: Arc<dyn MenuContributor>) {
    self
      .contributors
      .insert(contributor.id().to_string(), contributor);
  }

  pub fn get(&self, id: &str) -> Option<&Arc<dyn MenuContributor>> {
    self.contributors.get(id)
  }

  pub fn len(&self) -> usize {
    self.contributors.len()
  }

  pub fn is_empty(&self) -> bool {
    self.contributors.is_empty()
  }

  /// Contributors in registration order.
  pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn MenuContributor>> {
    self.contributors.values()
  }
}
