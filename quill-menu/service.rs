use std::sync::Arc;

use futures_util::future;
use tracing::debug;

use crate::{
  contributor::{
    ContributorRegistry,
    MenuContributor,
  },
  error::MenuError,
  item::ContextMenuItem,
  manual::ManualItemContributor,
  tree::{
    MenuNode,
    merge_items,
  },
};

/// Owns the contributor registry and drives the ask-everyone-then-merge
/// lifecycle. Hosts keep one service per menu surface; separate services are
/// fully independent.
pub struct ContextMenuService {
  registry: ContributorRegistry,
  manual:   Arc<ManualItemContributor>,
}

impl ContextMenuService {
  pub fn new() -> Self {
    let manual = Arc::new(ManualItemContributor::new());
    let mut registry = ContributorRegistry::new();
    registry.register(Arc::clone(&manual) as Arc<dyn MenuContributor>);

    Self { registry, manual }
  }

  pub fn register_contributor(&mut self, contributor: Arc<dyn MenuContributor>) {
    self.registry.register(contributor);
  }

  pub fn registry(&self) -> &ContributorRegistry {
    &self.registry
  }

  /// Adds a single menu item without a contributor. Contributor-based
  /// registration is preferred; this exists for hosts that only have one
  /// item to place.
  pub fn add_menu_item(&self, item: ContextMenuItem) {
    self.manual.add(item);
  }

  /// Deletes all manually added items with the given selector; returns how
  /// many were removed. Contributor-based items cannot be deleted.
  pub fn delete_menu_items(&self, selector: &str) -> usize {
    self.manual.remove_by_selector(selector)
  }

  /// Deletes manually added items by selector and name, and category path
  /// when one is given. Contributor-based items cannot be deleted.
  pub fn delete_menu_item(
    &self,
    selector: &str,
    name: &str,
    categories: Option<&[String]>,
  ) -> usize {
    self.manual.remove(selector, name, categories)
  }

  /// Calculates the current menu tree.
  ///
  /// Start notifications go out first, in registration order, and are never
  /// awaited. Every contributor is then asked at once and all answers are
  /// awaited together; one failing contributor fails the whole call with its
  /// error, producing no partial tree and skipping the finish notifications.
  /// There is no timeout, so a contributor that never answers stalls the
  /// call. Overlapping calls are allowed and build independent trees.
  pub async fn calculate_menu_items_tree(&self) -> Result<Vec<MenuNode>, MenuError> {
    for contributor in self.registry.iter() {
      contributor.calculation_started();
    }

    let pending: Vec<_> = self
      .registry
      .iter()
      .map(|contributor| contributor.calculate_items())
      .collect();
    debug!(contributors = pending.len(), "calculating context menu");

    let results = future::try_join_all(pending).await?;
    let roots = merge_items(results.into_iter().flatten());

    for contributor in self.registry.iter() {
      contributor.calculation_finished();
    }

    Ok(roots)
  }
}

impl Default for ContextMenuService {
  fn default() -> Self {
    Self::new()
  }
}
