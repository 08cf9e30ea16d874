use async_trait::async_trait;
use parking_lot::Mutex;

use crate::{
  contributor::MenuContributor,
  error::MenuError,
  item::ContextMenuItem,
};

/// Store behind the flat-item API. Registered as an ordinary contributor so
/// manually added items flow through the same merge as contributor-produced
/// ones; the delete operations only ever touch this store.
#[derive(Default)]
pub struct ManualItemContributor {
  items: Mutex<Vec<ContextMenuItem>>,
}

impl ManualItemContributor {
  pub const ID: &'static str = "manual-menu-items";

  pub fn new() -> Self {
    Self::default()
  }

  pub fn add(&self, item: ContextMenuItem) {
    self.items.lock().push(item);
  }

  /// Removes every item carrying the given selector; returns how many were
  /// removed.
  pub fn remove_by_selector(&self, selector: &str) -> usize {
    let mut items = self.items.lock();
    let before = items.len();
    items.retain(|item| item.selector.as_deref() != Some(selector));
    before - items.len()
  }

  /// Removes items matching selector and name, and the category path when
  /// one is given; returns how many were removed.
  pub fn remove(&self, selector: &str, name: &str, categories: Option<&[String]>) -> usize {
    let mut items = self.items.lock();
    let before = items.len();
    items.retain(|item| {
      let matches = item.selector.as_deref() == Some(selector)
        && item.name == name
        && categories.is_none_or(|categories| item.categories == categories);
      !matches
    });
    before - items.len()
  }

  pub fn len(&self) -> usize {
    self.items.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.lock().is_empty()
  }
}

#[async_trait]
impl MenuContributor for ManualItemContributor {
  fn id(&self) -> &str {
    Self::ID
  }

  async fn calculate_items(&self) -> Result<Vec<ContextMenuItem>, MenuError> {
    Ok(self.items.lock().clone())
  }
}
