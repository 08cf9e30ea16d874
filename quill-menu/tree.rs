use std::fmt;

use crate::{
  error::MenuError,
  item::{
    ClickHandler,
    ContextMenuItem,
  },
};

/// One node of the merged menu forest. Sibling names are unique within any
/// children list. Category nodes carry the `selector`/`on_click` of whichever
/// item first created them, with `name` overridden to the path segment.
#[derive(Clone)]
pub struct MenuNode {
  pub selector:   Option<String>,
  pub name:       String,
  pub categories: Vec<String>,
  pub on_click:   Option<ClickHandler>,
  pub children:   Vec<MenuNode>,
}

impl MenuNode {
  fn from_item(item: &ContextMenuItem, name_override: Option<&str>) -> Self {
    Self {
      selector:   item.selector.clone(),
      name:       name_override.map_or_else(|| item.name.clone(), str::to_string),
      categories: item.categories.clone(),
      on_click:   item.on_click.clone(),
      children:   Vec::new(),
    }
  }

  pub fn child(&self, name: &str) -> Option<&MenuNode> {
    self.children.iter().find(|node| node.name == name)
  }

  pub fn is_leaf(&self) -> bool {
    self.children.is_empty()
  }

  /// Invokes the bound click handler, if any. Handler failures are returned
  /// to the caller.
  pub async fn click(&self) -> Result<(), MenuError> {
    match &self.on_click {
      Some(on_click) => on_click(self).await,
      None => Ok(()),
    }
  }
}

impl fmt::Debug for MenuNode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MenuNode")
      .field("selector", &self.selector)
      .field("name", &self.name)
      .field("categories", &self.categories)
      .field("on_click", &self.on_click.is_some())
      .field("children", &self.children)
      .finish()
  }
}

/// Folds a flat item sequence into the deduplicated menu forest. Items are
/// inserted one at a time in input order, so independent contributors can
/// both populate the same category path without a cross-contributor pass.
pub fn merge_items(items: impl IntoIterator<Item = ContextMenuItem>) -> Vec<MenuNode> {
  let mut roots = Vec::new();
  for item in items {
    insert_item(&mut roots, item);
  }
  roots
}

pub fn insert_item(roots: &mut Vec<MenuNode>, item: ContextMenuItem) {
  let mut siblings = roots;
  for segment in &item.categories {
    let index = match siblings.iter().position(|node| node.name == *segment) {
      Some(index) => index,
      None => {
        siblings.push(MenuNode::from_item(&item, Some(segment)));
        siblings.len() - 1
      },
    };
    siblings = &mut siblings[index].children;
  }

  // Last writer wins: a later item with the same name and path replaces the
  // earlier node, dropping any children that node had accumulated.
  if let Some(index) = siblings.iter().position(|node| node.name == item.name) {
    siblings.remove(index);
  }
  siblings.push(MenuNode::from_item(&item, None));
}
