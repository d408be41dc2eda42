use super::entities::Item;
use super::value_objects::ListKind;
use std::collections::HashMap;

/// Source of the current list contents
pub trait ItemRepository {
    /// Snapshot of one list
    fn items(&self, kind: ListKind) -> Vec<Item>;

    /// Replace one list wholesale (the API always returns full lists)
    fn replace(&mut self, kind: ListKind, items: Vec<Item>);
}

/// Browser-side store fed by the host page
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    lists: HashMap<ListKind, Vec<Item>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemRepository for InMemoryItemRepository {
    fn items(&self, kind: ListKind) -> Vec<Item> {
        self.lists.get(&kind).cloned().unwrap_or_default()
    }

    fn replace(&mut self, kind: ListKind, items: Vec<Item>) {
        self.lists.insert(kind, items);
    }
}
