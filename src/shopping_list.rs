//! # Shopping List Entity
//!
//! An ordered, in-memory list of items to buy. Items are independent of the
//! recipe they came from; adding the same recipe twice appends twice.

use log::debug;

/// One shopping list entry
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub id: String,
    pub count: f64,
    pub unit: String,
    pub ingredient: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingList {
    items: Vec<ListItem>,
    next_id: u64,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item under a fresh id and return it
    pub fn add_item(&mut self, count: f64, unit: &str, ingredient: &str) -> ListItem {
        let item = ListItem {
            id: self.next_id.to_string(),
            count,
            unit: unit.to_string(),
            ingredient: ingredient.to_string(),
        };
        self.next_id += 1;
        self.items.push(item.clone());
        debug!("Added shopping list item {}: {}", item.id, item.ingredient);
        item
    }

    /// Overwrite an item's count. Returns `false` if the id is unknown.
    pub fn update_count(&mut self, id: &str, count: f64) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.count = count;
                true
            }
            None => false,
        }
    }

    /// Remove an item. Returns `false` if the id is unknown.
    pub fn delete_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before != self.items.len()
    }

    pub fn get(&self, id: &str) -> Option<&ListItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item_allocates_increasing_ids() {
        let mut list = ShoppingList::new();
        let first = list.add_item(2.0, "cup", "flour");
        let second = list.add_item(1.0, "", "egg");

        assert_eq!(first.id, "0");
        assert_eq!(second.id, "1");
        assert_eq!(list.len(), 2);
        assert_eq!(list.items()[1].ingredient, "egg");
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut list = ShoppingList::new();
        let first = list.add_item(2.0, "cup", "flour");
        assert!(list.delete_item(&first.id));

        let next = list.add_item(1.0, "tsp", "salt");
        assert_ne!(next.id, first.id);
    }

    #[test]
    fn test_update_count() {
        let mut list = ShoppingList::new();
        let item = list.add_item(2.0, "cup", "flour");

        assert!(list.update_count(&item.id, 3.5));
        assert_eq!(list.get(&item.id).unwrap().count, 3.5);
        assert!(!list.update_count("missing", 1.0));
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut list = ShoppingList::new();
        list.add_item(2.0, "cup", "flour");
        let snapshot = list.clone();

        assert!(!list.delete_item("42"));
        assert_eq!(list, snapshot);
    }
}
