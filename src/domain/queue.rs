use tracing::debug;

use super::entities::CraftableItem;

#[derive(Clone, Debug, PartialEq)]
pub struct QueueEntry {
    pub item: CraftableItem,
    /// Finished units the player wants, not crafts.
    pub quantity: u32,
}

/// Ordered crafting requests for the current session.
///
/// Holds at most one entry per item id; adding an item that is already
/// queued bumps its quantity instead of appending a duplicate.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CraftQueue {
    entries: Vec<QueueEntry>,
}

impl CraftQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: CraftableItem, quantity: u32) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.item.id == item.id) {
            entry.quantity = entry.quantity.saturating_add(quantity);
            debug!(item = %item.id, total = entry.quantity, "queue entry increased");
            return;
        }

        debug!(item = %item.id, quantity, "queue entry appended");
        self.entries.push(QueueEntry { item, quantity });
    }

    pub fn remove(&mut self, item_id: &str) {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.item.id != item_id);
        if self.entries.len() != before {
            debug!(item = item_id, "queue entry removed");
        }
    }

    pub fn clear(&mut self) {
        debug!(count = self.entries.len(), "queue cleared");
        self.entries.clear();
    }

    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn quantity_of(&self, item_id: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.item.id == item_id)
            .map(|entry| entry.quantity)
    }
}

impl FromIterator<(CraftableItem, u32)> for CraftQueue {
    fn from_iter<I: IntoIterator<Item = (CraftableItem, u32)>>(iter: I) -> Self {
        let mut queue = CraftQueue::new();
        for (item, quantity) in iter {
            queue.add(item, quantity);
        }
        queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ItemType;

    fn item(id: &str) -> CraftableItem {
        CraftableItem {
            id: id.into(),
            name: id.to_uppercase(),
            tier: 6,
            item_type: ItemType::Potion,
            ingredients: Vec::new(),
            yield_base: Some(5),
            description: None,
            unique_name: None,
        }
    }

    #[test]
    fn adding_same_item_twice_merges_quantities() {
        let mut queue = CraftQueue::new();
        queue.add(item("a"), 3);
        queue.add(item("a"), 4);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.quantity_of("a"), Some(7));
    }

    #[test]
    fn new_items_append_in_order() {
        let mut queue = CraftQueue::new();
        queue.add(item("b"), 1);
        queue.add(item("a"), 1);
        queue.add(item("b"), 1);
        let ids: Vec<_> = queue.entries().iter().map(|e| e.item.id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn remove_missing_item_is_a_no_op() {
        let mut queue = CraftQueue::new();
        queue.add(item("a"), 2);
        queue.remove("zzz");
        assert_eq!(queue.len(), 1);
        queue.remove("a");
        assert!(queue.is_empty());
    }

    #[test]
    fn clear_empties_queue() {
        let mut queue: CraftQueue = [(item("a"), 1), (item("b"), 2)].into_iter().collect();
        assert_eq!(queue.len(), 2);
        queue.clear();
        assert!(queue.is_empty());
    }

    #[test]
    fn quantity_saturates_instead_of_overflowing() {
        let mut queue = CraftQueue::new();
        queue.add(item("a"), u32::MAX);
        queue.add(item("a"), 10);
        assert_eq!(queue.quantity_of("a"), Some(u32::MAX));
    }
}
