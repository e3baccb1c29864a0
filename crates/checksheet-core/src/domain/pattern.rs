//! Pattern Entity
//!
//! A named, ordered group of check items (one checklist variant).

use serde::{Deserialize, Serialize};
use super::check_item::CheckItem;
use super::entity::{find_by_id, find_by_id_mut, position_by_id, remove_by_id, Entity};
use super::ids::{ItemId, PatternId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub id: PatternId,
    pub name: String,
    #[serde(default)]
    pub items: Vec<CheckItem>,
}

impl Pattern {
    /// New pattern at 0-based `position`, named `パターン{position + 1}`
    pub fn with_blank_items(position: usize, item_count: usize) -> Self {
        Self {
            id: PatternId::generate(),
            name: Self::default_name(position),
            items: (0..item_count).map(|_| CheckItem::blank()).collect(),
        }
    }

    pub fn default_name(position: usize) -> String {
        format!("パターン{}", position + 1)
    }

    pub fn item(&self, id: &ItemId) -> Option<&CheckItem> {
        find_by_id(&self.items, id)
    }

    pub fn item_mut(&mut self, id: &ItemId) -> Option<&mut CheckItem> {
        find_by_id_mut(&mut self.items, id)
    }

    pub fn position_of(&self, id: &ItemId) -> Option<usize> {
        position_by_id(&self.items, id)
    }

    /// Remove the item with `id`; returns whether it was present
    pub fn remove_item(&mut self, id: &ItemId) -> bool {
        remove_by_id(&mut self.items, id)
    }
}

impl Entity for Pattern {
    type Id = PatternId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResponseType;

    #[test]
    fn test_pattern_creation() {
        let pattern = Pattern::with_blank_items(2, 10);
        assert_eq!(pattern.name, "パターン3");
        assert_eq!(pattern.items.len(), 10);
        assert!(pattern.items.iter().all(|item| item.response_type == ResponseType::FreeText));
    }

    #[test]
    fn test_item_lookup() {
        let pattern = Pattern::with_blank_items(0, 3);
        let second = pattern.items[1].id.clone();
        assert_eq!(pattern.position_of(&second), Some(1));
        assert!(pattern.item(&second).is_some());
        assert!(pattern.item(&ItemId::from("missing")).is_none());
    }

    #[test]
    fn test_remove_item() {
        let mut pattern = Pattern::with_blank_items(0, 3);
        let first = pattern.items[0].id.clone();
        let last = pattern.items[2].id.clone();
        assert!(pattern.remove_item(&first));
        assert!(!pattern.remove_item(&first));
        assert_eq!(pattern.position_of(&last), Some(1));
    }
}
