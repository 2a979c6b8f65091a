//! Inventory - Stock-holding entities
//!
//! `StockItem` is the capability shared by everything that carries a
//! quantity on hand. `InventoryItem` is the record kept in the persisted
//! inventory log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identity::{Identified, ItemId};

/// An entity with a name and a mutable quantity on hand
///
/// The quantity is the only field the repository layer ever changes on
/// behalf of a caller, through a validated mutator.
pub trait StockItem: Identified<Key = ItemId> {
    fn name(&self) -> &str;

    fn quantity(&self) -> u32;

    fn set_quantity(&mut self, quantity: u32);
}

/// A single line of the inventory log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    id: ItemId,
    name: String,
    quantity: u32,
    date_added: DateTime<Utc>,
}

impl InventoryItem {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        quantity: u32,
        date_added: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            date_added,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn date_added(&self) -> DateTime<Utc> {
        self.date_added
    }
}

impl Identified for InventoryItem {
    type Key = ItemId;

    fn key(&self) -> &ItemId {
        &self.id
    }
}

impl StockItem for InventoryItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_serialized_field_names() {
        let added = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let item = InventoryItem::new(ItemId::new(1), "Laptop", 10, added);

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "Laptop");
        assert_eq!(value["quantity"], 10);
        assert!(value["dateAdded"].as_str().unwrap().starts_with("2024-03-01T09:30:00"));
    }

    #[test]
    fn test_key_is_id() {
        let item = InventoryItem::new(ItemId::new(5), "Printer", 5, Utc::now());
        assert_eq!(*item.key(), ItemId::new(5));
        assert_eq!(item.name(), "Printer");
    }
}
