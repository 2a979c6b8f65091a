//! Warehouse - Stock kept per category
//!
//! Electronics and groceries live in separate repositories. Both share
//! the `ItemId` key space shape, but ids only need to be unique within
//! one category.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::identity::{Identified, ItemId};
use super::inventory::StockItem;

/// An electronic product with a warranty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectronicItem {
    id: ItemId,
    name: String,
    quantity: u32,
    brand: String,
    warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        quantity: u32,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

impl Identified for ElectronicItem {
    type Key = ItemId;

    fn key(&self) -> &ItemId {
        &self.id
    }
}

impl StockItem for ElectronicItem {
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

/// A perishable grocery product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    id: ItemId,
    name: String,
    quantity: u32,
    expiry_date: NaiveDate,
}

impl GroceryItem {
    pub fn new(id: ItemId, name: impl Into<String>, quantity: u32, expiry_date: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            expiry_date,
        }
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    /// Whether the item is past its expiry date on `today`
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiry_date < today
    }
}

impl Identified for GroceryItem {
    type Key = ItemId;

    fn key(&self) -> &ItemId {
        &self.id
    }
}

impl StockItem for GroceryItem {
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
