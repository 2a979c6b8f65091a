//! Stock - Validated quantity changes
//!
//! Quantities are stored as `u32`, but callers speak in signed numbers
//! (a requested quantity of -5 must be reported, not wrapped). The
//! mutators here validate first and only then touch the entity, and are
//! meant to be passed to [`EntityRepository::update_field`].

use crate::model::identity::ItemId;
use crate::model::inventory::StockItem;
use crate::repository::entity_repository::{EntityRepository, InvalidValue, RepositoryError};

fn checked_quantity(value: i64) -> Result<u32, InvalidValue> {
    if value < 0 {
        return Err(InvalidValue::new("quantity", "Quantity cannot be negative"));
    }
    u32::try_from(value).map_err(|_| {
        InvalidValue::new(
            "quantity",
            format!("Quantity {} exceeds the maximum of {}", value, u32::MAX),
        )
    })
}

/// Mutator replacing the quantity with `new_quantity`
pub fn set_quantity<T: StockItem>(
    new_quantity: i64,
) -> impl FnOnce(&mut T) -> Result<(), InvalidValue> {
    move |item| {
        let quantity = checked_quantity(new_quantity)?;
        item.set_quantity(quantity);
        Ok(())
    }
}

/// Mutator shifting the quantity by `delta`
pub fn adjust_quantity<T: StockItem>(
    delta: i64,
) -> impl FnOnce(&mut T) -> Result<(), InvalidValue> {
    move |item| {
        let target = i64::from(item.quantity())
            .checked_add(delta)
            .ok_or_else(|| InvalidValue::new("quantity", "Quantity adjustment overflows"))?;
        let quantity = checked_quantity(target)?;
        item.set_quantity(quantity);
        Ok(())
    }
}

/// Quantity operations for any repository of stock items
pub trait StockRepositoryExt<T>: EntityRepository<T>
where
    T: StockItem + Clone,
{
    /// Set the quantity of `id`. Negative values fail with `InvalidValue`.
    fn update_quantity(&mut self, id: &ItemId, new_quantity: i64) -> Result<(), RepositoryError> {
        self.update_field(id, set_quantity::<T>(new_quantity))
    }

    /// Add `amount` to the quantity of `id`, returning the new quantity
    fn increase_stock(&mut self, id: &ItemId, amount: u32) -> Result<u32, RepositoryError> {
        self.update_field(id, adjust_quantity::<T>(i64::from(amount)))?;
        Ok(self.get_by_id(id)?.quantity())
    }
}

impl<T, R> StockRepositoryExt<T> for R
where
    T: StockItem + Clone,
    R: EntityRepository<T> + ?Sized,
{
}
