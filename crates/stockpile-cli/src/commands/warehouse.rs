//! stockpile warehouse command

use chrono::{Days, Months, NaiveDate, Utc};
use clap::Args;
use stockpile_adapter::InMemoryRepository;
use stockpile_domain::{
    ElectronicItem, EntityRepository, GroceryItem, ItemId, RepositoryError, StockItem,
    StockRepositoryExt,
};
use tracing::warn;

#[derive(Debug, Args)]
pub struct WarehouseCommand {
    /// Electronic item to restock at the end of the run
    #[arg(long, default_value_t = 1)]
    pub restock: u32,

    /// Units added when restocking
    #[arg(long, default_value_t = 3)]
    pub amount: u32,
}

/// One repository per stock category
#[derive(Debug, Default)]
pub struct WarehouseManager {
    electronics: InMemoryRepository<ElectronicItem>,
    groceries: InMemoryRepository<GroceryItem>,
}

impl WarehouseManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_data(&mut self, today: NaiveDate) -> Result<(), RepositoryError> {
        self.electronics
            .add(ElectronicItem::new(ItemId::new(1), "Laptop", 5, "Dell", 24))?;
        self.electronics
            .add(ElectronicItem::new(ItemId::new(2), "Smartphone", 10, "Samsung", 12))?;

        let in_six_months = today.checked_add_months(Months::new(6)).unwrap_or(NaiveDate::MAX);
        let in_ten_days = today.checked_add_days(Days::new(10)).unwrap_or(NaiveDate::MAX);
        self.groceries
            .add(GroceryItem::new(ItemId::new(1), "Rice", 100, in_six_months))?;
        self.groceries
            .add(GroceryItem::new(ItemId::new(2), "Milk", 50, in_ten_days))?;
        Ok(())
    }

    pub fn electronics(&self) -> &InMemoryRepository<ElectronicItem> {
        &self.electronics
    }

    pub fn electronics_mut(&mut self) -> &mut InMemoryRepository<ElectronicItem> {
        &mut self.electronics
    }

    pub fn groceries(&self) -> &InMemoryRepository<GroceryItem> {
        &self.groceries
    }

    pub fn groceries_mut(&mut self) -> &mut InMemoryRepository<GroceryItem> {
        &mut self.groceries
    }
}

/// List every item of one category
pub fn print_all_items<T>(repo: &InMemoryRepository<T>)
where
    T: StockItem + Clone,
{
    for item in repo.iter() {
        println!(
            "ID: {}, Name: {}, Quantity: {}",
            item.key(),
            item.name(),
            item.quantity()
        );
    }
    println!();
}

/// Increase stock, reporting failures instead of aborting the run
pub fn increase_stock<T, R>(repo: &mut R, id: ItemId, amount: u32)
where
    T: StockItem + Clone,
    R: EntityRepository<T>,
{
    match <R as StockRepositoryExt<T>>::increase_stock(repo, &id, amount) {
        Ok(quantity) => println!("Stock updated for item ID {}: New Quantity = {}", id, quantity),
        Err(e) => {
            warn!(error = %e, "Stock update failed");
            println!("Error updating stock: {}", e);
        }
    }
}

/// Remove an item, reporting failures instead of aborting the run
pub fn remove_item_by_id<T, R>(repo: &mut R, id: ItemId)
where
    T: StockItem + Clone,
    R: EntityRepository<T>,
{
    match repo.remove(&id) {
        Ok(_) => println!("Item with ID {} removed successfully.", id),
        Err(e) => {
            warn!(error = %e, "Removal failed");
            println!("Error removing item: {}", e);
        }
    }
}

impl WarehouseCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        let today = Utc::now().date_naive();
        let mut manager = WarehouseManager::new();
        manager.seed_data(today)?;

        println!("=== Grocery Items ===");
        print_all_items(manager.groceries());

        println!("=== Electronic Items ===");
        print_all_items(manager.electronics());

        println!("=== Testing Errors ===");

        let bread = GroceryItem::new(
            ItemId::new(1),
            "Bread",
            30,
            today.checked_add_days(Days::new(5)).unwrap_or(NaiveDate::MAX),
        );
        if let Err(e) = manager.groceries_mut().add(bread) {
            warn!(error = %e, "Duplicate add rejected");
            println!("Error adding duplicate: {}", e);
        }

        remove_item_by_id(manager.electronics_mut(), ItemId::new(99));

        if let Err(e) = manager.electronics_mut().update_quantity(&ItemId::new(1), -5) {
            warn!(error = %e, "Quantity update rejected");
            println!("Error updating quantity: {}", e);
        }

        println!();
        increase_stock(manager.electronics_mut(), ItemId::new(self.restock), self.amount);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> WarehouseManager {
        let today = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let mut manager = WarehouseManager::new();
        manager.seed_data(today).unwrap();
        manager
    }

    #[test]
    fn test_seed_data() {
        let manager = seeded();

        assert_eq!(manager.electronics().len(), 2);
        assert_eq!(manager.groceries().len(), 2);

        let rice = manager.groceries().get_by_id(&ItemId::new(1)).unwrap();
        assert_eq!(rice.expiry_date(), NaiveDate::from_ymd_opt(2024, 7, 31).unwrap());

        let milk = manager.groceries().get_by_id(&ItemId::new(2)).unwrap();
        assert_eq!(milk.expiry_date(), NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
    }

    #[test]
    fn test_categories_have_separate_key_spaces() {
        let manager = seeded();

        let laptop = manager.electronics().get_by_id(&ItemId::new(1)).unwrap();
        let rice = manager.groceries().get_by_id(&ItemId::new(1)).unwrap();
        assert_eq!(laptop.name(), "Laptop");
        assert_eq!(rice.name(), "Rice");
    }

    #[test]
    fn test_error_paths_leave_state_intact() {
        let mut manager = seeded();

        let bread = GroceryItem::new(
            ItemId::new(1),
            "Bread",
            30,
            NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
        );
        assert!(matches!(
            manager.groceries_mut().add(bread),
            Err(RepositoryError::DuplicateKey { .. })
        ));

        remove_item_by_id(manager.electronics_mut(), ItemId::new(99));
        assert_eq!(manager.electronics().len(), 2);

        assert!(matches!(
            manager.electronics_mut().update_quantity(&ItemId::new(1), -5),
            Err(RepositoryError::InvalidValue { .. })
        ));
        assert_eq!(
            manager.electronics().get_by_id(&ItemId::new(1)).unwrap().quantity(),
            5
        );
    }

    #[test]
    fn test_increase_stock() {
        let mut manager = seeded();

        increase_stock(manager.electronics_mut(), ItemId::new(1), 3);
        assert_eq!(
            manager.electronics().get_by_id(&ItemId::new(1)).unwrap().quantity(),
            8
        );

        // Unknown id is reported, not fatal
        increase_stock(manager.electronics_mut(), ItemId::new(42), 3);
        assert_eq!(manager.electronics().len(), 2);
    }

    #[test]
    fn test_remove_item() {
        let mut manager = seeded();

        remove_item_by_id(manager.groceries_mut(), ItemId::new(2));
        assert!(!manager.groceries().contains(&ItemId::new(2)));
    }
}
