//! stockpile inventory command

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use stockpile_adapter::{InMemoryRepository, JsonFileLog, LoadOutcome, PersistenceError};
use stockpile_domain::{EntityRepository, InventoryItem, ItemId, RepositoryError, StockItem};
use tracing::{info, warn};

use crate::config::StockpileConfig;

#[derive(Debug, Args)]
pub struct InventoryCommand {
    #[command(subcommand)]
    pub command: InventorySubcommand,
}

#[derive(Debug, Subcommand)]
pub enum InventorySubcommand {
    /// Seed, save, then reload in a fresh session and list
    Demo,
    /// Write the sample items to the inventory file
    Seed,
    /// Add one item to the inventory file
    Add {
        /// Item id (must not exist yet)
        id: u32,
        /// Item name
        name: String,
        /// Quantity on hand
        quantity: u32,
    },
    /// List the items in the inventory file
    Show,
}

/// Inventory repository paired with its snapshot file
pub struct InventoryRecords {
    repo: InMemoryRepository<InventoryItem>,
    log: JsonFileLog<InventoryItem>,
}

impl InventoryRecords {
    pub fn open(config: &StockpileConfig) -> Self {
        Self {
            repo: InMemoryRepository::new(),
            log: JsonFileLog::new(config.inventory_path()).with_write_mode(config.write_mode()),
        }
    }

    /// Replace the in-memory items with the file's contents
    ///
    /// Both the log and the repository are swapped only after the file
    /// has been read and every id checked; a failed load changes nothing.
    pub fn load(&mut self) -> anyhow::Result<LoadOutcome> {
        let mut staged = JsonFileLog::new(self.log.path()).with_write_mode(self.log.write_mode());
        let outcome = staged.load()?;
        let repo = InMemoryRepository::from_items(staged.get_all())?;

        self.log = staged;
        self.repo = repo;
        Ok(outcome)
    }

    pub fn seed_sample_data(&mut self, now: DateTime<Utc>) -> Result<(), RepositoryError> {
        for item in sample_items(now) {
            self.repo.add(item)?;
        }
        Ok(())
    }

    pub fn add(&mut self, item: InventoryItem) -> Result<(), RepositoryError> {
        self.repo.add(item)
    }

    /// Mirror the current items to the inventory file
    pub fn save(&mut self) -> Result<(), PersistenceError> {
        self.log.save_snapshot(self.repo.get_all())
    }

    pub fn items(&self) -> Vec<InventoryItem> {
        self.repo.get_all()
    }
}

pub fn sample_items(now: DateTime<Utc>) -> Vec<InventoryItem> {
    [
        (1, "Laptop", 10),
        (2, "Mouse", 50),
        (3, "Keyboard", 30),
        (4, "Monitor", 15),
        (5, "Printer", 5),
    ]
    .into_iter()
    .map(|(id, name, quantity)| InventoryItem::new(ItemId::new(id), name, quantity, now))
    .collect()
}

fn print_items(items: &[InventoryItem]) {
    if items.is_empty() {
        println!("No inventory data to display.");
        return;
    }

    println!("Inventory Items:");
    for item in items {
        println!(
            "ID: {}, Name: {}, Quantity: {}, DateAdded: {}",
            item.id(),
            item.name(),
            item.quantity(),
            item.date_added().format("%Y-%m-%d %H:%M:%S")
        );
    }
}

fn report_load(outcome: LoadOutcome, config: &StockpileConfig) {
    match outcome {
        LoadOutcome::Loaded { count } => {
            info!(count, path = %config.inventory_path().display(), "Inventory loaded")
        }
        LoadOutcome::NoData => println!("No data found in file."),
        LoadOutcome::Missing => println!("File not found. No data loaded."),
    }
}

impl InventoryCommand {
    pub fn run(&self, config: &StockpileConfig) -> anyhow::Result<()> {
        match &self.command {
            InventorySubcommand::Demo => {
                let mut first = InventoryRecords::open(config);
                first.seed_sample_data(Utc::now())?;
                first.save()?;
                println!("Sample data seeded and saved.");

                println!();
                println!("--- Simulating new session ---");
                println!();

                let mut second = InventoryRecords::open(config);
                let outcome = second.load()?;
                report_load(outcome, config);
                print_items(&second.items());
            }
            InventorySubcommand::Seed => {
                let mut records = InventoryRecords::open(config);
                records.seed_sample_data(Utc::now())?;
                records.save()?;
                println!("Sample data seeded.");
            }
            InventorySubcommand::Add { id, name, quantity } => {
                let mut records = InventoryRecords::open(config);
                records.load()?;

                let item =
                    InventoryItem::new(ItemId::new(*id), name.as_str(), *quantity, Utc::now());
                match records.add(item) {
                    Ok(()) => {
                        records.save()?;
                        println!("Added item {}.", id);
                    }
                    Err(e) => {
                        warn!(error = %e, "Inventory add rejected");
                        println!("Error adding item: {}", e);
                    }
                }
            }
            InventorySubcommand::Show => {
                let mut records = InventoryRecords::open(config);
                let outcome = records.load()?;
                report_load(outcome, config);
                print_items(&records.items());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn config_in(dir: &std::path::Path, atomic: bool) -> StockpileConfig {
        StockpileConfig {
            data_dir: dir.to_path_buf(),
            atomic_writes: atomic,
            ..StockpileConfig::default()
        }
    }

    #[test]
    fn test_seed_save_and_reload() {
        let dir = tempdir().unwrap();
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();

        for atomic in [false, true] {
            let config = config_in(dir.path(), atomic);

            let mut first = InventoryRecords::open(&config);
            first.seed_sample_data(now).unwrap();
            first.save().unwrap();

            let mut second = InventoryRecords::open(&config);
            assert_eq!(second.load().unwrap(), LoadOutcome::Loaded { count: 5 });
            assert_eq!(second.items(), sample_items(now));
        }
    }

    #[test]
    fn test_load_without_file() {
        let dir = tempdir().unwrap();
        let mut records = InventoryRecords::open(&config_in(dir.path(), false));

        assert_eq!(records.load().unwrap(), LoadOutcome::Missing);
        assert!(records.items().is_empty());
    }

    #[test]
    fn test_add_duplicate_is_rejected() {
        let dir = tempdir().unwrap();
        let mut records = InventoryRecords::open(&config_in(dir.path(), false));
        records.seed_sample_data(Utc::now()).unwrap();

        let err = records
            .add(InventoryItem::new(ItemId::new(1), "Tablet", 3, Utc::now()))
            .unwrap_err();
        assert!(matches!(err, RepositoryError::DuplicateKey { .. }));
        assert_eq!(records.items()[0].name(), "Laptop");
    }

    #[test]
    fn test_failed_load_keeps_state_in_sync() {
        let dir = tempdir().unwrap();
        let config = config_in(dir.path(), false);
        let now = Utc::now();

        let mut records = InventoryRecords::open(&config);
        records.seed_sample_data(now).unwrap();
        records.save().unwrap();

        // Another writer leaves a file with a repeated id
        let mut log = JsonFileLog::new(config.inventory_path());
        log.add(InventoryItem::new(ItemId::new(1), "Laptop", 1, now));
        log.add(InventoryItem::new(ItemId::new(1), "Laptop again", 2, now));
        log.save().unwrap();

        assert!(records.load().is_err());
        assert_eq!(records.items(), sample_items(now));
        assert_eq!(records.log.entries(), records.items().as_slice());
    }

    #[test]
    fn test_seed_twice_fails() {
        let dir = tempdir().unwrap();
        let mut records = InventoryRecords::open(&config_in(dir.path(), false));

        records.seed_sample_data(Utc::now()).unwrap();
        assert!(records.seed_sample_data(Utc::now()).is_err());
        assert_eq!(records.items().len(), 5);
    }
}
