//! CLI Commands

pub mod clinic;
pub mod inventory;
pub mod warehouse;

pub use clinic::ClinicCommand;
pub use inventory::InventoryCommand;
pub use warehouse::WarehouseCommand;
