//! Stockpile CLI - Command-line interface for the stockpile demos
//!
//! Usage:
//!   stockpile inventory demo                 - Seed, save, reload, list
//!   stockpile inventory seed                 - Write sample items to disk
//!   stockpile inventory add <id> <name> <n>  - Add one item
//!   stockpile inventory show                 - List the saved items
//!   stockpile warehouse [--restock <id>]     - Per-category stock demo
//!   stockpile clinic [--patient <id>]        - Prescriptions by patient

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stockpile_cli::commands::{ClinicCommand, InventoryCommand, WarehouseCommand};
use stockpile_cli::config::StockpileConfig;

#[derive(Parser)]
#[command(name = "stockpile")]
#[command(about = "Stockpile - Keyed entity repositories with JSON snapshots")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Persisted inventory log
    Inventory(InventoryCommand),
    /// Electronics and groceries repositories
    Warehouse(WarehouseCommand),
    /// Patients and prescriptions
    Clinic(ClinicCommand),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = StockpileConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Inventory(cmd) => cmd.run(&config),
        Commands::Warehouse(cmd) => cmd.run(),
        Commands::Clinic(cmd) => cmd.run(),
    }
}
