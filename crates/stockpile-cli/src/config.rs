//! Configuration for the stockpile CLI

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stockpile_adapter::WriteMode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Config file format (stockpile.json)
///
/// Every field is optional; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StockpileConfig {
    /// Directory holding snapshot files
    pub data_dir: PathBuf,

    /// Inventory snapshot file name, relative to `data_dir`
    pub inventory_file: String,

    /// Write snapshots through a temporary file and rename
    pub atomic_writes: bool,
}

impl Default for StockpileConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            inventory_file: "inventory.json".to_string(),
            atomic_writes: false,
        }
    }
}

impl StockpileConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults when no path is given, otherwise the file's contents
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn inventory_path(&self) -> PathBuf {
        self.data_dir.join(&self.inventory_file)
    }

    pub fn write_mode(&self) -> WriteMode {
        if self.atomic_writes {
            WriteMode::Atomic
        } else {
            WriteMode::InPlace
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_parse() {
        let json = r#"{
            "dataDir": "/var/lib/stockpile",
            "atomicWrites": true
        }"#;

        let config: StockpileConfig = serde_json::from_str(json).unwrap();
        assert_eq!(
            config.inventory_path(),
            PathBuf::from("/var/lib/stockpile/inventory.json")
        );
        assert_eq!(config.write_mode(), WriteMode::Atomic);
    }

    #[test]
    fn test_defaults_without_file() {
        let config = StockpileConfig::load(None).unwrap();
        assert_eq!(config, StockpileConfig::default());
        assert_eq!(config.write_mode(), WriteMode::InPlace);
    }

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stockpile.json");
        std::fs::write(&path, r#"{ "inventoryFile": "stock.json" }"#).unwrap();

        let config = StockpileConfig::load(Some(&path)).unwrap();
        assert_eq!(config.inventory_file, "stock.json");
        assert_eq!(config.data_dir, PathBuf::from("."));
    }

    #[test]
    fn test_bad_config_is_an_error() {
        let dir = tempdir().unwrap();

        let missing = dir.path().join("missing.json");
        assert!(matches!(
            StockpileConfig::from_file(&missing),
            Err(ConfigError::Read { .. })
        ));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ dataDir: ").unwrap();
        assert!(matches!(
            StockpileConfig::from_file(&broken),
            Err(ConfigError::Parse { .. })
        ));
    }
}
