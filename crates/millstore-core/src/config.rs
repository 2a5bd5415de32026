//! Store configuration: where the workbook lives and what its sheets are called.
//!
//! ```toml
//! file = "warehouse_data.xlsx"
//! log_filter = "info"
//!
//! [sheets]
//! ledger = "intake"
//! ```

use crate::error::{Result, StoreError};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE: &str = "warehouse_data.xlsx";
pub const CONFIG_FILE: &str = "config.toml";

/// Names of the six sheets, in workbook order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SheetNames {
    /// Positional bin map.
    pub map: String,
    /// Generic dropdown options (one column per dropdown).
    pub options: String,
    /// Append-only intake ledger.
    pub ledger: String,
    pub customers: String,
    pub goods: String,
    /// Sales page dropdown vocabulary.
    pub sales_options: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        SheetNames {
            map: "map".to_string(),
            options: "rowdown".to_string(),
            ledger: "test".to_string(),
            customers: "sale_sheet_data".to_string(),
            goods: "goods_sheet".to_string(),
            sales_options: "rowdown_order".to_string(),
        }
    }
}

impl SheetNames {
    pub fn in_order(&self) -> [&str; 6] {
        [
            &self.map,
            &self.options,
            &self.ledger,
            &self.customers,
            &self.goods,
            &self.sales_options,
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Workbook path. Relative paths resolve against the working directory.
    pub file: PathBuf,
    /// `tracing` filter used when `MILLSTORE_LOG` is unset.
    pub log_filter: String,
    pub sheets: SheetNames,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            file: PathBuf::from(DEFAULT_FILE),
            log_filter: "warn".to_string(),
            sheets: SheetNames::default(),
        }
    }
}

impl StoreConfig {
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| StoreError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load a config file. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| StoreError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Load the per-user config if there is one, otherwise use defaults.
    pub fn discover() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// `<config dir>/millstore/config.toml` for the current user.
pub fn default_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "millstore")?;
    Some(proj.config_dir().join(CONFIG_FILE))
}
