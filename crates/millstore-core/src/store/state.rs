use crate::config::{SheetNames, StoreConfig};
use crate::error::Result;
use crate::workbook::WorkbookFile;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use tracing::info;

/// Single owner of the warehouse workbook.
///
/// Every operation reads the file afresh; nothing is cached between calls.
/// Writes are serialized by `write_lock` across the whole load, mutate and
/// persist cycle. Reads never take the lock.
pub struct Store {
    pub(crate) file: WorkbookFile,
    pub(crate) sheets: SheetNames,
    pub(crate) write_lock: Mutex<()>,
}

impl Store {
    /// Open the store described by `config`, creating the workbook if needed.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let store = Store {
            file: WorkbookFile::new(config.file.clone()),
            sheets: config.sheets.clone(),
            write_lock: Mutex::new(()),
        };
        store.bootstrap()?;
        Ok(store)
    }

    /// Open a workbook at `path` with the default sheet names.
    pub fn open_path(path: impl Into<PathBuf>) -> Result<Self> {
        let config = StoreConfig {
            file: path.into(),
            ..StoreConfig::default()
        };
        Self::open(&config)
    }

    /// Create the workbook with all six empty sheets if it does not exist.
    /// An existing file is never touched. Returns whether a file was created.
    pub fn bootstrap(&self) -> Result<bool> {
        let _guard = self.write_lock.lock();
        let created = self.file.create_if_missing(&self.sheets.in_order())?;
        if created {
            info!(path = %self.file.path().display(), "created warehouse workbook");
        }
        Ok(created)
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn sheets(&self) -> &SheetNames {
        &self.sheets
    }
}
