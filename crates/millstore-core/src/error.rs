//! Error types for the millstore store.

use millstore_tables::TableError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the warehouse workbook
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Cannot read workbook {}: {message}", .path.display())]
    StorageUnreadable { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Workbook has no sheet named {0:?}")]
    MissingTable(String),

    #[error("Sheet {table:?} has no {header:?} column")]
    MissingField { table: String, header: String },

    #[error("Invalid position: {0:?}")]
    InvalidPosition(String),

    #[error("Field {field} contains a line break")]
    EncodingOverflow { field: &'static str },

    #[error("Config error in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

impl StoreError {
    /// The stable kind name reported to callers.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::StorageUnreadable { .. } | StoreError::Io(_) | StoreError::Config { .. } => {
                "StorageUnreadable"
            }
            StoreError::MissingTable(_) => "MissingTable",
            StoreError::MissingField { .. } => "MissingField",
            StoreError::InvalidPosition(_) => "InvalidPosition",
            StoreError::EncodingOverflow { .. } => "EncodingOverflow",
        }
    }
}

impl From<TableError> for StoreError {
    fn from(err: TableError) -> Self {
        match err {
            TableError::InvalidPosition(s) => StoreError::InvalidPosition(s),
            TableError::EncodingOverflow { field } => StoreError::EncodingOverflow { field },
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_errors_keep_their_kind() {
        let err: StoreError = TableError::InvalidPosition("0-1".into()).into();
        assert_eq!(err.kind(), "InvalidPosition");
        let err: StoreError = TableError::EncodingOverflow { field: "vendorName" }.into();
        assert_eq!(err.kind(), "EncodingOverflow");
        assert_eq!(err.to_string(), "Field vendorName contains a line break");
    }

    #[test]
    fn io_reports_as_unreadable() {
        let err: StoreError = std::io::Error::other("locked").into();
        assert_eq!(err.kind(), "StorageUnreadable");
    }
}
