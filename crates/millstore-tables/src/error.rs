//! Error types for table algorithms.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Invalid position: {0:?}")]
    InvalidPosition(String),

    #[error("Field {field} contains a line break")]
    EncodingOverflow { field: &'static str },
}

pub type Result<T> = std::result::Result<T, TableError>;
