//! Error types for picklist core.

use thiserror::Error;

/// Errors that can occur while editing a sheet or talking to its host.
#[derive(Error, Debug)]
pub enum PicklistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid cell reference: {0}")]
    InvalidCellRef(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Spreadsheet host unavailable: {0}")]
    HostUnavailable(String),

    #[error("Write to {cell} rejected: {reason}")]
    WriteRejected { cell: String, reason: String },

    #[error("Value list is empty")]
    EmptyValueList,
}

pub type Result<T> = std::result::Result<T, PicklistError>;
