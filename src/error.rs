//! Error types for the Paradox query engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParadoxError>;

#[derive(Error, Debug)]
pub enum ParadoxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid SQL: {0}")]
    InvalidSql(String),

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Invalid cursor state: {0}")]
    InvalidState(String),

    #[error("Data format error: {0}")]
    DataFormat(String),

    #[error("Connection failure: {0}")]
    ConnectionFailure(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl ParadoxError {
    /// SQL-state code reported to clients for this error kind.
    pub fn sql_state(&self) -> &'static str {
        match self {
            ParadoxError::InvalidSql(_) => "42000",
            ParadoxError::UnsupportedOperation(_) => "0A000",
            ParadoxError::InvalidState(_) => "24000",
            ParadoxError::DataFormat(_) => "22000",
            ParadoxError::ConnectionFailure(_) | ParadoxError::Io(_) => "08001",
            ParadoxError::NotFound(_) => "42S02",
        }
    }
}
