//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The table name is not one of the tables fixed at startup
    #[error("Table not found")]
    TableNotFound(String),

    /// The table exists but holds no record with this id
    #[error("Record not found")]
    RecordNotFound { table: String, id: String },

    /// Seed data violates a table invariant
    #[error("Invalid seed data for table '{table}': {reason}")]
    InvalidSeed { table: String, reason: String },
}

/// Rows that cannot form a table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("record at position {position} has no string id")]
    MissingId { position: usize },

    #[error("duplicate id '{0}'")]
    DuplicateId(String),
}

impl StoreError {
    pub fn record_not_found(table: &str, id: &str) -> Self {
        Self::RecordNotFound {
            table: table.to_string(),
            id: id.to_string(),
        }
    }

    pub fn invalid_seed(table: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSeed {
            table: table.to_string(),
            reason: reason.into(),
        }
    }

    /// True for the two lookup failures a caller can trigger
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::TableNotFound(_) | StoreError::RecordNotFound { .. }
        )
    }
}
