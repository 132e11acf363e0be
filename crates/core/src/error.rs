//! Domain error model.

use thiserror::Error;

/// Result type used across the service and domain layers.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Absence on a plain lookup is not an error: `get`-style operations return
/// `Option`. `NotFound` is reserved for operations that require the record
/// to exist (update, delete, status changes, references).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. blank title).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. empty string).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The identified record does not exist in its collection.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A conflict occurred (duplicate id, stale revision).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The runtime stopped before the operation finished.
    #[error("operation interrupted: {0}")]
    Interrupted(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn interrupted(msg: impl Into<String>) -> Self {
        Self::Interrupted(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
