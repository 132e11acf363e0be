//! Per-record revisions for optimistic concurrency.

use crate::error::{DomainError, DomainResult};

/// A stored record together with its revision.
///
/// Revisions start at 1 on insert and grow by one on every update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revisioned<T> {
    pub revision: u64,
    pub value: T,
}

/// Optimistic concurrency expectation for an update.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ExpectedRevision {
    /// Skip revision checking (last write wins).
    Any,
    /// Require the record to be at an exact revision.
    Exact(u64),
}

impl ExpectedRevision {
    pub fn matches(self, actual: u64) -> bool {
        match self {
            ExpectedRevision::Any => true,
            ExpectedRevision::Exact(v) => v == actual,
        }
    }

    pub fn check(self, actual: u64) -> DomainResult<()> {
        if self.matches(actual) {
            Ok(())
        } else {
            Err(DomainError::conflict(format!(
                "optimistic concurrency check failed (expected: {self:?}, actual: {actual})"
            )))
        }
    }
}
