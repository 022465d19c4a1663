//! Error types for the mock backend.
//!
//! The taxonomy is deliberately small. `update` and `delete` on a
//! missing id fail fast with [`DbError::NotFound`]; `get` returning no
//! match and `filter` returning an empty sequence are valid results, not
//! errors. The store never retries or recovers internally.

use thiserror::Error;

use crate::entity::EntityKind;
use crate::record::RecordId;

/// Errors surfaced by database operations.
#[derive(Debug, Error)]
pub enum DbError {
    /// `update` or `delete` named an id that is not in the collection.
    #[error("{kind} record not found: {id}")]
    NotFound {
        /// Collection that was searched.
        kind: EntityKind,
        /// The missing identifier.
        id: RecordId,
    },

    /// Internal invariant breakage (e.g. a poisoned lock). Not part of
    /// the normal caller-visible contract.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl DbError {
    /// Returns true if this is a missing-id failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for database operations.
pub type DbResult<T> = Result<T, DbError>;
