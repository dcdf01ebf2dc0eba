//! Error types for the address-book data layer.
//!
//! This module defines the failure vocabulary of storage backends using
//! `thiserror`. The manager never maps or swallows these errors; whatever a
//! backend returns is handed to the caller unchanged.

use thiserror::Error;

/// Errors that can occur inside a contact storage backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No stored contact carries the given id
    #[error("Contact not found: {0}")]
    NotFound(u64),

    /// A stored contact already carries the given id
    #[error("Contact already exists: {0}")]
    AlreadyExists(u64),

    /// Generic backend error with context
    #[error("Storage error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;
