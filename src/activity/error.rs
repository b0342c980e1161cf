//! Error types for the activity store.

use crate::framework::StoreError;
use thiserror::Error;

/// Errors that can occur during activity operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ActivityError {
    /// The request body is missing required fields.
    #[error("{0}")]
    Validation(String),

    /// The requested activity was not found.
    #[error("No activity found with id {0}")]
    NotFound(String),

    /// An activity with the same id already exists.
    #[error("An activity with id {0} already exists")]
    AlreadyExists(String),

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    Store(String),
}

impl From<String> for ActivityError {
    fn from(msg: String) -> Self {
        ActivityError::Store(msg)
    }
}

impl From<StoreError> for ActivityError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => ActivityError::NotFound(id),
            StoreError::AlreadyExists(id) => ActivityError::AlreadyExists(id),
            other => ActivityError::Store(other.to_string()),
        }
    }
}
