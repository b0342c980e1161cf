//! Error types for the routine store.

use crate::framework::StoreError;
use thiserror::Error;

/// Errors that can occur during routine operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RoutineError {
    /// The request body is missing required fields.
    #[error("{0}")]
    Validation(String),

    /// The requested routine was not found.
    #[error("No routine found with id {0}")]
    NotFound(String),

    /// A routine with the same id already exists.
    #[error("A routine with id {0} already exists")]
    AlreadyExists(String),

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    Store(String),
}

impl From<String> for RoutineError {
    fn from(msg: String) -> Self {
        RoutineError::Store(msg)
    }
}

impl From<StoreError> for RoutineError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => RoutineError::NotFound(id),
            StoreError::AlreadyExists(id) => RoutineError::AlreadyExists(id),
            other => RoutineError::Store(other.to_string()),
        }
    }
}
