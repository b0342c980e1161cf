//! Error types for the routine-activity store.

use crate::framework::StoreError;
use thiserror::Error;

/// Errors that can occur during routine-activity operations.
///
/// One variant per failure class; the HTTP layer translates each variant to a
/// status code and `{name, message}` body at the boundary, nowhere else.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RoutineActivityError {
    /// The request body is missing required fields.
    #[error("{0}")]
    Validation(String),

    /// The requested routine activity was not found.
    #[error("No routine activity found with id {0}")]
    NotFound(String),

    /// A routine activity with the same id already exists.
    #[error("A routine activity with id {0} already exists")]
    AlreadyExists(String),

    /// The acting user is authenticated but does not own the parent routine.
    #[error("User {user_id} cannot edit routine activity {id}")]
    Forbidden { id: String, user_id: String },

    /// The store passed the existence check but rejected the create
    /// (e.g., the referenced routine or activity does not exist).
    #[error("Routine activity was not created: {0}")]
    CreationFailed(String),

    /// An error occurred while communicating with the store.
    #[error("Store communication error: {0}")]
    Store(String),
}

impl From<String> for RoutineActivityError {
    fn from(msg: String) -> Self {
        RoutineActivityError::Store(msg)
    }
}

impl From<StoreError> for RoutineActivityError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => RoutineActivityError::NotFound(id),
            StoreError::AlreadyExists(id) => RoutineActivityError::AlreadyExists(id),
            StoreError::Rejected(msg) => RoutineActivityError::CreationFailed(msg),
            other => RoutineActivityError::Store(other.to_string()),
        }
    }
}
