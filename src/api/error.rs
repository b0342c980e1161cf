//! Domain error to HTTP translation.
//!
//! Every domain failure is a variant of a closed error enum; this module is
//! the only place those variants meet HTTP. Each response carries a
//! `{name, message}` body alongside its status code, and every failure path
//! produces a response - nothing escapes the boundary unstructured.

use crate::activity::ActivityError;
use crate::routine::RoutineError;
use crate::routine_activity::RoutineActivityError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub name: String,
    pub message: String,
}

pub(crate) fn error_response(status: StatusCode, name: &str, message: String) -> Response {
    (
        status,
        Json(ErrorBody {
            name: name.to_string(),
            message,
        }),
    )
        .into_response()
}

impl IntoResponse for RoutineActivityError {
    fn into_response(self) -> Response {
        let (status, name) = match &self {
            RoutineActivityError::Validation(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
            RoutineActivityError::NotFound(_) => (StatusCode::NOT_FOUND, "NotFound"),
            RoutineActivityError::AlreadyExists(_) => (StatusCode::CONFLICT, "Conflict"),
            RoutineActivityError::Forbidden { .. } => (StatusCode::FORBIDDEN, "Forbidden"),
            RoutineActivityError::CreationFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CreationFailed")
            }
            RoutineActivityError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };
        error_response(status, name, self.to_string())
    }
}

impl IntoResponse for RoutineError {
    fn into_response(self) -> Response {
        let (status, name) = match &self {
            RoutineError::Validation(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
            RoutineError::NotFound(_) => (StatusCode::NOT_FOUND, "NotFound"),
            RoutineError::AlreadyExists(_) => (StatusCode::CONFLICT, "Conflict"),
            RoutineError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };
        error_response(status, name, self.to_string())
    }
}

impl IntoResponse for ActivityError {
    fn into_response(self) -> Response {
        let (status, name) = match &self {
            ActivityError::Validation(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
            ActivityError::NotFound(_) => (StatusCode::NOT_FOUND, "NotFound"),
            ActivityError::AlreadyExists(_) => (StatusCode::CONFLICT, "Conflict"),
            ActivityError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };
        error_response(status, name, self.to_string())
    }
}
