//! Mapping of handler errors onto HTTP responses.
//!
//! The first error in the list selects the status; the body lists every
//! error so clients can show all violations at once.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::domain::foundation::{DomainError, ErrorKind, ErrorList};

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorEntry>,
}

/// One error in an [`ErrorResponse`].
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEntry {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<&DomainError> for ErrorEntry {
    fn from(error: &DomainError) -> Self {
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            field: error.field().map(str::to_string),
        }
    }
}

impl From<&ErrorList> for ErrorResponse {
    fn from(errors: &ErrorList) -> Self {
        Self {
            errors: errors.iter().map(ErrorEntry::from).collect(),
        }
    }
}

/// Status code for an error category.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Converts a handler failure into a response.
///
/// Unexpected failures are logged here; their messages are not echoed back.
pub fn handle_errors(errors: ErrorList) -> Response {
    let status = status_for(errors.kind());
    if errors.kind() == ErrorKind::Unexpected {
        error!(error = %errors, "Request failed unexpectedly");
        let body = ErrorResponse {
            errors: vec![ErrorEntry {
                code: errors.first().code.to_string(),
                message: "An unexpected error occurred".to_string(),
                field: None,
            }],
        };
        return (status, Json(body)).into_response();
    }
    (status, Json(ErrorResponse::from(&errors))).into_response()
}
