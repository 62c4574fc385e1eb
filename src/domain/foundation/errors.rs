//! Error types for the domain layer.
//!
//! Handlers never raise for expected business failures. They return an
//! [`ErrorList`] whose entries each carry an [`ErrorCode`], and every code
//! belongs to exactly one [`ErrorKind`] that the transport layer maps to a
//! status.

use serde::Serialize;
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be at most {max} characters, got {actual}")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates a too long validation error.
    pub fn too_long(field: impl Into<String>, max: usize, actual: usize) -> Self {
        ValidationError::TooLong {
            field: field.into(),
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the offending field name.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
        }
    }
}

/// Category of an error, independent of transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    Conflict,
    Unauthorized,
    NotFound,
    Unexpected,
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,
    EmptyField,
    InvalidFormat,

    // Conflict errors
    DuplicateEmail,
    DinnerFullyBooked,
    DinnerNotAcceptingReservations,

    // Authorization errors
    InvalidCredentials,

    // Not found errors
    UserNotFound,
    MenuNotFound,
    DinnerNotFound,

    // Infrastructure errors
    DatabaseError,
    TokenGenerationFailed,
    InternalError,
}

impl ErrorCode {
    /// Returns the category this code belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::InvalidFormat => {
                ErrorKind::Validation
            }
            ErrorCode::DuplicateEmail
            | ErrorCode::DinnerFullyBooked
            | ErrorCode::DinnerNotAcceptingReservations => ErrorKind::Conflict,
            ErrorCode::InvalidCredentials => ErrorKind::Unauthorized,
            ErrorCode::UserNotFound | ErrorCode::MenuNotFound | ErrorCode::DinnerNotFound => {
                ErrorKind::NotFound
            }
            ErrorCode::DatabaseError
            | ErrorCode::TokenGenerationFailed
            | ErrorCode::InternalError => ErrorKind::Unexpected,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::DuplicateEmail => "DUPLICATE_EMAIL",
            ErrorCode::DinnerFullyBooked => "DINNER_FULLY_BOOKED",
            ErrorCode::DinnerNotAcceptingReservations => "DINNER_NOT_ACCEPTING_RESERVATIONS",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::MenuNotFound => "MENU_NOT_FOUND",
            ErrorCode::DinnerNotFound => "DINNER_NOT_FOUND",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::TokenGenerationFailed => "TOKEN_GENERATION_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationFailed, message).with_detail("field", field)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns the error category.
    pub fn kind(&self) -> ErrorKind {
        self.code.kind()
    }

    /// Returns the field path for validation errors.
    pub fn field(&self) -> Option<&str> {
        self.details.get("field").map(String::as_str)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let code = match err {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::TooLong { .. } => ErrorCode::ValidationFailed,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
        };
        let field = err.field().to_string();
        DomainError::new(code, err.to_string()).with_detail("field", field)
    }
}

/// Non-empty, ordered list of domain errors returned by every handler.
///
/// The first error decides the transport status; the full list lets a
/// caller show every violation at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorList {
    first: DomainError,
    rest: Vec<DomainError>,
}

impl ErrorList {
    /// Wraps a single error.
    pub fn single(error: DomainError) -> Self {
        Self {
            first: error,
            rest: Vec::new(),
        }
    }

    /// Builds a list from a vector, returning `None` when it is empty.
    pub fn from_vec(errors: Vec<DomainError>) -> Option<Self> {
        let mut iter = errors.into_iter();
        let first = iter.next()?;
        Some(Self {
            first,
            rest: iter.collect(),
        })
    }

    /// Returns the first error.
    pub fn first(&self) -> &DomainError {
        &self.first
    }

    /// Returns the kind of the first error.
    pub fn kind(&self) -> ErrorKind {
        self.first.kind()
    }

    /// Number of errors; always at least one.
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// Always false; present for API symmetry with collections.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over all errors in order.
    pub fn iter(&self) -> impl Iterator<Item = &DomainError> {
        std::iter::once(&self.first).chain(self.rest.iter())
    }

    /// Returns true if any error has the given code.
    pub fn contains(&self, code: ErrorCode) -> bool {
        self.iter().any(|e| e.code == code)
    }

    /// Consumes the list into a vector.
    pub fn into_vec(self) -> Vec<DomainError> {
        let mut errors = Vec::with_capacity(self.len());
        errors.push(self.first);
        errors.extend(self.rest);
        errors
    }
}

impl Extend<DomainError> for ErrorList {
    fn extend<I: IntoIterator<Item = DomainError>>(&mut self, iter: I) {
        self.rest.extend(iter);
    }
}

impl From<DomainError> for ErrorList {
    fn from(error: DomainError) -> Self {
        Self::single(error)
    }
}

impl From<ValidationError> for ErrorList {
    fn from(error: ValidationError) -> Self {
        Self::single(error.into())
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first)?;
        if !self.rest.is_empty() {
            write!(f, " (+{} more)", self.rest.len())?;
        }
        Ok(())
    }
}

impl Error for ErrorList {}
