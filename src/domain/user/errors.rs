//! Expected failures of the user/authentication flows.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Factory for the user-related business errors.
///
/// Each constructor returns the same value every time, so callers can
/// compare errors for equality.
pub struct UserErrors;

impl UserErrors {
    /// Registration with an email that is already taken.
    pub fn duplicate_email() -> DomainError {
        DomainError::new(ErrorCode::DuplicateEmail, "Email is already in use")
    }

    /// Login failure. Deliberately identical for unknown email and wrong password.
    pub fn invalid_credentials() -> DomainError {
        DomainError::new(ErrorCode::InvalidCredentials, "Invalid credentials")
    }
}
