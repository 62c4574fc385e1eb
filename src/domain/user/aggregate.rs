//! User aggregate.

use crate::domain::foundation::{bounded_text, DomainError, Timestamp, UserId};

/// Maximum length for first and last names.
pub const MAX_PERSON_NAME_LENGTH: usize = 100;

/// Maximum length for an email address.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// User aggregate - a registered account.
///
/// # Invariants
///
/// - `id` is globally unique
/// - names and email are non-blank
/// - `password_hash` is never the plaintext password
///
/// Email uniqueness is a cross-aggregate rule and is enforced by the
/// registration handler and the repository, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl User {
    /// Creates a new user with a fresh id.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` / `EmptyField` if a name or the email is blank or too long
    pub fn create(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let first_name = bounded_text("first_name", first_name.into(), MAX_PERSON_NAME_LENGTH)?;
        let last_name = bounded_text("last_name", last_name.into(), MAX_PERSON_NAME_LENGTH)?;
        let email = bounded_text("email", email.into(), MAX_EMAIL_LENGTH)?;

        let now = Timestamp::now();
        Ok(Self {
            id: UserId::new_unique(),
            first_name,
            last_name,
            email,
            password_hash: password_hash.into(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a user from persistence (no validation).
    pub fn reconstitute(
        id: UserId,
        first_name: String,
        last_name: String,
        email: String,
        password_hash: String,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            password_hash,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the stored password hash.
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}
