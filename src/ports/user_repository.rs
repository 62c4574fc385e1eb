//! User repository port.
//!
//! Defines the contract for persisting and retrieving User aggregates.
//! Any storage technology may implement it.

use crate::domain::foundation::DomainError;
use crate::domain::user::User;
use async_trait::async_trait;

/// Repository port for User aggregate persistence.
///
/// Implementations must ensure:
/// - a user passed to `add` is visible to subsequent `find_by_email` calls
///   on the same instance
/// - `add` rejects a second user with an email already stored, atomically
///   with the insert (e.g. a unique index)
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email.
    ///
    /// Returns `None` if not found.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Add a new user.
    ///
    /// # Errors
    ///
    /// - `DuplicateEmail` if a user with the same email exists
    /// - `DatabaseError` on persistence failure
    async fn add(&self, user: &User) -> Result<(), DomainError>;
}
