//! Password hasher port.

use crate::domain::foundation::DomainError;

/// One-way password hashing used at registration and login.
pub trait PasswordHasher: Send + Sync {
    /// Hashes a plaintext password for storage.
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Checks a plaintext password against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch; `Err` only for unreadable hashes or
    /// hasher faults.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError>;
}
