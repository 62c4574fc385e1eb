//! Token generator port.
//!
//! Issues the bearer token returned after registration and login. The core
//! treats the token as an opaque string.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};

/// Issues signed, time-limited bearer tokens.
///
/// # Contract
///
/// Failures (e.g. a misconfigured signing key) are returned as
/// `TokenGenerationFailed` and abort the request.
#[async_trait]
pub trait TokenGenerator: Send + Sync {
    async fn generate(
        &self,
        user_id: &UserId,
        first_name: &str,
        last_name: &str,
    ) -> Result<String, DomainError>;
}
