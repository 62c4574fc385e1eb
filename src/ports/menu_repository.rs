//! Menu repository port.
//!
//! Receives the fully formed aggregate; implementations decide how the
//! owned sections and items are stored (nested rows, embedded documents).

use crate::domain::foundation::DomainError;
use crate::domain::menu::Menu;
use async_trait::async_trait;

/// Repository port for Menu aggregate persistence.
#[async_trait]
pub trait MenuRepository: Send + Sync {
    /// Add a new menu together with its sections and items.
    ///
    /// No duplicate detection is required.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn add(&self, menu: &Menu) -> Result<(), DomainError>;
}
