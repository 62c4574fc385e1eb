//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application core and the outside world. Adapters implement these
//! ports; handlers receive them as `Arc<dyn Port>` at construction time.
//!
//! ## Persistence Ports
//!
//! - `UserRepository` - User lookup by email and insertion
//! - `MenuRepository` - Menu insertion
//!
//! ## Security Ports
//!
//! - `TokenGenerator` - Bearer token issuance
//! - `PasswordHasher` - Password hashing and verification

mod menu_repository;
mod password_hasher;
mod token_generator;
mod user_repository;

pub use menu_repository::MenuRepository;
pub use password_hasher::PasswordHasher;
pub use token_generator::TokenGenerator;
pub use user_repository::UserRepository;
