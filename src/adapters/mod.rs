//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application core to the outside world:
//! - `auth` - JWT token generation and Argon2 password hashing
//! - `http` - axum REST endpoints
//! - `persistence` - In-memory repositories

pub mod auth;
pub mod http;
pub mod persistence;

pub use auth::{Argon2PasswordHasher, JwtTokenGenerator};
pub use http::{api_router, AuthHandlers, MenuHandlers};
pub use persistence::{InMemoryMenuRepository, InMemoryUserRepository};
