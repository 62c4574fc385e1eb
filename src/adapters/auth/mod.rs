//! Authentication adapters.
//!
//! Implementations of the `TokenGenerator` and `PasswordHasher` ports:
//!
//! - `jwt` - HS256 bearer tokens signed with the configured secret
//! - `argon2` - Argon2id password hashes in PHC string format

mod argon2_password_hasher;
mod jwt_token_generator;

pub use argon2_password_hasher::Argon2PasswordHasher;
pub use jwt_token_generator::{JwtTokenGenerator, TokenClaims};
