//! User domain module.
//!
//! A user is created on registration and is read-only afterwards. The
//! password is stored only as the hash produced by the `PasswordHasher` port.

mod aggregate;
mod errors;

pub use aggregate::User;
pub use errors::UserErrors;
