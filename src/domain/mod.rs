//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, ratings, timestamps)
//! - `user` - Registered accounts
//! - `menu` - Menu aggregate with its sections and items
//! - `dinner` - Dinner aggregate with its reservations

pub mod dinner;
pub mod foundation;
pub mod menu;
pub mod user;
