//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod authentication;
pub mod menu;

pub use authentication::{
    AuthenticationResult, LoginHandler, LoginQuery, RegisterCommand, RegisterHandler,
};
pub use menu::{CreateMenuCommand, CreateMenuHandler, MenuItemCommand, MenuSectionCommand};
