//! Application layer - Commands, Queries, Validators and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Every handler validates its input first and returns either its result or
//! a non-empty `ErrorList`.

pub mod handlers;
pub mod validation;

pub use handlers::{
    AuthenticationResult, CreateMenuCommand, CreateMenuHandler, LoginHandler, LoginQuery,
    MenuItemCommand, MenuSectionCommand, RegisterCommand, RegisterHandler,
};
