//! Menu handlers.

mod create_menu;

pub use create_menu::{CreateMenuCommand, CreateMenuHandler, MenuItemCommand, MenuSectionCommand};
