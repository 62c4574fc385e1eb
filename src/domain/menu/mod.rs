//! Menu domain module.
//!
//! A menu is published by a host and owns its sections, which in turn own
//! their items. Dinners and reviews refer to a menu only by id.

mod aggregate;
mod section;

pub use aggregate::Menu;
pub use section::{MenuItem, MenuSection};
