//! HTTP adapter for menu endpoints.
//!
//! - `POST /hosts/:host_id/menus` - Publish a menu for a host

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AverageRatingResponse, CreateMenuRequest, MenuItemRequest, MenuItemResponse, MenuResponse,
    MenuSectionRequest, MenuSectionResponse,
};
pub use handlers::MenuHandlers;
pub use routes::menu_routes;
