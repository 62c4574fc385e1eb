//! HTTP routes for menu endpoints.

use axum::{routing::post, Router};

use super::handlers::{create_menu, MenuHandlers};

/// Creates the menu router, mounted under `/hosts`.
pub fn menu_routes(handlers: MenuHandlers) -> Router {
    Router::new()
        .route("/:host_id/menus", post(create_menu))
        .with_state(handlers)
}
