//! HTTP adapters - REST API implementations.
//!
//! Each area has its own adapter with `dto`, `handlers` and `routes`;
//! [`api_router`] mounts them together.

pub mod auth;
pub mod error;
pub mod menu;

pub use auth::{auth_routes, AuthHandlers};
pub use error::{handle_errors, status_for, ErrorEntry, ErrorResponse};
pub use menu::{menu_routes, MenuHandlers};

use axum::Router;
use tower_http::trace::TraceLayer;

/// Builds the full API router with request tracing.
pub fn api_router(auth: AuthHandlers, menus: MenuHandlers) -> Router {
    Router::new()
        .nest("/auth", auth_routes(auth))
        .nest("/hosts", menu_routes(menus))
        .layer(TraceLayer::new_for_http())
}
