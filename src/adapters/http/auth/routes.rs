//! HTTP routes for authentication endpoints.

use axum::{routing::post, Router};

use super::handlers::{login, register, AuthHandlers};

/// Creates the authentication router.
pub fn auth_routes(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .with_state(handlers)
}
