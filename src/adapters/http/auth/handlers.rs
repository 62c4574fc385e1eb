//! HTTP handlers for authentication endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::handle_errors;
use crate::application::{LoginHandler, RegisterHandler};

use super::dto::{AuthenticationResponse, LoginRequest, RegisterRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AuthHandlers {
    register_handler: Arc<RegisterHandler>,
    login_handler: Arc<LoginHandler>,
}

impl AuthHandlers {
    pub fn new(register_handler: Arc<RegisterHandler>, login_handler: Arc<LoginHandler>) -> Self {
        Self {
            register_handler,
            login_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /auth/register - Create an account
pub async fn register(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<RegisterRequest>,
) -> Response {
    match handlers.register_handler.handle(req.into()).await {
        Ok(result) => (StatusCode::OK, Json(AuthenticationResponse::from(result))).into_response(),
        Err(errors) => handle_errors(errors),
    }
}

/// POST /auth/login - Authenticate
pub async fn login(
    State(handlers): State<AuthHandlers>,
    Json(req): Json<LoginRequest>,
) -> Response {
    match handlers.login_handler.handle(req.into()).await {
        Ok(result) => (StatusCode::OK, Json(AuthenticationResponse::from(result))).into_response(),
        Err(errors) => handle_errors(errors),
    }
}
