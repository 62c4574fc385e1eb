//! HTTP handlers for menu endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::handle_errors;
use crate::application::CreateMenuHandler;

use super::dto::{CreateMenuRequest, MenuResponse};

#[derive(Clone)]
pub struct MenuHandlers {
    create_handler: Arc<CreateMenuHandler>,
}

impl MenuHandlers {
    pub fn new(create_handler: Arc<CreateMenuHandler>) -> Self {
        Self { create_handler }
    }
}

/// POST /hosts/:host_id/menus - Create a menu
pub async fn create_menu(
    State(handlers): State<MenuHandlers>,
    Path(host_id): Path<String>,
    Json(req): Json<CreateMenuRequest>,
) -> Response {
    match handlers.create_handler.handle(req.into_command(host_id)).await {
        Ok(menu) => (StatusCode::CREATED, Json(MenuResponse::from(&menu))).into_response(),
        Err(errors) => handle_errors(errors),
    }
}
