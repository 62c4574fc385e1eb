//! Process wiring: adapters into handlers into the router.

use std::sync::Arc;

use axum::Router;

use crate::adapters::{
    api_router, Argon2PasswordHasher, AuthHandlers, InMemoryMenuRepository,
    InMemoryUserRepository, JwtTokenGenerator, MenuHandlers,
};
use crate::application::{CreateMenuHandler, LoginHandler, RegisterHandler};
use crate::config::AuthConfig;
use crate::ports::{MenuRepository, PasswordHasher, TokenGenerator, UserRepository};

/// Builds the API router backed by in-memory repositories.
pub fn build_router(auth: &AuthConfig) -> Router {
    let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let menus: Arc<dyn MenuRepository> = Arc::new(InMemoryMenuRepository::new());
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::new());
    let tokens: Arc<dyn TokenGenerator> = Arc::new(JwtTokenGenerator::new(auth));

    let auth_handlers = AuthHandlers::new(
        Arc::new(RegisterHandler::new(
            users.clone(),
            hasher.clone(),
            tokens.clone(),
        )),
        Arc::new(LoginHandler::new(users, hasher, tokens)),
    );
    let menu_handlers = MenuHandlers::new(Arc::new(CreateMenuHandler::new(menus)));

    api_router(auth_handlers, menu_handlers)
}
