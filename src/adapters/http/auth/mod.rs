//! HTTP adapter for authentication endpoints.
//!
//! - `POST /auth/register` - Create an account and receive a token
//! - `POST /auth/login` - Exchange credentials for a token

mod dto;
mod handlers;
mod routes;

pub use dto::{AuthenticationResponse, LoginRequest, RegisterRequest};
pub use handlers::AuthHandlers;
pub use routes::auth_routes;
