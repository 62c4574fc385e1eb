//! HTTP DTOs for authentication endpoints.

use serde::{Deserialize, Serialize};

use crate::application::{AuthenticationResult, LoginQuery, RegisterCommand};

/// Request to register a new account.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl From<RegisterRequest> for RegisterCommand {
    fn from(req: RegisterRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
        }
    }
}

/// Request to log in.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl From<LoginRequest> for LoginQuery {
    fn from(req: LoginRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
        }
    }
}

/// Body returned by register and login. Never includes the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticationResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub token: String,
}

impl From<AuthenticationResult> for AuthenticationResponse {
    fn from(result: AuthenticationResult) -> Self {
        Self {
            id: result.user.id().to_string(),
            first_name: result.user.first_name().to_string(),
            last_name: result.user.last_name().to_string(),
            email: result.user.email().to_string(),
            token: result.token,
        }
    }
}
