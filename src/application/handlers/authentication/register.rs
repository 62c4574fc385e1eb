//! RegisterHandler - Command handler for creating user accounts.

use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use crate::application::validation::{not_blank, validate_command};
use crate::domain::foundation::ErrorList;
use crate::domain::user::{User, UserErrors};
use crate::ports::{PasswordHasher, TokenGenerator, UserRepository};

use super::AuthenticationResult;

/// Command to register a new user.
#[derive(Debug, Clone, Validate)]
pub struct RegisterCommand {
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "First name must be at most 100 characters")
    )]
    pub first_name: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Last name must be at most 100 characters")
    )]
    pub last_name: String,
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Handler for user registration.
pub struct RegisterHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenGenerator>,
}

impl RegisterHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenGenerator>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    #[tracing::instrument(name = "register", skip_all)]
    pub async fn handle(&self, cmd: RegisterCommand) -> Result<AuthenticationResult, ErrorList> {
        // 1. Validate input
        validate_command(&cmd)?;

        // 2. Reject known emails; the repository re-checks on insert
        if self.users.find_by_email(&cmd.email).await?.is_some() {
            warn!("Registration rejected: email already in use");
            return Err(UserErrors::duplicate_email().into());
        }

        // 3. Create and persist the user
        let password_hash = self.hasher.hash(&cmd.password)?;
        let user = User::create(cmd.first_name, cmd.last_name, cmd.email, password_hash)?;
        self.users.add(&user).await?;

        // 4. Issue token
        let token = self
            .tokens
            .generate(user.id(), user.first_name(), user.last_name())
            .await?;

        info!(user_id = %user.id(), "User registered");
        Ok(AuthenticationResult { user, token })
    }
}
