//! LoginHandler - Query handler authenticating existing users.

use std::sync::Arc;

use tracing::{info, warn};
use validator::Validate;

use crate::application::validation::validate_command;
use crate::domain::foundation::ErrorList;
use crate::domain::user::UserErrors;
use crate::ports::{PasswordHasher, TokenGenerator, UserRepository};

use super::AuthenticationResult;

/// Query to authenticate with email and password.
#[derive(Debug, Clone, Validate)]
pub struct LoginQuery {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Plaintext behind the hash checked when no user matches the email.
const DECOY_PASSWORD: &str = "decoy-password-never-matches";

/// Handler for login.
///
/// Unknown email and wrong password produce the same error value, and both
/// pay for one password verification.
pub struct LoginHandler {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenGenerator>,
    decoy_hash: Option<String>,
}

impl LoginHandler {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenGenerator>,
    ) -> Self {
        let decoy_hash = match hasher.hash(DECOY_PASSWORD) {
            Ok(hash) => Some(hash),
            Err(e) => {
                warn!(error = %e, "Could not prepare decoy password hash");
                None
            }
        };
        Self {
            users,
            hasher,
            tokens,
            decoy_hash,
        }
    }

    #[tracing::instrument(name = "login", skip_all)]
    pub async fn handle(&self, query: LoginQuery) -> Result<AuthenticationResult, ErrorList> {
        validate_command(&query)?;

        let Some(user) = self.users.find_by_email(&query.email).await? else {
            if let Some(hash) = &self.decoy_hash {
                let _ = self.hasher.verify(&query.password, hash);
            }
            warn!("Login rejected");
            return Err(UserErrors::invalid_credentials().into());
        };

        if !self.hasher.verify(&query.password, user.password_hash())? {
            warn!("Login rejected");
            return Err(UserErrors::invalid_credentials().into());
        }

        let token = self
            .tokens
            .generate(user.id(), user.first_name(), user.last_name())
            .await?;

        info!(user_id = %user.id(), "User logged in");
        Ok(AuthenticationResult { user, token })
    }
}
