//! JWT token generator.
//!
//! Issues HS256 tokens whose subject is the user id and which carry the
//! user's names as `given_name` / `family_name`.

use async_trait::async_trait;
use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use tracing::error;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::ports::TokenGenerator;

/// Claims written into every token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user ID)
    pub sub: String,
    pub given_name: String,
    pub family_name: String,
    /// Unique token id
    pub jti: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
    pub iss: String,
    pub aud: String,
}

/// `TokenGenerator` backed by `jsonwebtoken`.
pub struct JwtTokenGenerator {
    encoding_key: EncodingKey,
    issuer: String,
    audience: String,
    expiry_minutes: i64,
}

impl JwtTokenGenerator {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.expose_secret().as_bytes()),
            issuer: config.jwt_issuer.clone(),
            audience: config.jwt_audience.clone(),
            expiry_minutes: config.token_expiry_minutes,
        }
    }

    fn claims(&self, user_id: &UserId, first_name: &str, last_name: &str) -> TokenClaims {
        let now = Timestamp::now();
        TokenClaims {
            sub: user_id.to_string(),
            given_name: first_name.to_string(),
            family_name: last_name.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now.as_unix_secs(),
            exp: now.plus_minutes(self.expiry_minutes).as_unix_secs(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        }
    }
}

#[async_trait]
impl TokenGenerator for JwtTokenGenerator {
    async fn generate(
        &self,
        user_id: &UserId,
        first_name: &str,
        last_name: &str,
    ) -> Result<String, DomainError> {
        let claims = self.claims(user_id, first_name, last_name);
        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            error!(error = %e, "Token signing failed");
            DomainError::new(ErrorCode::TokenGenerationFailed, "Failed to generate token")
        })
    }
}
