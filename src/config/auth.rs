//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Minimum HMAC key length accepted in production.
pub const MIN_PRODUCTION_SECRET_BYTES: usize = 32;

/// Upper bound for token lifetime (one day).
pub const MAX_TOKEN_EXPIRY_MINUTES: i64 = 1440;

/// Authentication configuration (HS256 bearer tokens)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC signing key
    pub jwt_secret: SecretString,

    /// `iss` claim
    #[serde(default = "default_issuer")]
    pub jwt_issuer: String,

    /// `aud` claim
    #[serde(default = "default_audience")]
    pub jwt_audience: String,

    /// Token lifetime in minutes
    #[serde(default = "default_token_expiry")]
    pub token_expiry_minutes: i64,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// In production, requires a signing key of at least 32 bytes.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let secret = self.jwt_secret.expose_secret();
        if secret.is_empty() {
            return Err(ValidationError::MissingRequired("JWT_SECRET"));
        }
        if *environment == Environment::Production && secret.len() < MIN_PRODUCTION_SECRET_BYTES {
            return Err(ValidationError::JwtSecretTooShort {
                min: MIN_PRODUCTION_SECRET_BYTES,
            });
        }
        if self.jwt_issuer.is_empty() {
            return Err(ValidationError::MissingRequired("JWT_ISSUER"));
        }
        if self.jwt_audience.is_empty() {
            return Err(ValidationError::MissingRequired("JWT_AUDIENCE"));
        }
        if !(1..=MAX_TOKEN_EXPIRY_MINUTES).contains(&self.token_expiry_minutes) {
            return Err(ValidationError::InvalidTokenExpiry);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: SecretString::new(String::new()),
            jwt_issuer: default_issuer(),
            jwt_audience: default_audience(),
            token_expiry_minutes: default_token_expiry(),
        }
    }
}

fn default_issuer() -> String {
    "supper-club".to_string()
}

fn default_audience() -> String {
    "supper-club".to_string()
}

fn default_token_expiry() -> i64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_secret(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: SecretString::new(secret.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_auth_config_defaults() {
        let config = AuthConfig::default();
        assert_eq!(config.jwt_issuer, "supper-club");
        assert_eq!(config.jwt_audience, "supper-club");
        assert_eq!(config.token_expiry_minutes, 60);
    }

    #[test]
    fn test_validation_missing_secret() {
        let config = AuthConfig::default();
        assert!(matches!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("JWT_SECRET"))
        ));
    }

    #[test]
    fn test_validation_production_requires_long_secret() {
        let config = with_secret("short-dev-secret");
        // Allowed in development
        assert!(config.validate(&Environment::Development).is_ok());
        // Rejected in production
        assert!(config.validate(&Environment::Production).is_err());

        let config = with_secret(&"k".repeat(MIN_PRODUCTION_SECRET_BYTES));
        assert!(config.validate(&Environment::Production).is_ok());
    }

    #[test]
    fn test_validation_token_expiry_bounds() {
        let mut config = with_secret("dev-secret");

        config.token_expiry_minutes = 0;
        assert!(config.validate(&Environment::Development).is_err());

        config.token_expiry_minutes = MAX_TOKEN_EXPIRY_MINUTES + 1;
        assert!(config.validate(&Environment::Development).is_err());

        config.token_expiry_minutes = MAX_TOKEN_EXPIRY_MINUTES;
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let config = with_secret("super-secret-value");
        assert!(!format!("{:?}", config).contains("super-secret-value"));
    }
}
