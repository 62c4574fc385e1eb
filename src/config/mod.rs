//! Runtime settings for the supper-club server.
//!
//! Every setting comes from a `SUPPER_CLUB__`-prefixed environment variable,
//! optionally seeded from a `.env` file; `__` separates nesting levels, so
//! `SUPPER_CLUB__AUTH__TOKEN_EXPIRY_MINUTES=15` sets `auth.token_expiry_minutes`.
//! Only `auth.jwt_secret` is required; everything else has a default.
//!
//! ```no_run
//! use supper_club::config::AppConfig;
//!
//! let config = AppConfig::load().expect("settings missing");
//! config.validate().expect("settings rejected");
//! ```

mod auth;
mod error;
mod server;

pub use auth::AuthConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, LogFormat, ServerConfig};

use serde::Deserialize;

/// Server and token settings, read once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    pub auth: AuthConfig,
}

impl AppConfig {
    /// Reads `.env` (when present) and the process environment.
    ///
    /// # Errors
    ///
    /// - `LoadError` when `auth.jwt_secret` is unset or a value has the wrong type
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SUPPER_CLUB")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks cross-field rules that serde cannot express, such as the
    /// minimum signing key length in production.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.auth.validate(&self.server.environment)?;
        Ok(())
    }

    /// True when `server.environment` is `production`.
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
