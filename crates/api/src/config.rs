//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional - the defaults run a local development instance:
//! - `FLACON_HOST` - Bind address (default: 127.0.0.1)
//! - `FLACON_PORT` - Listen port (default: 5000)
//! - `FLACON_DATABASE_URL` - `PostgreSQL` connection string; falls back to
//!   the generic `DATABASE_URL`, then to the built-in local default
//! - `SENTRY_DSN` - Sentry error tracking DSN (disabled when unset)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

/// Connection string used when no database URL is supplied.
const DEFAULT_DATABASE_URL: &str = "postgres://localhost/flacon";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the host or port cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("FLACON_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("FLACON_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("FLACON_PORT", "5000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("FLACON_PORT".to_owned(), e.to_string()))?;
        let database_url = database_url_from_env();
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            database_url,
            host,
            port,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get the database URL from `FLACON_DATABASE_URL`, the generic
/// `DATABASE_URL`, or the built-in local default.
///
/// Shared with the CLI so there is exactly one fallback chain.
#[must_use]
pub fn database_url_from_env() -> SecretString {
    if let Ok(value) = std::env::var("FLACON_DATABASE_URL") {
        return SecretString::from(value);
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return SecretString::from(value);
    }
    SecretString::from(DEFAULT_DATABASE_URL)
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            database_url: SecretString::from("postgres://localhost/flacon_test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 5000,
            sentry_dsn: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 5000);
    }
}
