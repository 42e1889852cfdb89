//! Database operations for the Flacon `PostgreSQL` store.
//!
//! # Tables
//!
//! - `products` - The perfume catalog
//! - `orders` - Placed orders, line items embedded as a JSONB snapshot
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p flacon-cli -- migrate
//! ```
//!
//! They are never run on server startup.

mod orders;
mod products;

pub use orders::OrderRepository;
pub use products::ProductRepository;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

/// Errors surfaced by the repository layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The underlying query failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored row no longer satisfies a domain invariant.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// The embedded migration set for the Flacon store.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
