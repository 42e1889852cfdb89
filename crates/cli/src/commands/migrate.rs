//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! flacon migrate
//! ```
//!
//! # Environment Variables
//!
//! - `FLACON_DATABASE_URL` / `DATABASE_URL` - `PostgreSQL` connection string
//!   (the built-in local default applies when neither is set)

use flacon_api::config::database_url_from_env;
use flacon_api::db;

/// Run the embedded migrations against the configured database.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = database_url_from_env();

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;

    tracing::info!("Running migrations...");
    db::MIGRATOR.run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
