//! Database migration command.
//!
//! Migrations are never run by the server on startup; this command is
//! the one place they execute.
//!
//! # Environment Variables
//!
//! - `SHOPFRONT_DATABASE_URL` - `PostgreSQL` connection string
//!   (falls back to `DATABASE_URL`)

use shopfront_server::config::ServerConfig;
use shopfront_server::db;

use super::CommandError;

/// Run all pending migrations against the configured database.
pub async fn run() -> Result<(), CommandError> {
    let config = ServerConfig::from_env()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url).await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../server/migrations").run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
