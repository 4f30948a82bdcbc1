//! Database operations for the Shopfront `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `store` - Merchant locations, one owner identity per row
//! - `product` - Sellable items with JSONB modifier/discount arrays
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p shopfront-cli -- migrate
//! ```

pub mod products;
pub mod stores;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use products::ProductRepository;
pub use stores::StoreRepository;

use crate::models::ProductValidationError;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested entity was not found, or the caller does not own it.
    /// The two cases are deliberately indistinguishable.
    #[error("not found")]
    NotFound,

    /// Input failed a validation rule before reaching the database.
    #[error("{0}")]
    Validation(String),
}

impl From<ProductValidationError> for RepositoryError {
    fn from(err: ProductValidationError) -> Self {
        Self::Validation(err.to_string())
    }
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
