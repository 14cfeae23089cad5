//! Database operations for the portfolio `PostgreSQL` database.
//!
//! ## Tables
//!
//! - `contact_messages` - Contact form submissions
//! - `projects` - Portfolio projects
//! - `tech_stack` - Technologies shown in the tech showcase
//! - `analytics` - Append-only page visit log
//!
//! The tables are independent (no foreign keys). The schema lives in
//! `crates/server/schema.sql` and is applied via:
//! ```bash
//! cargo run -p folio-cli -- db init
//! ```
//!
//! # Connection handling
//!
//! One pool per process. Repositories borrow it and each operation holds a
//! pooled connection for exactly one statement (two for the analytics
//! summary); the connection returns to the pool when dropped, on success and
//! error alike.

pub mod analytics;
pub mod contact;
pub mod projects;
pub mod tech_stack;

use std::str::FromStr;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use thiserror::Error;

use crate::config::ServerConfig;

pub use analytics::AnalyticsRepository;
pub use contact::ContactRepository;
pub use projects::ProjectRepository;
pub use tech_stack::TechStackRepository;

/// Idempotent DDL for every table the server touches.
pub const SCHEMA: &str = include_str!("../../schema.sql");

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,
}

/// Build connect options from the configured URL and TLS mode.
///
/// The configured mode overrides any `sslmode` in the URL.
///
/// # Errors
///
/// Returns `sqlx::Error::Configuration` if the URL cannot be parsed.
pub fn connect_options(config: &ServerConfig) -> Result<PgConnectOptions, sqlx::Error> {
    Ok(PgConnectOptions::from_str(config.database_url.expose_secret())?
        .ssl_mode(config.database_ssl_mode))
}

fn pool_options(config: &ServerConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.database_max_connections.max(1))
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(10))
}

/// Create a `PostgreSQL` connection pool and open the first connection.
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot be established.
pub async fn create_pool(config: &ServerConfig) -> Result<PgPool, sqlx::Error> {
    pool_options(config)
        .connect_with(connect_options(config)?)
        .await
}

/// Create a pool that connects on first use.
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL cannot be parsed.
pub fn create_lazy_pool(config: &ServerConfig) -> Result<PgPool, sqlx::Error> {
    Ok(pool_options(config)
        .min_connections(0)
        .connect_lazy_with(connect_options(config)?))
}

/// Apply [`SCHEMA`] to the database.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if any statement fails.
pub async fn apply_schema(pool: &PgPool) -> Result<(), RepositoryError> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}
