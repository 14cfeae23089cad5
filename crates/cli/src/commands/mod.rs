//! Subcommand implementations.

pub mod db;
pub mod seed;
pub mod stats;

use folio_server::config::ServerConfig;
use folio_server::db::create_pool;
use sqlx::PgPool;

/// Load server configuration and open a pool.
async fn connect() -> Result<PgPool, Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;

    tracing::info!("Connecting to database...");
    let pool = create_pool(&config).await?;
    Ok(pool)
}
