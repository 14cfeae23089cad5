//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ServerConfig;
use crate::services::{ResumeClient, ResumeError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like database connections and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    pool: PgPool,
    resume: ResumeClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Server configuration
    /// * `pool` - `PostgreSQL` connection pool
    ///
    /// # Errors
    ///
    /// Returns an error if the resume HTTP client cannot be built.
    pub fn new(config: ServerConfig, pool: PgPool) -> Result<Self, ResumeError> {
        let resume = ResumeClient::new(&config.resume)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                resume,
            }),
        })
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the resume download client.
    #[must_use]
    pub fn resume(&self) -> &ResumeClient {
        &self.inner.resume
    }
}
