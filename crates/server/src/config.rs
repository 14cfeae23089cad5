//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `FOLIO_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! ## Optional
//! - `FOLIO_DATABASE_SSL_MODE` - `disable`, `prefer`, or `require` (default: prefer)
//! - `FOLIO_DATABASE_MAX_CONNECTIONS` - Pool size (default: 10)
//! - `FOLIO_HOST` - Bind address (default: 127.0.0.1)
//! - `FOLIO_PORT` - Listen port (default: 3000)
//! - `FOLIO_STATIC_DIR` - Prebuilt frontend served for non-API paths
//! - `FOLIO_RESUME_URL` - Upstream location of the resume PDF
//! - `FOLIO_RESUME_FILENAME` - Download filename (default: Resume.pdf)
//! - `FOLIO_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use secrecy::SecretString;
use sqlx::postgres::PgSslMode;
use thiserror::Error;

/// Resume document served when `FOLIO_RESUME_URL` is unset.
pub const DEFAULT_RESUME_URL: &str = "https://cdn.builder.io/o/assets%2Ffbed7fa7b77344d986d0d6126e7ece42%2Fa25d572a67144d628e73fae4c40675e5?alt=media&token=c02d5ada-5df2-44ed-bed1-e80f8561a52e&apiKey=fbed7fa7b77344d986d0d6126e7ece42";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// TLS mode for the database connection; never verifies certificates
    pub database_ssl_mode: PgSslMode,
    /// Maximum pooled database connections
    pub database_max_connections: u32,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Prebuilt frontend bundle, if this process also serves the site
    pub static_dir: Option<PathBuf>,
    /// Resume download proxy settings
    pub resume: ResumeConfig,
    /// Log output format
    pub log_format: LogFormat,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

/// Resume download proxy configuration.
#[derive(Debug, Clone)]
pub struct ResumeConfig {
    /// Upstream URL fetched on every download
    pub url: String,
    /// Filename offered in `Content-Disposition`
    pub filename: String,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_RESUME_URL.to_string(),
            filename: "Resume.pdf".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("FOLIO_DATABASE_URL")?;
        let database_ssl_mode =
            parse_ssl_mode(&get_env_or_default("FOLIO_DATABASE_SSL_MODE", "prefer"))?;
        let database_max_connections = get_env_or_default("FOLIO_DATABASE_MAX_CONNECTIONS", "10")
            .parse::<u32>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar(
                    "FOLIO_DATABASE_MAX_CONNECTIONS".to_string(),
                    e.to_string(),
                )
            })?;
        let host = get_env_or_default("FOLIO_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("FOLIO_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("FOLIO_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("FOLIO_PORT".to_string(), e.to_string()))?;
        let static_dir = get_optional_env("FOLIO_STATIC_DIR").map(PathBuf::from);
        let resume = ResumeConfig::from_env();
        let log_format = parse_log_format(&get_env_or_default("FOLIO_LOG_FORMAT", "pretty"))?;

        Ok(Self {
            database_url,
            database_ssl_mode,
            database_max_connections,
            host,
            port,
            static_dir,
            resume,
            log_format,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl ResumeConfig {
    fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: get_optional_env("FOLIO_RESUME_URL").unwrap_or(defaults.url),
            filename: get_optional_env("FOLIO_RESUME_FILENAME").unwrap_or(defaults.filename),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL` (set by most PaaS hosts).
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable, treating blank values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}

/// Parse a database TLS mode.
///
/// Only modes that skip certificate verification are accepted: the hosted
/// database presents a certificate the server cannot validate.
fn parse_ssl_mode(value: &str) -> Result<PgSslMode, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "disable" => Ok(PgSslMode::Disable),
        "prefer" => Ok(PgSslMode::Prefer),
        "require" => Ok(PgSslMode::Require),
        other => Err(ConfigError::InvalidEnvVar(
            "FOLIO_DATABASE_SSL_MODE".to_string(),
            format!("expected disable, prefer, or require (got '{other}')"),
        )),
    }
}

/// Parse the log output format.
fn parse_log_format(value: &str) -> Result<LogFormat, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "pretty" | "text" => Ok(LogFormat::Pretty),
        "json" => Ok(LogFormat::Json),
        other => Err(ConfigError::InvalidEnvVar(
            "FOLIO_LOG_FORMAT".to_string(),
            format!("expected pretty or json (got '{other}')"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ssl_mode_accepts_non_verifying_modes() {
        assert!(matches!(parse_ssl_mode("disable"), Ok(PgSslMode::Disable)));
        assert!(matches!(parse_ssl_mode("Prefer"), Ok(PgSslMode::Prefer)));
        assert!(matches!(parse_ssl_mode(" require "), Ok(PgSslMode::Require)));
    }

    #[test]
    fn test_parse_ssl_mode_rejects_verifying_modes() {
        let err = parse_ssl_mode("verify-full").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "FOLIO_DATABASE_SSL_MODE"));
        assert!(parse_ssl_mode("verify-ca").is_err());
    }

    #[test]
    fn test_parse_log_format() {
        assert_eq!(parse_log_format("pretty").unwrap(), LogFormat::Pretty);
        assert_eq!(parse_log_format("JSON").unwrap(), LogFormat::Json);
        assert!(parse_log_format("xml").is_err());
    }

    #[test]
    fn test_resume_defaults() {
        let resume = ResumeConfig::default();
        assert_eq!(resume.url, DEFAULT_RESUME_URL);
        assert_eq!(resume.filename, "Resume.pdf");
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            database_url: SecretString::from("postgres://localhost/folio"),
            database_ssl_mode: PgSslMode::Prefer,
            database_max_connections: 10,
            host: "0.0.0.0".parse().unwrap(),
            port: 8080,
            static_dir: None,
            resume: ResumeConfig::default(),
            log_format: LogFormat::Pretty,
            sentry_dsn: None,
            sentry_environment: None,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let config = ServerConfig {
            database_url: SecretString::from("postgres://folio:hunter2@db/folio"),
            database_ssl_mode: PgSslMode::Require,
            database_max_connections: 4,
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            static_dir: Some(PathBuf::from("dist")),
            resume: ResumeConfig::default(),
            log_format: LogFormat::Json,
            sentry_dsn: None,
            sentry_environment: None,
        };

        let debug_output = format!("{config:?}");
        assert!(!debug_output.contains("hunter2"));
        assert!(debug_output.contains("dist"));
    }
}
