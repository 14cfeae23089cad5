//! Database schema command.

use folio_server::db::apply_schema;

/// Apply `schema.sql` to the configured database.
///
/// Every statement is `IF NOT EXISTS`, so re-running is harmless.
///
/// # Errors
///
/// Returns an error if configuration is missing or a statement fails.
pub async fn init() -> Result<(), Box<dyn std::error::Error>> {
    let pool = super::connect().await?;

    tracing::info!("Applying schema...");
    apply_schema(&pool).await?;

    tracing::info!("Schema is up to date");
    Ok(())
}
