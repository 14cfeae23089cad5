//! Tech stack repository.

use sqlx::PgPool;

use folio_core::TechStackItemId;

use super::RepositoryError;
use crate::models::{TechStackInput, TechStackItem};

/// Repository for tech stack entries.
pub struct TechStackRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TechStackRepository<'a> {
    /// Create a new tech stack repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<TechStackItem>, RepositoryError> {
        let items = sqlx::query_as::<_, TechStackItem>(
            r"
            SELECT id, name, category, description, level, created_at
            FROM tech_stack
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Insert an entry and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &TechStackInput) -> Result<TechStackItem, RepositoryError> {
        let item = sqlx::query_as::<_, TechStackItem>(
            r"
            INSERT INTO tech_stack (name, category, description, level)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, category, description, level, created_at
            ",
        )
        .bind(&input.name)
        .bind(&input.category)
        .bind(&input.description)
        .bind(&input.level)
        .fetch_one(self.pool)
        .await?;

        Ok(item)
    }

    /// Overwrite name, category, description, and level.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no entry has this ID.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: TechStackItemId,
        input: &TechStackInput,
    ) -> Result<TechStackItem, RepositoryError> {
        sqlx::query_as::<_, TechStackItem>(
            r"
            UPDATE tech_stack
            SET name = $1, category = $2, description = $3, level = $4
            WHERE id = $5
            RETURNING id, name, category, description, level, created_at
            ",
        )
        .bind(&input.name)
        .bind(&input.category)
        .bind(&input.description)
        .bind(&input.level)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    /// Delete an entry.
    ///
    /// # Returns
    ///
    /// Returns `true` if the entry was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: TechStackItemId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM tech_stack WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every entry. Used by `folio-cli seed --clear`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM tech_stack")
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
