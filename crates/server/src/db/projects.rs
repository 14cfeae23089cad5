//! Project repository.

use sqlx::PgPool;

use folio_core::ProjectId;

use super::RepositoryError;
use crate::models::{Project, ProjectInput};

const PROJECT_COLUMNS: &str = "id, title, description, technologies, github_url, live_url, \
                               image_url, featured, created_at, updated_at";

/// Repository for portfolio projects.
pub struct ProjectRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProjectRepository<'a> {
    /// Create a new project repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List projects newest first, optionally only the featured ones.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, featured_only: bool) -> Result<Vec<Project>, RepositoryError> {
        let sql = format!(
            "SELECT {PROJECT_COLUMNS} FROM projects \
             WHERE ($1 = FALSE OR featured = TRUE) \
             ORDER BY created_at DESC, id DESC"
        );

        let projects = sqlx::query_as::<_, Project>(&sql)
            .bind(featured_only)
            .fetch_all(self.pool)
            .await?;

        Ok(projects)
    }

    /// Get a project by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProjectId) -> Result<Option<Project>, RepositoryError> {
        let sql = format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1");

        let project = sqlx::query_as::<_, Project>(&sql)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(project)
    }

    /// Insert a project and return the stored row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, input: &ProjectInput) -> Result<Project, RepositoryError> {
        let sql = format!(
            "INSERT INTO projects \
             (title, description, technologies, github_url, live_url, image_url, featured, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, CURRENT_TIMESTAMP) \
             RETURNING {PROJECT_COLUMNS}"
        );

        let project = sqlx::query_as::<_, Project>(&sql)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.technologies)
            .bind(&input.github_url)
            .bind(&input.live_url)
            .bind(&input.image_url)
            .bind(input.featured)
            .fetch_one(self.pool)
            .await?;

        Ok(project)
    }

    /// Overwrite every mutable field of a project and bump `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no project has this ID.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: ProjectId,
        input: &ProjectInput,
    ) -> Result<Project, RepositoryError> {
        let sql = format!(
            "UPDATE projects \
             SET title = $1, description = $2, technologies = $3, \
                 github_url = $4, live_url = $5, image_url = $6, \
                 featured = $7, updated_at = CURRENT_TIMESTAMP \
             WHERE id = $8 \
             RETURNING {PROJECT_COLUMNS}"
        );

        sqlx::query_as::<_, Project>(&sql)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.technologies)
            .bind(&input.github_url)
            .bind(&input.live_url)
            .bind(&input.image_url)
            .bind(input.featured)
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(RepositoryError::NotFound)
    }

    /// Delete a project.
    ///
    /// # Returns
    ///
    /// Returns `true` if the project was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ProjectId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every project. Used by `folio-cli seed --clear`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM projects")
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
