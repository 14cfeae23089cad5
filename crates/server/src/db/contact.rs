//! Contact message repository.

use sqlx::PgPool;

use folio_core::ContactMessageId;

use super::RepositoryError;
use crate::models::{ContactMessage, NewContactMessage};

/// Repository for contact form submissions.
pub struct ContactRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ContactRepository<'a> {
    /// Create a new contact repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Store a submission and return its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        input: &NewContactMessage,
    ) -> Result<ContactMessageId, RepositoryError> {
        let (id,): (ContactMessageId,) = sqlx::query_as(
            r"
            INSERT INTO contact_messages (name, email, subject, message)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.subject)
        .bind(&input.message)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// List every message, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<ContactMessage>, RepositoryError> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            r"
            SELECT id, name, email, subject, message, created_at, read
            FROM contact_messages
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(messages)
    }
}
