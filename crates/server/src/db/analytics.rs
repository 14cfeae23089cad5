//! Page visit log and its aggregate queries.

use sqlx::PgPool;

use folio_core::{AnalyticsEntryId, WindowDays};

use super::RepositoryError;
use crate::models::{AnalyticsStats, AnalyticsSummary, DailyVisits, NewVisit};

/// Repository for the append-only `analytics` table.
pub struct AnalyticsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AnalyticsRepository<'a> {
    /// Create a new analytics repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Append one visit and return its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn record(&self, visit: &NewVisit) -> Result<AnalyticsEntryId, RepositoryError> {
        let (id,): (AnalyticsEntryId,) = sqlx::query_as(
            r"
            INSERT INTO analytics (page_path, user_agent, ip_address, referrer)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(&visit.page_path)
        .bind(&visit.user_agent)
        .bind(&visit.ip_address)
        .bind(&visit.referrer)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Aggregate the trailing window.
    ///
    /// Runs both queries on one pooled connection. The daily breakdown honors
    /// `page_path`; the totals always cover every page in the window.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if either query fails.
    pub async fn summary(
        &self,
        days: WindowDays,
        page_path: Option<&str>,
    ) -> Result<AnalyticsSummary, RepositoryError> {
        let mut conn = self.pool.acquire().await?;

        let analytics = sqlx::query_as::<_, DailyVisits>(
            r"
            SELECT page_path, COUNT(*) AS visits, DATE(created_at) AS date
            FROM analytics
            WHERE created_at >= NOW() - make_interval(days => $1)
              AND ($2::TEXT IS NULL OR page_path = $2)
            GROUP BY page_path, DATE(created_at)
            ORDER BY date DESC, visits DESC, page_path
            ",
        )
        .bind(days.as_i32())
        .bind(page_path)
        .fetch_all(&mut *conn)
        .await?;

        let stats = sqlx::query_as::<_, AnalyticsStats>(
            r"
            SELECT COUNT(*) AS total_visits,
                   COUNT(DISTINCT ip_address) AS unique_visitors,
                   COUNT(DISTINCT page_path) AS pages_visited
            FROM analytics
            WHERE created_at >= NOW() - make_interval(days => $1)
            ",
        )
        .bind(days.as_i32())
        .fetch_one(&mut *conn)
        .await?;

        Ok(AnalyticsSummary { analytics, stats })
    }
}
