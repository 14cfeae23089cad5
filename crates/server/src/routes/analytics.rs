//! Page visit tracking and reporting.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use folio_core::{AnalyticsEntryId, WindowDays};

use super::{ApiJson, ApiQuery};
use crate::db::AnalyticsRepository;
use crate::error::{AppError, Result};
use crate::middleware::ClientInfo;
use crate::models::{AnalyticsSummary, VisitPayload};
use crate::state::AppState;

/// Query parameters for the summary.
#[derive(Debug, Default, Deserialize)]
pub struct SummaryQuery {
    pub page_path: Option<String>,
    /// Kept as text so a bad value gets our own 400 message.
    pub days: Option<String>,
}

/// Response for a recorded visit.
#[derive(Debug, Serialize)]
pub struct Tracked {
    pub success: bool,
    pub id: AnalyticsEntryId,
}

/// Record a page visit.
///
/// POST /api/analytics
#[instrument(skip_all)]
pub async fn track(
    State(state): State<AppState>,
    client: ClientInfo,
    ApiJson(payload): ApiJson<VisitPayload>,
) -> Result<(StatusCode, Json<Tracked>)> {
    let visit = payload.validate(client.user_agent, client.ip_address)?;

    let id = AnalyticsRepository::new(state.pool())
        .record(&visit)
        .await
        .map_err(AppError::database("Failed to track visit"))?;

    tracing::debug!(visit_id = %id, page_path = %visit.page_path, "Visit recorded");
    Ok((StatusCode::CREATED, Json(Tracked { success: true, id })))
}

/// Visit counts per page and day plus window totals.
///
/// GET /api/analytics
#[instrument(skip(state))]
pub async fn summary(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SummaryQuery>,
) -> Result<Json<AnalyticsSummary>> {
    let days = WindowDays::parse_or_default(query.days.as_deref()).map_err(|_| {
        AppError::BadRequest(format!(
            "days must be a whole number between {} and {}",
            WindowDays::MIN,
            WindowDays::MAX
        ))
    })?;
    let page_path = query.page_path.as_deref().map(str::trim).filter(|p| !p.is_empty());

    let summary = AnalyticsRepository::new(state.pool())
        .summary(days, page_path)
        .await
        .map_err(AppError::database("Failed to fetch analytics"))?;

    Ok(Json(summary))
}
