//! Resume download proxy.

use axum::{
    body::Body,
    extract::State,
    http::{
        HeaderValue,
        header::{CACHE_CONTROL, CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::services::ResumeError;
use crate::state::AppState;

/// Stream the resume PDF from the file host.
///
/// GET /api/resume
#[instrument(skip_all)]
pub async fn download(State(state): State<AppState>) -> Result<Response> {
    let resume = state.resume();

    let upstream = resume.fetch().await.map_err(|err| match err {
        ResumeError::Status(status) => {
            tracing::warn!(status, url = resume.url(), "Resume host returned an error");
            AppError::Upstream("Failed to fetch resume".to_string())
        }
        ResumeError::Http(source) => {
            tracing::error!(error = %source, "Resume fetch failed");
            AppError::Internal("Resume unavailable".to_string())
        }
    })?;

    Ok((
        [
            (CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (CONTENT_DISPOSITION, resume.content_disposition().clone()),
            (CACHE_CONTROL, HeaderValue::from_static("no-store")),
        ],
        Body::from_stream(upstream.bytes_stream()),
    )
        .into_response())
}
