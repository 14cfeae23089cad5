//! Contact form route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::instrument;

use folio_core::ContactMessageId;

use super::ApiJson;
use crate::db::ContactRepository;
use crate::error::{AppError, Result};
use crate::models::{ContactMessage, ContactPayload};
use crate::state::AppState;

/// Acknowledgement shown to the visitor after a successful submission.
pub const THANK_YOU: &str = "Thank you for your message! I'll get back to you soon.";

/// Response for a stored submission.
#[derive(Debug, Serialize)]
pub struct ContactCreated {
    pub success: bool,
    #[serde(rename = "messageId")]
    pub message_id: ContactMessageId,
    pub message: &'static str,
}

/// Submit a contact message.
///
/// POST /api/contact
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ContactPayload>,
) -> Result<(StatusCode, Json<ContactCreated>)> {
    let message = payload.validate()?;

    let id = ContactRepository::new(state.pool())
        .create(&message)
        .await
        .map_err(AppError::database(
            "Failed to send message. Please try again.",
        ))?;

    tracing::info!(message_id = %id, email_domain = message.email.domain(), "Contact message stored");

    Ok((
        StatusCode::CREATED,
        Json(ContactCreated {
            success: true,
            message_id: id,
            message: THANK_YOU,
        }),
    ))
}

/// List contact messages, newest first.
///
/// GET /api/contact
#[instrument(skip_all)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ContactMessage>>> {
    let messages = ContactRepository::new(state.pool())
        .list()
        .await
        .map_err(AppError::database("Failed to fetch messages"))?;

    Ok(Json(messages))
}
