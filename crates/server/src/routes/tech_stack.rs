//! Tech stack route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;
use tracing::instrument;

use folio_core::{TechStackItemId, parse_id};

use super::ApiJson;
use crate::db::TechStackRepository;
use crate::error::{AppError, Result};
use crate::models::{TechStackItem, TechStackPayload};
use crate::state::AppState;

const NOT_FOUND: &str = "Not found";

/// Response for a deleted entry.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub success: bool,
}

fn item_id(raw: &str) -> Result<TechStackItemId> {
    parse_id(raw).map_err(|_| AppError::NotFound(NOT_FOUND))
}

/// GET /api/stack
#[instrument(skip_all)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TechStackItem>>> {
    let items = TechStackRepository::new(state.pool())
        .list()
        .await
        .map_err(AppError::database("Failed to fetch tech stack"))?;

    Ok(Json(items))
}

/// POST /api/stack
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<TechStackPayload>,
) -> Result<(StatusCode, Json<TechStackItem>)> {
    let input = payload.validate()?;

    let item = TechStackRepository::new(state.pool())
        .create(&input)
        .await
        .map_err(AppError::database("Failed to create item"))?;

    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /api/stack/{id}
#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<TechStackPayload>,
) -> Result<Json<TechStackItem>> {
    let id = item_id(&id)?;
    let input = payload.validate()?;

    let item = TechStackRepository::new(state.pool())
        .update(id, &input)
        .await
        .map_err(AppError::database_or_not_found(
            NOT_FOUND,
            "Failed to update item",
        ))?;

    Ok(Json(item))
}

/// DELETE /api/stack/{id}
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Deleted>> {
    let id = item_id(&id)?;

    let deleted = TechStackRepository::new(state.pool())
        .delete(id)
        .await
        .map_err(AppError::database("Failed to delete item"))?;

    if !deleted {
        return Err(AppError::NotFound(NOT_FOUND));
    }

    Ok(Json(Deleted { success: true }))
}
