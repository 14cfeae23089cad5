//! Project route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use folio_core::{ProjectId, parse_id};

use super::{ApiJson, ApiQuery};
use crate::db::ProjectRepository;
use crate::error::{AppError, Result};
use crate::models::{Project, ProjectPayload};
use crate::state::AppState;

const NOT_FOUND: &str = "Project not found";

/// Query parameters for the project listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Only the literal `true` filters; anything else lists everything.
    pub featured: Option<String>,
}

impl ListQuery {
    fn featured_only(&self) -> bool {
        self.featured.as_deref() == Some("true")
    }
}

/// Response for a deleted project.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub message: &'static str,
}

fn project_id(raw: &str) -> Result<ProjectId> {
    parse_id(raw).map_err(|_| AppError::NotFound(NOT_FOUND))
}

/// List projects, newest first.
///
/// GET /api/projects
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<Json<Vec<Project>>> {
    let projects = ProjectRepository::new(state.pool())
        .list(query.featured_only())
        .await
        .map_err(AppError::database("Failed to fetch projects"))?;

    Ok(Json(projects))
}

/// Create a project.
///
/// POST /api/projects
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ProjectPayload>,
) -> Result<(StatusCode, Json<Project>)> {
    let input = payload.validate()?;

    let project = ProjectRepository::new(state.pool())
        .create(&input)
        .await
        .map_err(AppError::database("Failed to create project"))?;

    tracing::info!(project_id = %project.id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// Project detail.
///
/// GET /api/projects/{id}
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Project>> {
    let id = project_id(&id)?;

    ProjectRepository::new(state.pool())
        .get(id)
        .await
        .map_err(AppError::database("Failed to fetch project"))?
        .map(Json)
        .ok_or(AppError::NotFound(NOT_FOUND))
}

/// Replace every mutable field of a project.
///
/// PUT /api/projects/{id}
#[instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<ProjectPayload>,
) -> Result<Json<Project>> {
    let id = project_id(&id)?;
    let input = payload.validate()?;

    let project = ProjectRepository::new(state.pool())
        .update(id, &input)
        .await
        .map_err(AppError::database_or_not_found(
            NOT_FOUND,
            "Failed to update project",
        ))?;

    tracing::info!(project_id = %project.id, "Project updated");
    Ok(Json(project))
}

/// Delete a project.
///
/// DELETE /api/projects/{id}
#[instrument(skip(state))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Deleted>> {
    let id = project_id(&id)?;

    let deleted = ProjectRepository::new(state.pool())
        .delete(id)
        .await
        .map_err(AppError::database("Failed to delete project"))?;

    if !deleted {
        return Err(AppError::NotFound(NOT_FOUND));
    }

    tracing::info!(project_id = %id, "Project deleted");
    Ok(Json(Deleted {
        message: "Project deleted successfully",
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_only_requires_literal_true() {
        let query = |v: Option<&str>| ListQuery {
            featured: v.map(String::from),
        };
        assert!(query(Some("true")).featured_only());
        assert!(!query(Some("1")).featured_only());
        assert!(!query(Some("TRUE")).featured_only());
        assert!(!query(Some("false")).featured_only());
        assert!(!query(None).featured_only());
    }

    #[test]
    fn test_non_numeric_id_is_not_found() {
        for raw in ["abc", "0", "-3", "1.5", ""] {
            let err = project_id(raw).unwrap_err();
            assert!(matches!(err, AppError::NotFound(NOT_FOUND)), "{raw}");
        }
    }
}
