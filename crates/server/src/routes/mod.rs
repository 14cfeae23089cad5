//! HTTP route handlers for the portfolio API.
//!
//! # Route Structure
//!
//! Everything below is mounted under `/api`.
//!
//! ```text
//! # Contact
//! POST   /contact          - Submit a contact message
//! GET    /contact          - List contact messages
//!
//! # Projects
//! GET    /projects         - List projects (?featured=true)
//! POST   /projects         - Create a project
//! GET    /projects/{id}    - Project detail
//! PUT    /projects/{id}    - Replace a project
//! DELETE /projects/{id}    - Delete a project
//!
//! # Tech stack
//! GET    /stack            - List entries
//! POST   /stack            - Create an entry
//! PUT    /stack/{id}       - Replace an entry
//! DELETE /stack/{id}       - Delete an entry
//!
//! # Analytics
//! POST   /analytics        - Record a page visit
//! GET    /analytics        - Visit summary (?page_path, ?days)
//!
//! # Resume
//! GET    /resume           - Download the resume PDF
//! ```

pub mod analytics;
pub mod contact;
pub mod projects;
pub mod resume;
pub mod tech_stack;

use axum::{
    Router,
    extract::{FromRequest, FromRequestParts},
    routing::get,
};

use crate::error::AppError;
use crate::state::AppState;

/// JSON body extractor whose rejection is an [`AppError`].
///
/// Malformed or mistyped bodies become `400 {"error": "Invalid request body"}`
/// instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor whose rejection is an [`AppError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);

/// Create the contact routes router.
pub fn contact_routes() -> Router<AppState> {
    Router::new().route("/", get(contact::list).post(contact::submit))
}

/// Create the project routes router.
pub fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list).post(projects::create))
        .route(
            "/{id}",
            get(projects::show)
                .put(projects::update)
                .delete(projects::delete),
        )
}

/// Create the tech stack routes router.
pub fn tech_stack_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(tech_stack::list).post(tech_stack::create))
        .route(
            "/{id}",
            axum::routing::put(tech_stack::update).delete(tech_stack::delete),
        )
}

/// Create the analytics routes router.
pub fn analytics_routes() -> Router<AppState> {
    Router::new().route("/", get(analytics::summary).post(analytics::track))
}

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/contact", contact_routes())
        .nest("/projects", project_routes())
        .nest("/stack", tech_stack_routes())
        .nest("/analytics", analytics_routes())
        .route("/resume", get(resume::download))
}
