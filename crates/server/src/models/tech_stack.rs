//! Tech stack entries shown in the showcase section.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use folio_core::TechStackItemId;

use super::{ValidationError, non_blank};

/// Proficiency level stored when none is given.
pub const DEFAULT_LEVEL: &str = "beginner";

/// A stored tech stack entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct TechStackItem {
    pub id: TechStackItemId,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    /// Free-form proficiency label, e.g. `beginner` or `advanced`.
    pub level: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/stack` and `PUT /api/stack/{id}`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct TechStackPayload {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub level: Option<String>,
}

/// Every mutable tech stack field, validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TechStackInput {
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub level: String,
}

impl TechStackPayload {
    /// Validate into a full set of fields.
    ///
    /// A missing description is `None` and a missing level is
    /// [`DEFAULT_LEVEL`], so an update that omits them clears them.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the name or category is missing.
    pub fn validate(self) -> Result<TechStackInput, ValidationError> {
        let (Some(name), Some(category)) = (non_blank(self.name), non_blank(self.category)) else {
            return Err(ValidationError("Name and category are required"));
        };

        Ok(TechStackInput {
            name,
            category,
            description: non_blank(self.description),
            level: non_blank(self.level).unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
        })
    }
}
