//! Portfolio projects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use folio_core::ProjectId;

use super::{ValidationError, non_blank};

/// A stored portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Technology names in display order.
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update.
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/projects` and `PUT /api/projects/{id}`.
///
/// Also the shape of a project entry in a seed file.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ProjectPayload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
}

/// Every mutable project field, validated.
///
/// Used for both create and update: an update overwrites all of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
}

impl ProjectPayload {
    /// Validate into a full set of project fields.
    ///
    /// Blank technology entries are dropped; blank URLs become `None`;
    /// an omitted `featured` flag is `false`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the title or description is missing, or
    /// if no non-blank technology is listed.
    pub fn validate(self) -> Result<ProjectInput, ValidationError> {
        let technologies: Vec<String> = self
            .technologies
            .unwrap_or_default()
            .into_iter()
            .filter_map(|t| non_blank(Some(t)))
            .collect();

        let (Some(title), Some(description)) = (non_blank(self.title), non_blank(self.description))
        else {
            return Err(ValidationError(
                "Title, description, and technologies are required",
            ));
        };
        if technologies.is_empty() {
            return Err(ValidationError(
                "Title, description, and technologies are required",
            ));
        }

        Ok(ProjectInput {
            title,
            description,
            technologies,
            github_url: non_blank(self.github_url),
            live_url: non_blank(self.live_url),
            image_url: non_blank(self.image_url),
            featured: self.featured.unwrap_or(false),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn minimal() -> ProjectPayload {
        ProjectPayload {
            title: Some("X".to_string()),
            description: Some("Y".to_string()),
            technologies: Some(vec!["A".to_string(), "B".to_string()]),
            ..ProjectPayload::default()
        }
    }

    #[test]
    fn test_validate_minimal_defaults() {
        let input = minimal().validate().unwrap();
        assert_eq!(input.title, "X");
        assert_eq!(input.description, "Y");
        assert_eq!(input.technologies, vec!["A", "B"]);
        assert!(!input.featured);
        assert_eq!(input.github_url, None);
        assert_eq!(input.live_url, None);
        assert_eq!(input.image_url, None);
    }

    #[test]
    fn test_validate_keeps_technology_order() {
        let payload = ProjectPayload {
            technologies: Some(vec![
                "Rust".to_string(),
                " ".to_string(),
                "Axum".to_string(),
                "PostgreSQL".to_string(),
            ]),
            ..minimal()
        };
        let input = payload.validate().unwrap();
        assert_eq!(input.technologies, vec!["Rust", "Axum", "PostgreSQL"]);
    }

    #[test]
    fn test_validate_requires_title_description_technologies() {
        let message = ValidationError("Title, description, and technologies are required");
        assert_eq!(
            ProjectPayload { title: None, ..minimal() }.validate().unwrap_err(),
            message
        );
        assert_eq!(
            ProjectPayload { description: Some(String::new()), ..minimal() }
                .validate()
                .unwrap_err(),
            message
        );
        assert_eq!(
            ProjectPayload { technologies: None, ..minimal() }.validate().unwrap_err(),
            message
        );
        assert_eq!(
            ProjectPayload { technologies: Some(vec![]), ..minimal() }
                .validate()
                .unwrap_err(),
            message
        );
    }

    #[test]
    fn test_validate_optional_fields() {
        let payload = ProjectPayload {
            github_url: Some("https://github.com/example/folio".to_string()),
            live_url: Some("  ".to_string()),
            featured: Some(true),
            ..minimal()
        };
        let input = payload.validate().unwrap();
        assert_eq!(
            input.github_url.as_deref(),
            Some("https://github.com/example/folio")
        );
        assert_eq!(input.live_url, None);
        assert!(input.featured);
    }

    #[test]
    fn test_payload_from_json() {
        let payload: ProjectPayload =
            serde_json::from_str(r#"{"title":"X","description":"Y","technologies":["A","B"]}"#)
                .unwrap();
        assert_eq!(payload.validate().unwrap(), minimal().validate().unwrap());
    }
}
