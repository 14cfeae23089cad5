//! Seed projects and tech stack entries from YAML.
//!
//! Entries go through the same validation as the API, and the whole file is
//! validated before the database is touched.
//!
//! ```yaml
//! projects:
//!   - title: Portfolio
//!     description: This site
//!     technologies: [Rust, Axum, PostgreSQL]
//!     featured: true
//! stack:
//!   - name: Rust
//!     category: Programming
//!     level: advanced
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};

use folio_server::db::{ProjectRepository, TechStackRepository};
use folio_server::models::{ProjectInput, ProjectPayload, TechStackInput, TechStackPayload};

/// Raw seed file contents.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedFile {
    #[serde(default)]
    projects: Vec<ProjectPayload>,
    #[serde(default)]
    stack: Vec<TechStackPayload>,
}

/// Validated seed data.
#[derive(Debug, Default)]
pub struct SeedData {
    pub projects: Vec<ProjectInput>,
    pub stack: Vec<TechStackInput>,
}

/// One invalid entry in a seed file.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{section}[{index}]: {message}")]
pub struct InvalidEntry {
    pub section: &'static str,
    pub index: usize,
    pub message: &'static str,
}

/// Errors that can occur while loading a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{} invalid entries found", .0.len())]
    Invalid(Vec<InvalidEntry>),
}

/// Parse and validate seed YAML.
///
/// # Errors
///
/// Returns `SeedError::Yaml` for malformed YAML and `SeedError::Invalid`
/// listing every entry that fails validation.
pub fn parse(content: &str) -> Result<SeedData, SeedError> {
    let file: SeedFile = serde_yaml::from_str(content)?;

    let mut data = SeedData::default();
    let mut invalid = Vec::new();

    for (index, payload) in file.projects.into_iter().enumerate() {
        match payload.validate() {
            Ok(input) => data.projects.push(input),
            Err(err) => invalid.push(InvalidEntry {
                section: "projects",
                index,
                message: err.0,
            }),
        }
    }

    for (index, payload) in file.stack.into_iter().enumerate() {
        match payload.validate() {
            Ok(input) => data.stack.push(input),
            Err(err) => invalid.push(InvalidEntry {
                section: "stack",
                index,
                message: err.0,
            }),
        }
    }

    if invalid.is_empty() {
        Ok(data)
    } else {
        Err(SeedError::Invalid(invalid))
    }
}

/// Seed the database from a YAML file.
///
/// # Arguments
///
/// * `path` - Path to the YAML file
/// * `clear_existing` - If true, delete existing projects and tech stack entries first
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails validation, or if a
/// database operation fails.
pub async fn from_file(path: &Path, clear_existing: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("File not found: {}", path.display()).into());
    }

    info!(path = %path.display(), "Loading seed data from file");

    // Validate before connecting to database
    let content = tokio::fs::read_to_string(path).await?;
    let data = match parse(&content) {
        Ok(data) => data,
        Err(SeedError::Invalid(entries)) => {
            error!("Seed validation failed:");
            for entry in &entries {
                error!("  - {entry}");
            }
            return Err(SeedError::Invalid(entries).into());
        }
        Err(err) => return Err(err.into()),
    };

    info!(
        projects = data.projects.len(),
        stack = data.stack.len(),
        "Seed data validated"
    );

    let pool = super::connect().await?;
    let projects = ProjectRepository::new(&pool);
    let stack = TechStackRepository::new(&pool);

    if clear_existing {
        let removed_projects = projects.delete_all().await?;
        let removed_stack = stack.delete_all().await?;
        info!(removed_projects, removed_stack, "Cleared existing entries");
    }

    for input in &data.projects {
        let project = projects.create(input).await?;
        info!(id = %project.id, title = %project.title, "Inserted project");
    }

    for input in &data.stack {
        let item = stack.create(input).await?;
        info!(id = %item.id, name = %item.name, "Inserted tech stack entry");
    }

    info!("Seeding complete");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_file() {
        let data = parse(
            r"
projects:
  - title: Portfolio
    description: This site
    technologies: [Rust, Axum]
    github_url: https://github.com/folio-site/folio
stack:
  - name: Rust
    category: Programming
  - name: Figma
    category: Design
    description: UI/UX Design tool
    level: intermediate
",
        )
        .unwrap();

        assert_eq!(data.projects.len(), 1);
        assert_eq!(data.projects[0].technologies, vec!["Rust", "Axum"]);
        assert!(!data.projects[0].featured);
        assert_eq!(data.stack.len(), 2);
        assert_eq!(data.stack[0].level, "beginner");
        assert_eq!(data.stack[1].level, "intermediate");
    }

    #[test]
    fn test_sections_are_optional() {
        let data = parse("stack: []\n").unwrap();
        assert!(data.projects.is_empty());
        assert!(data.stack.is_empty());
    }

    #[test]
    fn test_reports_every_invalid_entry() {
        let err = parse(
            r"
projects:
  - title: No description
    technologies: [Rust]
stack:
  - name: Rust
    category: Programming
  - name: Missing category
",
        )
        .unwrap_err();

        let SeedError::Invalid(entries) = err else {
            panic!("expected validation errors");
        };
        assert_eq!(
            entries,
            vec![
                InvalidEntry {
                    section: "projects",
                    index: 0,
                    message: "Title, description, and technologies are required",
                },
                InvalidEntry {
                    section: "stack",
                    index: 1,
                    message: "Name and category are required",
                },
            ]
        );
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        assert!(matches!(parse("posts: []\n"), Err(SeedError::Yaml(_))));
    }
}
