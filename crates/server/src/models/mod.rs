//! Domain models for the portfolio API.
//!
//! Each resource has a stored record type (serialized as the API response)
//! and a validated input type. Request payloads deserialize into loosely
//! typed `*Payload` structs whose `validate()` produces the input type or a
//! [`ValidationError`] carrying the message returned to the client.

pub mod analytics;
pub mod contact;
pub mod project;
pub mod tech_stack;

pub use analytics::{AnalyticsStats, AnalyticsSummary, DailyVisits, NewVisit, VisitPayload};
pub use contact::{ContactMessage, ContactPayload, NewContactMessage};
pub use project::{Project, ProjectInput, ProjectPayload};
pub use tech_stack::{DEFAULT_LEVEL, TechStackInput, TechStackItem, TechStackPayload};

/// A request payload failed validation.
///
/// The message is safe to show to the client verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub &'static str);

/// Trim a submitted string, treating blank input as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == v.len() {
            Some(v)
        } else {
            Some(trimmed.to_owned())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(Some("  \t".to_string())), None);
        assert_eq!(non_blank(Some(" Rust ".to_string())), Some("Rust".to_string()));
        assert_eq!(non_blank(Some("Rust".to_string())), Some("Rust".to_string()));
    }
}
