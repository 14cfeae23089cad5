//! Contact form messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use folio_core::{ContactMessageId, Email};

use super::{ValidationError, non_blank};

/// A stored contact form submission.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: String,
    pub email: Email,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    /// Never set by the API; reserved for reading messages out of band.
    pub read: bool,
}

/// Body of `POST /api/contact`.
#[derive(Debug, Default, Deserialize)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

/// A validated contact submission, ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContactMessage {
    pub name: String,
    pub email: Email,
    pub subject: String,
    pub message: String,
}

impl ContactPayload {
    /// Check that every field is present and the email is well formed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any field is missing or blank, or if the
    /// email does not look like `local@domain`.
    pub fn validate(self) -> Result<NewContactMessage, ValidationError> {
        let (Some(name), Some(email), Some(subject), Some(message)) = (
            non_blank(self.name),
            non_blank(self.email),
            non_blank(self.subject),
            non_blank(self.message),
        ) else {
            return Err(ValidationError("All fields are required"));
        };

        let email =
            Email::parse(&email).map_err(|_| ValidationError("Please enter a valid email address"))?;

        Ok(NewContactMessage {
            name,
            email,
            subject,
            message,
        })
    }
}
