//! Clients for external services.

pub mod resume;

pub use resume::{ResumeClient, ResumeError};
