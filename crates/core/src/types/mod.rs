//! Core types for Folio.
//!
//! This module provides type-safe wrappers for the portfolio's domain concepts.

pub mod email;
pub mod id;
pub mod window;

pub use email::{Email, EmailError};
pub use id::*;
pub use window::{WindowDays, WindowDaysError};
