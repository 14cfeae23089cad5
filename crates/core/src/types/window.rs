//! Trailing analytics window, measured in whole days.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`WindowDays`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowDaysError {
    /// The input is not an integer.
    #[error("window must be a whole number of days, got {0:?}")]
    NotANumber(String),
    /// The integer is outside `MIN..=MAX`.
    #[error("window must be between {min} and {max} days, got {got}")]
    OutOfRange {
        /// Smallest accepted value.
        min: i32,
        /// Largest accepted value.
        max: i32,
        /// Value that was supplied.
        got: i64,
    },
}

/// Number of days an analytics query looks back from "now".
///
/// The value is bound as a query parameter (`make_interval(days => $1)`),
/// so it only has to be a sane positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct WindowDays(i32);

impl WindowDays {
    /// Smallest accepted window.
    pub const MIN: i32 = 1;
    /// Largest accepted window (about ten years).
    pub const MAX: i32 = 3650;
    /// Window used when a query does not specify one.
    pub const DEFAULT: Self = Self(30);

    /// Build a window from an integer day count.
    ///
    /// # Errors
    ///
    /// Returns `WindowDaysError::OutOfRange` if `days` is outside `MIN..=MAX`.
    pub fn new(days: i32) -> Result<Self, WindowDaysError> {
        if (Self::MIN..=Self::MAX).contains(&days) {
            Ok(Self(days))
        } else {
            Err(WindowDaysError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                got: i64::from(days),
            })
        }
    }

    /// Parse an optional query-string value; `None` or blank yields [`Self::DEFAULT`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not an integer or is out of range.
    pub fn parse_or_default(raw: Option<&str>) -> Result<Self, WindowDaysError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::DEFAULT),
            Some(s) => s.parse(),
        }
    }

    /// Get the day count.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl Default for WindowDays {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for WindowDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for WindowDays {
    type Err = WindowDaysError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let days: i64 = s
            .trim()
            .parse()
            .map_err(|_| WindowDaysError::NotANumber(s.to_owned()))?;
        let days = i32::try_from(days).map_err(|_| WindowDaysError::OutOfRange {
            min: Self::MIN,
            max: Self::MAX,
            got: days,
        })?;
        Self::new(days)
    }
}

impl TryFrom<i32> for WindowDays {
    type Error = WindowDaysError;

    fn try_from(days: i32) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl From<WindowDays> for i32 {
    fn from(days: WindowDays) -> Self {
        days.0
    }
}
