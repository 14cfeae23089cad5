//! Page visit analytics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ValidationError, non_blank};

/// Visit count for one page on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct DailyVisits {
    pub page_path: String,
    pub visits: i64,
    pub date: NaiveDate,
}

/// Totals over the whole window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct AnalyticsStats {
    pub total_visits: i64,
    /// Distinct client IP values.
    pub unique_visitors: i64,
    /// Distinct page paths.
    pub pages_visited: i64,
}

/// Response body of `GET /api/analytics`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsSummary {
    /// Per-day, per-page counts, most recent day first.
    pub analytics: Vec<DailyVisits>,
    pub stats: AnalyticsStats,
}

/// Body of `POST /api/analytics`, sent by the frontend on every navigation.
#[derive(Debug, Default, Deserialize)]
pub struct VisitPayload {
    pub page_path: Option<String>,
    pub referrer: Option<String>,
}

/// A visit ready to append to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVisit {
    pub page_path: String,
    pub referrer: Option<String>,
    pub user_agent: String,
    pub ip_address: String,
}

impl VisitPayload {
    /// Combine the payload with request metadata.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `page_path` is missing or blank.
    pub fn validate(
        self,
        user_agent: String,
        ip_address: String,
    ) -> Result<NewVisit, ValidationError> {
        let page_path = non_blank(self.page_path).ok_or(ValidationError("page_path is required"))?;

        Ok(NewVisit {
            page_path,
            referrer: non_blank(self.referrer),
            user_agent,
            ip_address,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_visit() {
        let visit = VisitPayload {
            page_path: Some("/".to_string()),
            referrer: Some("https://news.ycombinator.com/".to_string()),
        }
        .validate("curl/8.0".to_string(), "203.0.113.9".to_string())
        .unwrap();

        assert_eq!(visit.page_path, "/");
        assert_eq!(visit.referrer.as_deref(), Some("https://news.ycombinator.com/"));
        assert_eq!(visit.user_agent, "curl/8.0");
        assert_eq!(visit.ip_address, "203.0.113.9");
    }

    #[test]
    fn test_empty_referrer_is_absent() {
        let visit = VisitPayload {
            page_path: Some("/projects".to_string()),
            referrer: Some(String::new()),
        }
        .validate("ua".to_string(), "unknown".to_string())
        .unwrap();
        assert_eq!(visit.referrer, None);
    }

    #[test]
    fn test_page_path_required() {
        let err = VisitPayload::default()
            .validate("ua".to_string(), "unknown".to_string())
            .unwrap_err();
        assert_eq!(err, ValidationError("page_path is required"));
    }

    #[test]
    fn test_summary_json_shape() {
        let summary = AnalyticsSummary {
            analytics: vec![DailyVisits {
                page_path: "/".to_string(),
                visits: 3,
                date: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            }],
            stats: AnalyticsStats {
                total_visits: 3,
                unique_visitors: 2,
                pages_visited: 1,
            },
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["analytics"][0]["date"], "2026-10-17");
        assert_eq!(json["analytics"][0]["visits"], 3);
        assert_eq!(json["stats"]["unique_visitors"], 2);
        assert_eq!(json["stats"]["pages_visited"], 1);
    }
}
