//! Scheduling fields of a GRB review.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The voting window of a review.
///
/// `manual_end_at` is only set when an administrator closed the review early.
/// When present it is authoritative, regardless of `scheduled_end_at`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewWindow {
    #[serde(default)]
    pub review_started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub scheduled_end_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub manual_end_at: Option<DateTime<Utc>>,
}

impl ReviewWindow {
    /// A window that opened at `started_at` and closes naturally at `ends_at`
    pub fn scheduled(started_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Self {
        Self {
            review_started_at: Some(started_at),
            scheduled_end_at: Some(ends_at),
            manual_end_at: None,
        }
    }

    /// Record an administrator's early close
    pub fn with_manual_end(mut self, ended_at: DateTime<Utc>) -> Self {
        self.manual_end_at = Some(ended_at);
        self
    }

    pub fn was_ended_manually(&self) -> bool {
        self.manual_end_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_window_is_empty() {
        let window = ReviewWindow::default();
        assert!(window.review_started_at.is_none());
        assert!(window.scheduled_end_at.is_none());
        assert!(!window.was_ended_manually());
    }

    #[test]
    fn test_window_deserialize_camel_case() {
        let json = r#"{
            "reviewStartedAt": "2024-10-01T09:00:00Z",
            "scheduledEndAt": "2024-10-08T09:00:00Z"
        }"#;
        let window: ReviewWindow = serde_json::from_str(json).unwrap();
        assert_eq!(
            window.review_started_at,
            Some(Utc.with_ymd_and_hms(2024, 10, 1, 9, 0, 0).unwrap())
        );
        assert!(window.manual_end_at.is_none());
    }
}
