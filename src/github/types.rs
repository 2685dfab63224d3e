// GitHub API response types.
// Only the fields the popup shows are required; the rest are tolerated if missing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the `/notifications` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub unread: Option<bool>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    pub repository: NotificationRepository,
    pub subject: Subject,
}

/// Repository a notification belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRepository {
    pub full_name: String,
}

/// The thing (issue, PR, release...) a notification is about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub title: String,
    #[serde(rename = "type", default)]
    pub subject_type: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Rate limit information from response headers.
#[derive(Debug, Clone, Default)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    pub reset: u64,
}

impl RateLimit {
    /// Reset time formatted for display, if known.
    pub fn reset_at(&self) -> String {
        DateTime::from_timestamp(self.reset as i64, 0)
            .map(|dt| dt.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}
