// User configuration loaded from config.json next to the executable.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{GhbarError, Result};

/// Endpoint listing the authenticated user's unread notifications.
pub const DEFAULT_API_URL: &str = "https://api.github.com/notifications";

/// Program used to show the desktop popup.
pub const DEFAULT_NOTIFIER: &str = "/usr/bin/notify-send";

/// Shortest polling window regardless of the configured interval: 5 minutes.
pub const MIN_POLL_WINDOW: Duration = Duration::from_secs(5 * 60);

/// Settings read once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Personal access token sent as a bearer token.
    pub token: String,
    /// Polling interval in minutes.
    #[serde(default = "default_interval")]
    pub interval: u64,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_notifier")]
    pub notifier: String,
    /// Title of the desktop popup.
    #[serde(default = "default_title")]
    pub title: String,
    /// Glyph printed before the count on the bar.
    #[serde(default = "default_icon")]
    pub icon: String,
}

fn default_interval() -> u64 {
    15
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_notifier() -> String {
    DEFAULT_NOTIFIER.to_string()
}

fn default_title() -> String {
    "GitHub Notifications".to_string()
}

fn default_icon() -> String {
    "\u{f09b}".to_string()
}

impl Config {
    /// Load and parse the config file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(GhbarError::ConfigMissing);
            }
            Err(e) => return Err(GhbarError::Io(e)),
        };

        Self::parse(&contents)
    }

    /// Parse config from a JSON string.
    pub fn parse(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).map_err(GhbarError::ConfigInvalid)
    }

    /// How long a cached response stays fresh.
    pub fn poll_window(&self) -> Duration {
        Duration::from_secs(self.interval.saturating_mul(60)).max(MIN_POLL_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::parse(r#"{"token": "abc"}"#).unwrap();
        assert_eq!(config.token, "abc");
        assert_eq!(config.interval, 15);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.notifier, DEFAULT_NOTIFIER);
        assert_eq!(config.title, "GitHub Notifications");
        assert_eq!(config.icon, "\u{f09b}");
        assert_eq!(config.poll_window(), Duration::from_secs(900));
    }

    #[test]
    fn test_poll_window_has_five_minute_floor() {
        let config = Config::parse(r#"{"token": "abc", "interval": 1}"#).unwrap();
        assert_eq!(config.poll_window(), Duration::from_secs(300));

        let config = Config::parse(r#"{"token": "abc", "interval": 0}"#).unwrap();
        assert_eq!(config.poll_window(), Duration::from_secs(300));

        let config = Config::parse(r#"{"token": "abc", "interval": 6}"#).unwrap();
        assert_eq!(config.poll_window(), Duration::from_secs(360));
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load(&temp_dir.path().join("config.json")).unwrap_err();
        assert!(matches!(err, GhbarError::ConfigMissing));
        assert!(err.bar_message().contains("Config missing"));
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, GhbarError::ConfigInvalid(_)));
        assert!(err.bar_message().contains("Config invalid"));
    }

    #[test]
    fn test_missing_token_is_invalid() {
        let err = Config::parse(r#"{"interval": 10}"#).unwrap_err();
        assert!(matches!(err, GhbarError::ConfigInvalid(_)));
    }
}
