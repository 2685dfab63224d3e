// Error types for ghbar.
// Every failure ends up as a single red line on the status bar.

use thiserror::Error;

/// Polybar format tag that colours the rest of the line red.
pub const ERROR_MARKER: &str = "%{F#ff0000}";

#[derive(Error, Debug)]
pub enum GhbarError {
    #[error("Config missing")]
    ConfigMissing,

    #[error("Config invalid: {0}")]
    ConfigInvalid(#[source] serde_json::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("Connection failed: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("No data")]
    NoData,

    #[error("GitHub API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no cached notifications at {}", .0.display())]
    CacheMissing(std::path::PathBuf),

    #[error("unexpected cache content: expected {expected}")]
    UnexpectedCache { expected: &'static str },

    #[error("notifier failed: {0}")]
    Notifier(String),

    #[error("{0}")]
    Other(String),
}

impl GhbarError {
    /// Short text shown on the bar for this error.
    pub fn bar_message(&self) -> String {
        match self {
            GhbarError::ConfigMissing => "Config missing".to_string(),
            GhbarError::ConfigInvalid(_) => "Config invalid".to_string(),
            GhbarError::Timeout => "Timeout".to_string(),
            GhbarError::Connection(_) => "Error".to_string(),
            GhbarError::NoData => "No data".to_string(),
            other => format!("Error: {}", other),
        }
    }

    /// Full status-bar line, marker included.
    pub fn bar_line(&self) -> String {
        format!("{} {}", ERROR_MARKER, self.bar_message())
    }

    /// Classify a transport error from reqwest.
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GhbarError::Timeout
        } else if err.is_connect() {
            GhbarError::Connection(err)
        } else {
            GhbarError::Api(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, GhbarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_messages() {
        assert_eq!(GhbarError::ConfigMissing.bar_message(), "Config missing");
        assert_eq!(GhbarError::Timeout.bar_message(), "Timeout");
        assert_eq!(GhbarError::NoData.bar_message(), "No data");

        let invalid = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            GhbarError::ConfigInvalid(invalid).bar_message(),
            "Config invalid"
        );
    }

    #[test]
    fn test_catch_all_carries_detail() {
        let err = GhbarError::Other("boom".to_string());
        assert_eq!(err.bar_message(), "Error: boom");
        assert_eq!(err.bar_line(), "%{F#ff0000} Error: boom");
    }
}
