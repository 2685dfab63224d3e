// Status-bar presenter: icon followed by the unread count.

use std::fmt;

use serde_json::Value;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{GhbarError, Result};
use crate::fetch::fetch_notifications;
use crate::github::GitHubClient;

/// What the bar shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarOutput {
    pub icon: String,
    pub count: usize,
}

impl fmt::Display for BarOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.count)
    }
}

/// Number of entries in the payload: list length, or key count for an object.
pub fn entry_count(data: &Value) -> Result<usize> {
    match data {
        Value::Array(items) => Ok(items.len()),
        Value::Object(map) => Ok(map.len()),
        _ => Err(GhbarError::UnexpectedCache {
            expected: "a list or an object",
        }),
    }
}

/// Fetch (or reuse) the notifications and build the bar output.
pub async fn bar_output(
    config: &Config,
    client: &mut GitHubClient,
    store: &CacheStore,
) -> Result<BarOutput> {
    let data = fetch_notifications(client, store, config.poll_window()).await?;

    Ok(BarOutput {
        icon: config.icon.clone(),
        count: entry_count(&data)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_display() {
        let output = BarOutput {
            icon: "\u{f09b}".to_string(),
            count: 3,
        };
        assert_eq!(output.to_string(), "\u{f09b} 3");
    }

    #[test]
    fn test_entry_count() {
        assert_eq!(entry_count(&json!([1, 2, 3])).unwrap(), 3);
        assert_eq!(entry_count(&json!({})).unwrap(), 0);
        assert_eq!(entry_count(&json!({"message": "x", "url": "y"})).unwrap(), 2);
        assert!(entry_count(&json!(42)).is_err());
    }

    #[tokio::test]
    async fn test_bar_output_after_fetch() {
        let temp_dir = TempDir::new().unwrap();
        let store = CacheStore::new(temp_dir.path().join("cache.json"));

        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/notifications")
            .with_status(200)
            .with_body("[1,2,3]")
            .create_async()
            .await;

        let config = Config::parse(&format!(
            r#"{{"token": "secret", "api_url": "{}/notifications"}}"#,
            server.url()
        ))
        .unwrap();
        let mut client = GitHubClient::new(&config.token, &config.api_url).unwrap();

        let output = bar_output(&config, &mut client, &store).await.unwrap();

        assert_eq!(
            output,
            BarOutput {
                icon: "\u{f09b}".to_string(),
                count: 3
            }
        );
        assert_eq!(store.read().unwrap(), Some(json!([1, 2, 3])));
    }
}
