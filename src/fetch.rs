// Cached fetch of the notification list.
// Serves the cache while it is fresh, otherwise makes exactly one request.

use std::time::Duration;

use serde_json::{Value, json};

use crate::cache::CacheStore;
use crate::error::{GhbarError, Result};
use crate::github::GitHubClient;

/// Return the notification payload, hitting the network only when the
/// cache is older than `window` or missing.
///
/// A non-200 response overwrites the cache with `{}` and fails with
/// [`GhbarError::NoData`]. Transport errors leave the cache untouched.
pub async fn fetch_notifications(
    client: &mut GitHubClient,
    store: &CacheStore,
    window: Duration,
) -> Result<Value> {
    if store.is_fresh(window)?
        && let Some(data) = store.read()?
    {
        tracing::debug!(path = %store.path().display(), "serving cached notifications");
        return Ok(data);
    }

    tracing::info!(url = %client.url(), "cache stale, fetching notifications");
    match client.get_notifications().await {
        Ok(data) => {
            let rate = client.rate_limit();
            tracing::debug!(remaining = rate.remaining, limit = rate.limit, "notifications fetched");
            store.write(&data)?;
            Ok(data)
        }
        Err(GhbarError::NoData) => {
            store.write(&json!({}))?;
            Err(GhbarError::NoData)
        }
        Err(e) => Err(e),
    }
}
