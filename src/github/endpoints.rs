// GitHub API endpoint functions.

use serde_json::Value;

use crate::error::{GhbarError, Result};

use super::client::GitHubClient;

impl GitHubClient {
    /// Get the raw notifications payload.
    ///
    /// The body is kept as untyped JSON so it can be cached verbatim.
    pub async fn get_notifications(&mut self) -> Result<Value> {
        let response = self.get().await?;
        let body = response
            .bytes()
            .await
            .map_err(GhbarError::from_transport)?;
        let data: Value = serde_json::from_slice(&body)?;
        Ok(data)
    }
}
