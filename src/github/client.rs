// GitHub API HTTP client.
// Handles authentication, rate limit tracking, and response status checks.

use std::time::Duration;

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{GhbarError, Result};

use super::types::RateLimit;

const GITHUB_API_VERSION: &str = "2022-11-28";

/// Upper bound on a single request, connect included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// GitHub API client bound to one endpoint URL.
pub struct GitHubClient {
    client: Client,
    url: String,
    rate_limit: RateLimit,
}

impl GitHubClient {
    /// Create a new client for `url` authenticating with `token`.
    pub fn new(token: &str, url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| GhbarError::Other(e.to_string()))?,
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("ghbar/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(GhbarError::Api)?;

        Ok(Self {
            client,
            url: url.to_string(),
            rate_limit: RateLimit::default(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get the current rate limit information.
    pub fn rate_limit(&self) -> &RateLimit {
        &self.rate_limit
    }

    /// Make a single GET request to the configured URL.
    pub async fn get(&mut self) -> Result<Response> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(GhbarError::from_transport)?;

        self.update_rate_limit(&response);
        self.check_response(response)
    }

    /// Update rate limit from response headers.
    fn update_rate_limit(&mut self, response: &Response) {
        let header = |name: &str| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
        };

        if let Some(limit) = header("x-ratelimit-limit") {
            self.rate_limit.limit = limit;
        }
        if let Some(remaining) = header("x-ratelimit-remaining") {
            self.rate_limit.remaining = remaining;
        }
        if let Some(reset) = header("x-ratelimit-reset") {
            self.rate_limit.reset = reset;
        }
    }

    /// Only 200 carries data; every other status means "no data".
    fn check_response(&self, response: Response) -> Result<Response> {
        match response.status() {
            StatusCode::OK => Ok(response),
            status => {
                if self.rate_limit.limit > 0 && self.rate_limit.remaining == 0 {
                    tracing::warn!(
                        %status,
                        reset_at = %self.rate_limit.reset_at(),
                        "rate limit exceeded"
                    );
                } else {
                    tracing::warn!(%status, url = %self.url, "unexpected response status");
                }
                Err(GhbarError::NoData)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sends_auth_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/notifications")
            .match_header("authorization", "Bearer secret")
            .match_header("accept", "application/vnd.github+json")
            .match_header("user-agent", mockito::Matcher::Regex("^ghbar/".into()))
            .with_status(200)
            .with_header("x-ratelimit-limit", "5000")
            .with_header("x-ratelimit-remaining", "4999")
            .with_body("[]")
            .create_async()
            .await;

        let mut client =
            GitHubClient::new("secret", &format!("{}/notifications", server.url())).unwrap();
        client.get().await.unwrap();

        mock.assert_async().await;
        assert_eq!(client.rate_limit().limit, 5000);
        assert_eq!(client.rate_limit().remaining, 4999);
    }

    #[tokio::test]
    async fn test_non_ok_status_is_no_data() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/notifications")
            .with_status(304)
            .create_async()
            .await;

        let mut client =
            GitHubClient::new("secret", &format!("{}/notifications", server.url())).unwrap();
        let err = client.get().await.unwrap_err();

        assert!(matches!(err, GhbarError::NoData));
    }

    #[tokio::test]
    async fn test_rate_limited_is_no_data() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/notifications")
            .with_status(403)
            .with_header("x-ratelimit-limit", "5000")
            .with_header("x-ratelimit-remaining", "0")
            .with_header("x-ratelimit-reset", "1700000000")
            .create_async()
            .await;

        let mut client =
            GitHubClient::new("secret", &format!("{}/notifications", server.url())).unwrap();
        let err = client.get().await.unwrap_err();

        assert!(matches!(err, GhbarError::NoData));
        assert_eq!(client.rate_limit().remaining, 0);
        assert_eq!(client.rate_limit().reset, 1_700_000_000);
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Nothing listens on the discard port.
        let mut client = GitHubClient::new("secret", "http://127.0.0.1:9/notifications").unwrap();
        let err = client.get().await.unwrap_err();

        assert_eq!(err.bar_message(), "Error");
    }
}
