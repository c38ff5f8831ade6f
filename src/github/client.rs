//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout, User-Agent and API base URL
//! - GitHub REST headers and optional bearer token
//! - Mapping of error statuses to `GitHubError`
//!
//! Requests are sent exactly once; retrying is left to whoever schedules
//! the check.

use crate::error::GitHubError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Default timeout for HTTP requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default GitHub REST API base URL
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("depcover/", env!("CARGO_PKG_VERSION"));

/// Pinned REST API version
const API_VERSION: &str = "2022-11-28";

/// Error body returned by the GitHub API
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// HTTP client wrapper for the GitHub REST API
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl HttpClient {
    /// Create a new client against the public API without a token
    pub fn new() -> Result<Self, GitHubError> {
        Self::with_config(DEFAULT_API_URL, None, DEFAULT_TIMEOUT)
    }

    /// Create a new client with custom configuration
    pub fn with_config(
        base_url: &str,
        token: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, GitHubError> {
        let base_url = Url::parse(base_url).map_err(|e| GitHubError::Client {
            message: format!("invalid API URL '{}': {}", base_url, e),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                GitHubError::Client {
                    message: format!("invalid token: {}", e),
                }
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| GitHubError::Client {
                message: e.to_string(),
            })?;

        Ok(Self { client, base_url })
    }

    /// API base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL from path segments and query pairs
    ///
    /// Segments are percent-encoded individually, so a path such as
    /// `.github/dependabot.yml` must be passed as two segments.
    pub fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }

    /// Perform a GET request and parse the JSON response
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, GitHubError> {
        let url_str = url.to_string();
        debug!(url = %url_str, "GET");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                GitHubError::Timeout {
                    url: url_str.clone(),
                }
            } else {
                GitHubError::network(&url_str, e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_from_response(status, response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| GitHubError::invalid_response(&url_str, e.to_string()))
    }

    /// Convert an error response into a `GitHubError`
    async fn error_from_response(status: StatusCode, response: reqwest::Response) -> GitHubError {
        let exhausted = response
            .headers()
            .get("x-ratelimit-remaining")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "0");
        if exhausted
            && (status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS)
        {
            return GitHubError::RateLimited;
        }

        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .filter(|m| !m.is_empty());
        debug!(status = status.as_u16(), body_message = ?message, "GitHub API error");
        GitHubError::api(status.as_u16(), message)
    }
}
