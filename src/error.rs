//! Application error types using thiserror
//!
//! Error hierarchy:
//! - GitHubError: Issues with GitHub API communication
//! - DependabotError: Issues fetching, decoding or reading dependabot.yml
//! - CatalogError: Violated ecosystem catalog invariants
//! - ConfigError: Issues with CLI configuration

use thiserror::Error;

/// Errors that stop the check before it starts
#[derive(Error, Debug)]
pub enum AppError {
    /// GitHub API related errors
    #[error(transparent)]
    GitHub(#[from] GitHubError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to GitHub API communication
#[derive(Error, Debug)]
pub enum GitHubError {
    /// The API answered with a non-success status
    #[error("{}", .message.as_deref().unwrap_or("GitHub API request failed"))]
    Api { status: u16, message: Option<String> },

    /// Network request failed
    #[error("request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// Timeout
    #[error("timeout while requesting {url}")]
    Timeout { url: String },

    /// Rate limit exhausted
    #[error("API rate limit exceeded")]
    RateLimited,

    /// Response body could not be read or parsed
    #[error("invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },

    /// The HTTP client could not be built
    #[error("failed to create HTTP client: {message}")]
    Client { message: String },
}

/// Errors raised while loading dependabot.yml
#[derive(Error, Debug)]
pub enum DependabotError {
    /// The content fetch failed
    #[error(transparent)]
    Fetch(#[from] GitHubError),

    /// The fetch succeeded but the response was not a file with content
    #[error("Invalid dependabot.yml content")]
    InvalidContent,

    /// Content is in an encoding other than base64
    #[error("unsupported dependabot.yml content encoding '{encoding}'")]
    UnsupportedEncoding { encoding: String },

    /// Base64 or UTF-8 decoding failed
    #[error("failed to decode dependabot.yml content: {message}")]
    Decode { message: String },

    /// YAML syntax error
    #[error("failed to parse dependabot.yml: {message}")]
    Parse { message: String },

    /// Document lacks an `updates` sequence
    #[error("Invalid dependabot.yml: Missing or invalid \"updates\" configuration")]
    MissingUpdates,
}

/// Errors related to the ecosystem catalog
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// Two entries share an ecosystem identifier
    #[error("duplicate ecosystem '{ecosystem}' in catalog")]
    DuplicateEcosystem { ecosystem: String },

    /// An entry lists no languages
    #[error("ecosystem '{ecosystem}' has no languages")]
    EmptyLanguages { ecosystem: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Repository is not in owner/repo form
    #[error("invalid repository '{value}': expected 'owner/repo'")]
    InvalidRepository { value: String },
}

impl GitHubError {
    /// Creates a new Api error
    pub fn api(status: u16, message: Option<String>) -> Self {
        GitHubError::Api { status, message }
    }

    /// Creates a new NetworkError
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        GitHubError::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(url: impl Into<String>, message: impl Into<String>) -> Self {
        GitHubError::InvalidResponse {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Human-readable detail, if the failure carried one
    ///
    /// An API error without a body message has no detail.
    pub fn detail(&self) -> Option<String> {
        match self {
            GitHubError::Api { message: None, .. } => None,
            other => Some(other.to_string()),
        }
    }

    /// HTTP status, when the API answered
    pub fn status(&self) -> Option<u16> {
        match self {
            GitHubError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl DependabotError {
    /// Detail to append after the "file not found" prefix
    pub fn detail(&self) -> Option<String> {
        match self {
            DependabotError::Fetch(e) => e.detail(),
            other => Some(other.to_string()),
        }
    }
}
