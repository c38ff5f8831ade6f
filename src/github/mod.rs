//! Repository host adapters
//!
//! This module provides:
//! - The `RepositoryHost` trait: language listing and file content fetch
//! - HTTP client shared foundation
//! - GitHub REST API adapter
//! - Contents payload and base64 transport decoding

mod client;
mod contents;
mod rest;

pub use client::{HttpClient, DEFAULT_API_URL, DEFAULT_TIMEOUT};
pub use contents::{ContentPayload, FileContent};
pub use rest::GitHubAdapter;

use crate::error::{ConfigError, GitHubError};
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

/// Path of the Dependabot configuration file inside a repository
pub const DEPENDABOT_CONFIG_PATH: &str = ".github/dependabot.yml";

/// An `owner/repo` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl FromStr for RepoRef {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidRepository {
            value: s.to_string(),
        };
        let (owner, repo) = s.trim().split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || repo.is_empty() || repo.contains('/') {
            return Err(invalid());
        }
        Ok(Self::new(owner, repo))
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Languages reported for a repository with their byte counts, in API order
pub type LanguageBreakdown = Vec<(String, u64)>;

/// Access to repository metadata and file contents
#[async_trait]
pub trait RepositoryHost: Send + Sync {
    /// List the languages detected in a repository
    async fn list_languages(&self, repo: &RepoRef) -> Result<LanguageBreakdown, GitHubError>;

    /// Fetch a file's contents at an optional git reference
    async fn get_content(
        &self,
        repo: &RepoRef,
        path: &str,
        git_ref: Option<&str>,
    ) -> Result<ContentPayload, GitHubError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_ref_parse() {
        let repo: RepoRef = "octo-org/hello-world".parse().unwrap();
        assert_eq!(repo.owner, "octo-org");
        assert_eq!(repo.repo, "hello-world");
        assert_eq!(repo.to_string(), "octo-org/hello-world");
    }

    #[test]
    fn test_repo_ref_parse_invalid() {
        assert!("no-slash".parse::<RepoRef>().is_err());
        assert!("/repo".parse::<RepoRef>().is_err());
        assert!("owner/".parse::<RepoRef>().is_err());
        assert!("a/b/c".parse::<RepoRef>().is_err());
        assert!("".parse::<RepoRef>().is_err());
    }

    #[test]
    fn test_config_path() {
        assert_eq!(DEPENDABOT_CONFIG_PATH, ".github/dependabot.yml");
    }
}
