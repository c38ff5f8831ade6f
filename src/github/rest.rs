//! GitHub REST API adapter
//!
//! Endpoints:
//! - GET /repos/{owner}/{repo}/languages
//! - GET /repos/{owner}/{repo}/contents/{path}?ref={ref}

use crate::error::GitHubError;
use crate::github::{ContentPayload, HttpClient, LanguageBreakdown, RepoRef, RepositoryHost};
use async_trait::async_trait;
use reqwest::Url;
use serde_json::{Map, Value};

/// GitHub REST adapter
#[derive(Debug, Clone)]
pub struct GitHubAdapter {
    client: HttpClient,
}

impl GitHubAdapter {
    /// Create a new GitHub adapter
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    fn languages_url(&self, repo: &RepoRef) -> Url {
        self.client.endpoint(
            &["repos", repo.owner.as_str(), repo.repo.as_str(), "languages"],
            &[],
        )
    }

    fn contents_url(&self, repo: &RepoRef, path: &str, git_ref: Option<&str>) -> Url {
        let mut segments = vec!["repos", repo.owner.as_str(), repo.repo.as_str(), "contents"];
        segments.extend(path.split('/').filter(|s| !s.is_empty()));
        let query: Vec<(&str, &str)> = git_ref.map(|r| ("ref", r)).into_iter().collect();
        self.client.endpoint(&segments, &query)
    }
}

#[async_trait]
impl RepositoryHost for GitHubAdapter {
    async fn list_languages(&self, repo: &RepoRef) -> Result<LanguageBreakdown, GitHubError> {
        let url = self.languages_url(repo);
        let body: Map<String, Value> = self.client.get_json(url).await?;

        Ok(body
            .into_iter()
            .map(|(language, bytes)| (language, bytes.as_u64().unwrap_or(0)))
            .collect())
    }

    async fn get_content(
        &self,
        repo: &RepoRef,
        path: &str,
        git_ref: Option<&str>,
    ) -> Result<ContentPayload, GitHubError> {
        let url = self.contents_url(repo, path, git_ref);
        self.client.get_json(url).await
    }
}
