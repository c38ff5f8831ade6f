//! Validate dependabot.yml against the ecosystems a repository requires
//!
//! Pipeline: fetch → decode → parse → shape check → diff. Every stage before
//! the diff may fail; all such failures are reported under the same
//! "No .github/dependabot.yml file found." prefix.

use crate::dependabot::{DependabotConfig, ValidationOutcome};
use crate::error::DependabotError;
use crate::github::{RepoRef, RepositoryHost, DEPENDABOT_CONFIG_PATH};
use std::collections::BTreeSet;
use tracing::debug;

/// Checks a repository's dependabot.yml for coverage gaps
pub struct ConfigurationValidator<'a> {
    host: &'a dyn RepositoryHost,
}

/// Outcome together with the configured set it was computed from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub outcome: ValidationOutcome,
    /// Ecosystems declared in the file, `None` if it never got that far
    pub configured: Option<BTreeSet<String>>,
}

impl<'a> ConfigurationValidator<'a> {
    /// Create a validator that fetches through `host`
    pub fn new(host: &'a dyn RepositoryHost) -> Self {
        Self { host }
    }

    /// Validate the file at `git_ref` against `required` ecosystems
    pub async fn validate_configuration(
        &self,
        repo: &RepoRef,
        git_ref: Option<&str>,
        required: &[String],
    ) -> ValidationReport {
        debug!(repository = %repo, git_ref = ?git_ref, "reading dependabot.yml");
        match self.load_config(repo, git_ref).await {
            Ok(config) => {
                let configured = config.configured_ecosystems();
                ValidationReport {
                    outcome: diff_ecosystems(required, &configured),
                    configured: Some(configured),
                }
            }
            Err(e) => {
                debug!(error = %e, "dependabot.yml could not be used");
                ValidationReport {
                    outcome: outcome_for_error(&e),
                    configured: None,
                }
            }
        }
    }

    async fn load_config(
        &self,
        repo: &RepoRef,
        git_ref: Option<&str>,
    ) -> Result<DependabotConfig, DependabotError> {
        let payload = self
            .host
            .get_content(repo, DEPENDABOT_CONFIG_PATH, git_ref)
            .await?;
        debug!("dependabot.yml content retrieved");
        let text = payload.into_file()?.decode()?;
        DependabotConfig::parse(&text)
    }
}

/// Validate already-fetched dependabot.yml text
pub fn validate_document(text: &str, required: &[String]) -> ValidationOutcome {
    match DependabotConfig::parse(text) {
        Ok(config) => diff_ecosystems(required, &config.configured_ecosystems()),
        Err(e) => outcome_for_error(&e),
    }
}

/// Required ecosystems absent from `configured`, in required order
pub fn diff_ecosystems(required: &[String], configured: &BTreeSet<String>) -> ValidationOutcome {
    debug!(
        configured = %configured.iter().cloned().collect::<Vec<_>>().join(", "),
        "ecosystems configured in dependabot.yml"
    );
    let missing: Vec<String> = required
        .iter()
        .filter(|ecosystem| !configured.contains(ecosystem.as_str()))
        .cloned()
        .collect();

    if missing.is_empty() {
        ValidationOutcome::Success
    } else {
        debug!(missing = %missing.join(", "), "missing ecosystems");
        ValidationOutcome::MissingEcosystems(missing)
    }
}

fn outcome_for_error(error: &DependabotError) -> ValidationOutcome {
    match error {
        DependabotError::MissingUpdates => ValidationOutcome::StructuralError(error.to_string()),
        other => ValidationOutcome::FetchFailure(other.detail()),
    }
}
