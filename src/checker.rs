//! Coverage check workflow
//!
//! This module provides:
//! - Workflow coordination: list languages → resolve ecosystems → validate
//! - Early exit when the repository needs no ecosystem
//! - A report that always completes, with failures carried as values

use crate::dependabot::{ConfigurationValidator, ValidationOutcome};
use crate::ecosystem::{EcosystemLanguageMapping, EcosystemResolver};
use crate::github::{RepoRef, RepositoryHost};
use crate::progress::Progress;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Message reported when no catalog ecosystem matches the repository
pub const NO_ECOSYSTEMS_MESSAGE: &str =
    "No supported Dependabot ecosystems found for this repository";

/// Repository and reference to check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckTarget {
    pub repo: RepoRef,
    /// Branch, tag or commit; the default branch when `None`
    pub git_ref: Option<String>,
}

impl CheckTarget {
    pub fn new(repo: RepoRef, git_ref: Option<String>) -> Self {
        Self { repo, git_ref }
    }
}

/// Terminal state of a check run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Listing repository languages failed; carries the raw error message
    LanguageLookupFailed(String),
    /// No ecosystem is required, so the configuration was never read
    NoEcosystems,
    /// dependabot.yml was validated
    Validated(ValidationOutcome),
}

/// Everything a check run observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub repo: RepoRef,
    /// Repository languages in the order the host reported them
    pub languages: Vec<String>,
    /// Required ecosystems and the languages that require them
    pub mapping: EcosystemLanguageMapping,
    /// Ecosystems declared in dependabot.yml, when it could be read
    pub configured: Option<BTreeSet<String>>,
    /// Configured ecosystems the catalog does not know
    pub unrecognized: Vec<String>,
    pub status: CheckStatus,
}

impl CheckReport {
    /// Whether the run passes
    pub fn passed(&self) -> bool {
        self.failure_message().is_none()
    }

    /// The single failure report, `None` when the run passes
    pub fn failure_message(&self) -> Option<String> {
        match &self.status {
            CheckStatus::LanguageLookupFailed(message) => Some(message.clone()),
            CheckStatus::NoEcosystems => None,
            CheckStatus::Validated(outcome) => outcome.failure_message(),
        }
    }

    /// Missing ecosystems, empty unless the run found a coverage gap
    pub fn missing(&self) -> &[String] {
        match &self.status {
            CheckStatus::Validated(outcome) => outcome.missing(),
            _ => &[],
        }
    }

    /// Informational lines, in the order they are shown
    pub fn info_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if matches!(self.status, CheckStatus::LanguageLookupFailed(_)) {
            return lines;
        }

        lines.push(format!("Found languages: {}", self.languages.join(", ")));
        if matches!(self.status, CheckStatus::NoEcosystems) {
            lines.push(NO_ECOSYSTEMS_MESSAGE.to_string());
            return lines;
        }

        lines.push(String::new());
        lines.push("Supported Dependabot ecosystems for your repository:".to_string());
        for (ecosystem, languages) in self.mapping.iter() {
            lines.push(format!("- {}: {}", ecosystem, languages.join(", ")));
        }
        lines.push(String::new());

        if let CheckStatus::Validated(outcome) = &self.status {
            if outcome.is_success() {
                lines.push(outcome.message());
            }
        }
        lines
    }
}

/// Runs the coverage check against a repository host
pub struct Checker<'a> {
    host: &'a dyn RepositoryHost,
    resolver: EcosystemResolver,
}

impl<'a> Checker<'a> {
    /// Create a checker using the given host and resolver
    pub fn new(host: &'a dyn RepositoryHost, resolver: EcosystemResolver) -> Self {
        Self { host, resolver }
    }

    /// Run the check
    pub async fn run(&self, target: &CheckTarget) -> CheckReport {
        self.run_with_progress(target, false).await
    }

    /// Run the check with optional progress display
    pub async fn run_with_progress(&self, target: &CheckTarget, show_progress: bool) -> CheckReport {
        let mut progress = Progress::new(show_progress);
        let mut report = CheckReport {
            repo: target.repo.clone(),
            languages: Vec::new(),
            mapping: EcosystemLanguageMapping::new(),
            configured: None,
            unrecognized: Vec::new(),
            status: CheckStatus::NoEcosystems,
        };

        // Step 1: List repository languages
        progress.spinner(&format!("Fetching languages for {}...", target.repo));
        let languages = self.host.list_languages(&target.repo).await;
        progress.finish_and_clear();

        let languages = match languages {
            Ok(languages) => languages,
            Err(e) => {
                debug!(error = ?e, "language lookup failed");
                report.status = CheckStatus::LanguageLookupFailed(e.to_string());
                return report;
            }
        };
        report.languages = languages.into_iter().map(|(name, _)| name).collect();
        info!(languages = %report.languages.join(", "), "repository languages");

        // Step 2: Resolve required ecosystems
        report.mapping = self.resolver.resolve(report.languages.as_slice());
        if report.mapping.is_empty() {
            debug!("no supported ecosystems found");
            return report;
        }

        // Step 3: Validate dependabot.yml
        progress.spinner("Reading .github/dependabot.yml...");
        let validator = ConfigurationValidator::new(self.host);
        let validation = validator
            .validate_configuration(
                &target.repo,
                target.git_ref.as_deref(),
                &report.mapping.required_ecosystems(),
            )
            .await;
        progress.finish_and_clear();

        if let Some(configured) = &validation.configured {
            report.unrecognized = configured
                .iter()
                .filter(|e| !self.resolver.catalog().contains(e))
                .cloned()
                .collect();
            if !report.unrecognized.is_empty() {
                debug!(
                    ecosystems = %report.unrecognized.join(", "),
                    "configured ecosystems outside the catalog are not checked"
                );
            }
        }
        report.configured = validation.configured;
        report.status = CheckStatus::Validated(validation.outcome);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(status: CheckStatus) -> CheckReport {
        let resolver = EcosystemResolver::default();
        CheckReport {
            repo: RepoRef::new("o", "r"),
            languages: vec!["TypeScript".to_string(), "Python".to_string()],
            mapping: resolver.resolve(&["TypeScript", "Python"]),
            configured: None,
            unrecognized: Vec::new(),
            status,
        }
    }

    #[test]
    fn test_info_lines_success() {
        let lines = report(CheckStatus::Validated(ValidationOutcome::Success)).info_lines();
        assert_eq!(
            lines,
            vec![
                "Found languages: TypeScript, Python",
                "",
                "Supported Dependabot ecosystems for your repository:",
                "- npm: TypeScript",
                "- pip: Python",
                "",
                "All supported ecosystems are configured in dependabot.yml",
            ]
        );
    }

    #[test]
    fn test_info_lines_failure_omit_success_line() {
        let r = report(CheckStatus::Validated(ValidationOutcome::MissingEcosystems(
            vec!["pip".to_string()],
        )));
        assert!(!r.passed());
        assert_eq!(r.missing(), &["pip".to_string()]);
        assert!(!r
            .info_lines()
            .iter()
            .any(|l| l.starts_with("All supported")));
    }

    #[test]
    fn test_language_lookup_failure_has_no_info_lines() {
        let r = report(CheckStatus::LanguageLookupFailed("API error".to_string()));
        assert!(r.info_lines().is_empty());
        assert_eq!(r.failure_message().as_deref(), Some("API error"));
    }

    #[test]
    fn test_no_ecosystems_passes() {
        let mut r = report(CheckStatus::NoEcosystems);
        r.languages = vec!["Brainfuck".to_string()];
        r.mapping = EcosystemLanguageMapping::new();
        assert!(r.passed());
        assert_eq!(
            r.info_lines(),
            vec![
                "Found languages: Brainfuck",
                "No supported Dependabot ecosystems found for this repository",
            ]
        );
    }
}
