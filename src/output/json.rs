//! JSON output formatter for machine processing

use crate::checker::{CheckReport, CheckStatus};
use crate::ecosystem::EcosystemLanguageMapping;
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of a check report
#[derive(Serialize)]
struct JsonOutput<'a> {
    repository: String,
    passed: bool,
    /// One of `language_lookup_failed`, `no_ecosystems`, or the outcome kind
    status: &'static str,
    languages: &'a [String],
    ecosystems: &'a EcosystemLanguageMapping,
    #[serde(skip_serializing_if = "Option::is_none")]
    configured: Option<Vec<&'a str>>,
    missing: &'a [String],
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    unrecognized: &'a [String],
    /// Failure report, or the informational result line on success
    message: Option<String>,
}

fn status_label(status: &CheckStatus) -> &'static str {
    use crate::dependabot::ValidationOutcome as O;
    match status {
        CheckStatus::LanguageLookupFailed(_) => "language_lookup_failed",
        CheckStatus::NoEcosystems => "no_ecosystems",
        CheckStatus::Validated(O::Success) => "success",
        CheckStatus::Validated(O::MissingEcosystems(_)) => "missing_ecosystems",
        CheckStatus::Validated(O::StructuralError(_)) => "structural_error",
        CheckStatus::Validated(O::FetchFailure(_)) => "fetch_failure",
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let message = match &report.status {
            CheckStatus::NoEcosystems => Some(crate::checker::NO_ECOSYSTEMS_MESSAGE.to_string()),
            CheckStatus::Validated(outcome) => Some(outcome.message()),
            CheckStatus::LanguageLookupFailed(message) => Some(message.clone()),
        };

        let output = JsonOutput {
            repository: report.repo.to_string(),
            passed: report.passed(),
            status: status_label(&report.status),
            languages: &report.languages,
            ecosystems: &report.mapping,
            configured: report
                .configured
                .as_ref()
                .map(|set| set.iter().map(String::as_str).collect()),
            missing: report.missing(),
            unrecognized: &report.unrecognized,
            message,
        };

        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependabot::ValidationOutcome;
    use crate::ecosystem::EcosystemResolver;
    use crate::github::RepoRef;
    use serde_json::Value;

    fn render(report: &CheckReport) -> Value {
        let mut out = Vec::new();
        JsonFormatter::new().format(report, &mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_format_json_missing() {
        let report = CheckReport {
            repo: RepoRef::new("octo", "hello"),
            languages: vec!["JavaScript".to_string(), "Python".to_string()],
            mapping: EcosystemResolver::default().resolve(&["JavaScript", "Python"]),
            configured: Some(["npm".to_string(), "docker".to_string()].into_iter().collect()),
            unrecognized: vec!["docker".to_string()],
            status: CheckStatus::Validated(ValidationOutcome::MissingEcosystems(vec![
                "pip".to_string(),
            ])),
        };

        let json = render(&report);
        assert_eq!(json["repository"], "octo/hello");
        assert_eq!(json["passed"], false);
        assert_eq!(json["status"], "missing_ecosystems");
        assert_eq!(json["ecosystems"]["npm"][0], "JavaScript");
        assert_eq!(json["ecosystems"]["pip"][0], "Python");
        assert_eq!(json["configured"], serde_json::json!(["docker", "npm"]));
        assert_eq!(json["missing"], serde_json::json!(["pip"]));
        assert_eq!(json["unrecognized"], serde_json::json!(["docker"]));
        assert_eq!(
            json["message"],
            "Missing Dependabot configuration for ecosystems: pip"
        );
    }

    #[test]
    fn test_format_json_lookup_failure() {
        let report = CheckReport {
            repo: RepoRef::new("octo", "hello"),
            languages: Vec::new(),
            mapping: EcosystemLanguageMapping::new(),
            configured: None,
            unrecognized: Vec::new(),
            status: CheckStatus::LanguageLookupFailed("Bad credentials".to_string()),
        };

        let json = render(&report);
        assert_eq!(json["passed"], false);
        assert_eq!(json["status"], "language_lookup_failed");
        assert_eq!(json["message"], "Bad credentials");
        assert!(json.get("configured").is_none());
        assert!(json.get("unrecognized").is_none());
    }

    #[test]
    fn test_format_json_no_ecosystems() {
        let report = CheckReport {
            repo: RepoRef::new("octo", "hello"),
            languages: vec!["Brainfuck".to_string()],
            mapping: EcosystemLanguageMapping::new(),
            configured: None,
            unrecognized: Vec::new(),
            status: CheckStatus::NoEcosystems,
        };

        let json = render(&report);
        assert_eq!(json["passed"], true);
        assert_eq!(json["ecosystems"], serde_json::json!({}));
        assert_eq!(
            json["message"],
            "No supported Dependabot ecosystems found for this repository"
        );
    }
}
