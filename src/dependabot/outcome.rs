//! Outcome of a dependabot.yml coverage check

use serde::Serialize;
use std::fmt;

/// Prefix shared by every fetch, decode, parse and shape failure
pub const MISSING_FILE_PREFIX: &str = "No .github/dependabot.yml file found.";

/// Message reported when every required ecosystem is configured
pub const SUCCESS_MESSAGE: &str = "All supported ecosystems are configured in dependabot.yml";

/// Prefix of the coverage-gap report
const MISSING_ECOSYSTEMS_PREFIX: &str = "Missing Dependabot configuration for ecosystems: ";

/// Result of validating dependabot.yml against the required ecosystems
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// Every required ecosystem is configured
    Success,
    /// Required ecosystems absent from the configuration, in required order
    MissingEcosystems(Vec<String>),
    /// The document has no usable `updates` sequence
    StructuralError(String),
    /// The file could not be fetched, decoded or parsed
    FetchFailure(Option<String>),
}

impl ValidationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ValidationOutcome::Success)
    }

    /// Missing ecosystems, empty unless this is a coverage gap
    pub fn missing(&self) -> &[String] {
        match self {
            ValidationOutcome::MissingEcosystems(missing) => missing,
            _ => &[],
        }
    }

    /// The single line reported for this outcome
    pub fn message(&self) -> String {
        match self {
            ValidationOutcome::Success => SUCCESS_MESSAGE.to_string(),
            ValidationOutcome::MissingEcosystems(missing) => {
                format!("{}{}", MISSING_ECOSYSTEMS_PREFIX, missing.join(", "))
            }
            ValidationOutcome::StructuralError(detail)
            | ValidationOutcome::FetchFailure(Some(detail)) => {
                format!("{} {}", MISSING_FILE_PREFIX, detail)
            }
            ValidationOutcome::FetchFailure(None) => MISSING_FILE_PREFIX.to_string(),
        }
    }

    /// The failure report, `None` on success
    pub fn failure_message(&self) -> Option<String> {
        if self.is_success() {
            None
        } else {
            Some(self.message())
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
