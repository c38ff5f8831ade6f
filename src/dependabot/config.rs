//! dependabot.yml document model
//!
//! The document is read into a generic `serde_yaml::Value` first so that a
//! wrong shape is reported as a structural error rather than a parse error.

use crate::error::DependabotError;
use serde_yaml::Value;
use std::collections::BTreeSet;

/// Key of the update list
const UPDATES_KEY: &str = "updates";

/// Key of an update entry's ecosystem
const ECOSYSTEM_KEY: &str = "package-ecosystem";

/// One element of the `updates` list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEntry {
    /// Declared `package-ecosystem`, if present and a string
    pub package_ecosystem: Option<String>,
    /// Declared `directory`, if present and a string
    pub directory: Option<String>,
}

impl UpdateEntry {
    fn from_value(value: &Value) -> Self {
        let field = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        Self {
            package_ecosystem: field(ECOSYSTEM_KEY),
            directory: field("directory"),
        }
    }
}

/// A structurally valid dependabot.yml
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependabotConfig {
    /// Declared `version`, if any
    pub version: Option<u64>,
    /// Entries of the `updates` list, in document order
    pub updates: Vec<UpdateEntry>,
}

impl DependabotConfig {
    /// Parse and shape-check dependabot.yml text
    pub fn parse(text: &str) -> Result<Self, DependabotError> {
        let document = parse_document(text)?;
        Self::from_document(&document)
    }

    /// Shape-check an already parsed document
    ///
    /// The document must be a mapping whose `updates` value is a sequence.
    pub fn from_document(document: &Value) -> Result<Self, DependabotError> {
        let updates = document
            .get(UPDATES_KEY)
            .and_then(Value::as_sequence)
            .ok_or(DependabotError::MissingUpdates)?;

        Ok(Self {
            version: document.get("version").and_then(Value::as_u64),
            updates: updates.iter().map(UpdateEntry::from_value).collect(),
        })
    }

    /// Set of ecosystems declared across all update entries
    pub fn configured_ecosystems(&self) -> BTreeSet<String> {
        self.updates
            .iter()
            .filter_map(|u| u.package_ecosystem.clone())
            .collect()
    }
}

/// Parse YAML text into a generic value
///
/// Text holding no document at all (only blank lines, comments or markers)
/// reads as null.
pub fn parse_document(text: &str) -> Result<Value, DependabotError> {
    if is_blank_document(text) {
        return Ok(Value::Null);
    }
    serde_yaml::from_str(text).map_err(|e| DependabotError::Parse {
        message: e.to_string(),
    })
}

fn is_blank_document(text: &str) -> bool {
    text.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"version: 2
updates:
  - package-ecosystem: "npm"
    directory: "/"
    schedule:
      interval: "daily"
  - package-ecosystem: "cargo"
    directory: "/"
    schedule:
      interval: "weekly"
"#;

    #[test]
    fn test_parse_valid_config() {
        let config = DependabotConfig::parse(VALID).unwrap();
        assert_eq!(config.version, Some(2));
        assert_eq!(config.updates.len(), 2);
        assert_eq!(config.updates[0].package_ecosystem.as_deref(), Some("npm"));
        assert_eq!(config.updates[1].directory.as_deref(), Some("/"));
    }

    #[test]
    fn test_configured_ecosystems_collapse_duplicates() {
        let text = r#"updates:
  - package-ecosystem: npm
    directory: /frontend
  - package-ecosystem: npm
    directory: /backend
  - package-ecosystem: pip
    directory: /
"#;
        let config = DependabotConfig::parse(text).unwrap();
        let ecosystems: Vec<String> = config.configured_ecosystems().into_iter().collect();
        assert_eq!(ecosystems, vec!["npm", "pip"]);
    }

    #[test]
    fn test_comment_only_document_is_structural_error() {
        let result = DependabotConfig::parse("# Empty configuration");
        assert!(matches!(result, Err(DependabotError::MissingUpdates)));
    }

    #[test]
    fn test_empty_text_is_structural_error() {
        assert!(matches!(
            DependabotConfig::parse(""),
            Err(DependabotError::MissingUpdates)
        ));
    }

    #[test]
    fn test_updates_missing() {
        assert!(matches!(
            DependabotConfig::parse("version: 2\n"),
            Err(DependabotError::MissingUpdates)
        ));
    }

    #[test]
    fn test_updates_not_a_sequence() {
        assert!(matches!(
            DependabotConfig::parse("updates:\n  package-ecosystem: npm\n"),
            Err(DependabotError::MissingUpdates)
        ));
        assert!(matches!(
            DependabotConfig::parse("updates: 5\n"),
            Err(DependabotError::MissingUpdates)
        ));
    }

    #[test]
    fn test_scalar_document_is_structural_error() {
        assert!(matches!(
            DependabotConfig::parse("just a string"),
            Err(DependabotError::MissingUpdates)
        ));
    }

    #[test]
    fn test_empty_updates_sequence_is_valid() {
        let config = DependabotConfig::parse("updates: []\n").unwrap();
        assert!(config.configured_ecosystems().is_empty());
    }

    #[test]
    fn test_malformed_entries_contribute_nothing() {
        let text = r#"updates:
  - "npm"
  - package-ecosystem: 42
  - directory: /
  - package-ecosystem: gomod
"#;
        let config = DependabotConfig::parse(text).unwrap();
        assert_eq!(config.updates.len(), 4);
        let ecosystems: Vec<String> = config.configured_ecosystems().into_iter().collect();
        assert_eq!(ecosystems, vec!["gomod"]);
    }

    #[test]
    fn test_syntax_error_is_parse_error() {
        let result = DependabotConfig::parse("updates: [\n  - package-ecosystem: npm");
        assert!(matches!(result, Err(DependabotError::Parse { .. })));
    }
}
