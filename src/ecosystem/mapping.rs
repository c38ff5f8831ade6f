//! Ecosystem → matched-language mapping for a single repository

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered mapping from ecosystem to the repository languages that require it
///
/// Every ecosystem present maps to a non-empty list; ecosystems with no
/// matching language are never inserted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EcosystemLanguageMapping {
    entries: Vec<(String, Vec<String>)>,
}

impl EcosystemLanguageMapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an ecosystem with its matched languages
    ///
    /// Empty language lists are dropped so the mapping never carries an
    /// ecosystem without a reason to require it.
    pub(crate) fn push(&mut self, ecosystem: impl Into<String>, languages: Vec<String>) {
        if languages.is_empty() {
            return;
        }
        self.entries.push((ecosystem.into(), languages));
    }

    /// Iterate `(ecosystem, languages)` pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(ecosystem, languages)| (ecosystem.as_str(), languages.as_slice()))
    }

    /// Ecosystems that must be configured, in catalog order
    pub fn required_ecosystems(&self) -> Vec<String> {
        self.entries.iter().map(|(e, _)| e.clone()).collect()
    }

    /// Matched languages for an ecosystem
    pub fn languages(&self, ecosystem: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(e, _)| e == ecosystem)
            .map(|(_, langs)| langs.as_slice())
    }

    pub fn contains(&self, ecosystem: &str) -> bool {
        self.entries.iter().any(|(e, _)| e == ecosystem)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for EcosystemLanguageMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (ecosystem, languages) in &self.entries {
            map.serialize_entry(ecosystem, languages)?;
        }
        map.end()
    }
}
