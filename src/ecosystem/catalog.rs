//! Catalog of Dependabot package ecosystems and the languages they serve

use crate::error::CatalogError;
use std::collections::HashSet;

/// Dependabot ecosystems keyed to the GitHub linguist language names they serve
const DEPENDABOT_ECOSYSTEMS: &[(&str, &[&str])] = &[
    ("npm", &["JavaScript", "TypeScript"]),
    ("pip", &["Python"]),
    ("maven", &["Java"]),
    ("nuget", &["C#", "F#"]),
    ("bundler", &["Ruby"]),
    ("composer", &["PHP"]),
    ("cargo", &["Rust"]),
    ("gomod", &["Go"]),
    ("mix", &["Elixir"]),
    ("gradle", &["Java", "Kotlin"]),
];

/// One ecosystem and the languages it is relevant for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Ecosystem identifier as written in `package-ecosystem`
    pub ecosystem: String,
    /// Languages served by the ecosystem, in catalog order
    pub languages: Vec<String>,
}

/// Ordered, immutable ecosystem → languages table
///
/// Keys are unique and every entry lists at least one language. The table is
/// built once and handed to the resolver; there is no registration API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcosystemCatalog {
    entries: Vec<CatalogEntry>,
}

impl EcosystemCatalog {
    /// Build a catalog from explicit entries, checking its invariants
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.ecosystem.as_str()) {
                return Err(CatalogError::DuplicateEcosystem {
                    ecosystem: entry.ecosystem.clone(),
                });
            }
            if entry.languages.is_empty() {
                return Err(CatalogError::EmptyLanguages {
                    ecosystem: entry.ecosystem.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Build a catalog from a static table
    pub fn from_table(table: &[(&str, &[&str])]) -> Result<Self, CatalogError> {
        let entries = table
            .iter()
            .map(|(ecosystem, languages)| CatalogEntry {
                ecosystem: ecosystem.to_string(),
                languages: languages.iter().map(|l| l.to_string()).collect(),
            })
            .collect();
        Self::new(entries)
    }

    /// The compiled-in Dependabot catalog
    pub fn dependabot() -> Self {
        let entries = DEPENDABOT_ECOSYSTEMS
            .iter()
            .map(|(ecosystem, languages)| CatalogEntry {
                ecosystem: ecosystem.to_string(),
                languages: languages.iter().map(|l| l.to_string()).collect(),
            })
            .collect();
        Self { entries }
    }

    /// Entries in catalog order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Whether the catalog knows the given ecosystem
    pub fn contains(&self, ecosystem: &str) -> bool {
        self.entries.iter().any(|e| e.ecosystem == ecosystem)
    }

    /// Languages served by an ecosystem
    pub fn languages_for(&self, ecosystem: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.ecosystem == ecosystem)
            .map(|e| e.languages.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EcosystemCatalog {
    fn default() -> Self {
        Self::dependabot()
    }
}
