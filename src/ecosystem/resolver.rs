//! Resolve repository languages to the Dependabot ecosystems they require

use crate::ecosystem::{EcosystemCatalog, EcosystemLanguageMapping};
use std::collections::HashSet;
use tracing::debug;

/// Maps a repository's language list onto a catalog
#[derive(Debug, Clone, Default)]
pub struct EcosystemResolver {
    catalog: EcosystemCatalog,
}

impl EcosystemResolver {
    /// Create a resolver over the given catalog
    pub fn new(catalog: EcosystemCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this resolver matches against
    pub fn catalog(&self) -> &EcosystemCatalog {
        &self.catalog
    }

    /// Compute the ecosystems required by `repo_languages`
    ///
    /// Ordering follows the catalog for both ecosystems and their languages,
    /// never the input. Duplicates and unknown languages have no effect.
    pub fn resolve<S: AsRef<str>>(&self, repo_languages: &[S]) -> EcosystemLanguageMapping {
        debug!("mapping Dependabot ecosystems to repository languages");
        let present: HashSet<&str> = repo_languages.iter().map(AsRef::as_ref).collect();
        let mut mapping = EcosystemLanguageMapping::new();

        for entry in self.catalog.entries() {
            let matched: Vec<String> = entry
                .languages
                .iter()
                .filter(|lang| present.contains(lang.as_str()))
                .cloned()
                .collect();

            if matched.is_empty() {
                continue;
            }
            debug!(
                ecosystem = %entry.ecosystem,
                languages = %matched.join(", "),
                "ecosystem matched"
            );
            mapping.push(entry.ecosystem.clone(), matched);
        }

        mapping
    }
}
