//! Ecosystem catalog and language resolution
//!
//! This module contains:
//! - The fixed Dependabot ecosystem → language catalog
//! - The per-repository ecosystem → matched language mapping
//! - The resolver that turns a language list into required ecosystems

mod catalog;
mod mapping;
mod resolver;

pub use catalog::{CatalogEntry, EcosystemCatalog};
pub use mapping::EcosystemLanguageMapping;
pub use resolver::EcosystemResolver;
