//! Dependabot configuration handling
//!
//! This module provides:
//! - The dependabot.yml document model and shape check
//! - The validation outcome and its report strings
//! - The configuration validator (fetch → decode → parse → diff)

mod config;
mod outcome;
mod validator;

pub use config::{parse_document, DependabotConfig, UpdateEntry};
pub use outcome::{ValidationOutcome, MISSING_FILE_PREFIX, SUCCESS_MESSAGE};
pub use validator::{diff_ecosystems, validate_document, ConfigurationValidator, ValidationReport};
