//! depcover - Dependabot ecosystem coverage check library
//!
//! This library provides the core functionality for checking that a
//! repository's `.github/dependabot.yml` enables updates for every package
//! ecosystem its languages imply:
//! - Ecosystem catalog and language resolution
//! - dependabot.yml parsing, shape validation and coverage diff
//! - GitHub REST adapter for languages and file contents

pub mod checker;
pub mod cli;
pub mod dependabot;
pub mod ecosystem;
pub mod error;
pub mod github;
pub mod output;
pub mod progress;
