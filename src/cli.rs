//! CLI argument parsing module for depcover
//!
//! Every input also reads from the environment variables a GitHub Actions
//! runner provides, so the binary runs as a workflow step without flags.

use crate::checker::CheckTarget;
use crate::error::ConfigError;
use crate::github::{RepoRef, DEFAULT_API_URL};
use clap::Parser;
use std::time::Duration;

/// Parse a timeout given in whole seconds
fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: u64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid timeout in seconds: {}", s))?;
    if secs == 0 {
        return Err("timeout must be at least 1 second".to_string());
    }
    Ok(Duration::from_secs(secs))
}

/// Check that Dependabot covers every ecosystem a repository uses
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depcover",
    version,
    about = "Check that dependabot.yml covers every ecosystem a repository uses"
)]
pub struct CliArgs {
    /// Repository to check, as owner/repo
    #[arg(long, env = "GITHUB_REPOSITORY")]
    pub repository: String,

    /// Git reference (branch, tag or commit) to read dependabot.yml from
    #[arg(long = "ref", env = "GITHUB_REF")]
    pub git_ref: Option<String>,

    /// GitHub API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// HTTP timeout in seconds
    #[arg(long, value_parser = parse_timeout, default_value = "30")]
    pub timeout: Duration,

    // Output options
    /// Output the report in JSON format
    #[arg(long)]
    pub json: bool,

    /// Emit the failure as a GitHub Actions error annotation
    #[arg(long)]
    pub annotate: bool,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Print only the failure report
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Repository and reference to check
    pub fn target(&self) -> Result<CheckTarget, ConfigError> {
        let repo: RepoRef = self.repository.parse()?;
        let git_ref = self
            .git_ref
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string);
        Ok(CheckTarget::new(repo, git_ref))
    }

    /// Token, ignoring an empty value
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// Default log filter for the chosen verbosity
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "depcover=debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["depcover", "--repository", "octo/hello", "--api-url", DEFAULT_API_URL];
        argv.extend_from_slice(extra);
        CliArgs::parse_from(argv)
    }

    #[test]
    fn test_default_args() {
        let args = parse(&[]);
        assert_eq!(args.repository, "octo/hello");
        assert_eq!(args.api_url, "https://api.github.com");
        assert_eq!(args.timeout, Duration::from_secs(30));
        assert!(!args.json);
        assert!(!args.annotate);
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_target() {
        let args = parse(&["--ref", "refs/heads/main"]);
        let target = args.target().unwrap();
        assert_eq!(target.repo, RepoRef::new("octo", "hello"));
        assert_eq!(target.git_ref.as_deref(), Some("refs/heads/main"));
    }

    #[test]
    fn test_blank_ref_is_none() {
        let args = parse(&["--ref", "  "]);
        assert!(args.target().unwrap().git_ref.is_none());
    }

    #[test]
    fn test_invalid_repository() {
        let args = CliArgs::parse_from(["depcover", "--repository", "nope"]);
        assert!(matches!(
            args.target(),
            Err(ConfigError::InvalidRepository { .. })
        ));
    }

    #[test]
    fn test_empty_token_ignored() {
        let args = parse(&["--token", ""]);
        assert!(args.token().is_none());
        let args = parse(&["--token", "ghp_x"]);
        assert_eq!(args.token(), Some("ghp_x"));
    }

    #[test]
    fn test_timeout_flag() {
        let args = parse(&["--timeout", "5"]);
        assert_eq!(args.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_parse_timeout_invalid() {
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("abc").is_err());
        assert!(parse_timeout("-1").is_err());
    }

    #[test]
    fn test_output_flags() {
        let args = parse(&["--json", "--annotate", "-q", "--verbose"]);
        assert!(args.json);
        assert!(args.annotate);
        assert!(args.quiet);
        assert!(args.verbose);
        assert_eq!(args.log_filter(), "depcover=debug");
    }

    #[test]
    fn test_log_filter_default() {
        assert_eq!(parse(&[]).log_filter(), "warn");
    }
}
