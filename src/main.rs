//! depcover - Dependabot ecosystem coverage check
//!
//! Lists the languages of a GitHub repository, maps them to Dependabot
//! ecosystems and fails when `.github/dependabot.yml` leaves one out.

use clap::Parser;
use depcover::checker::{CheckTarget, Checker};
use depcover::cli::CliArgs;
use depcover::ecosystem::EcosystemResolver;
use depcover::error::AppError;
use depcover::github::{GitHubAdapter, HttpClient};
use depcover::output::{create_formatter, OutputConfig, OutputFormat};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.log_filter());

    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Resolve the check target and build the GitHub adapter
fn setup(args: &CliArgs) -> Result<(CheckTarget, GitHubAdapter), AppError> {
    let target = args.target()?;
    let client = HttpClient::with_config(&args.api_url, args.token(), args.timeout)?;
    Ok((target, GitHubAdapter::new(client)))
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let (target, adapter) = setup(&args)?;

    let checker = Checker::new(&adapter, EcosystemResolver::default());
    let show_progress = !args.quiet && !args.json && io::stderr().is_terminal();
    let report = checker.run_with_progress(&target, show_progress).await;

    let mut output_config = OutputConfig::from_cli(args.json, args.annotate, args.quiet);
    output_config.color = output_config.format == OutputFormat::Text && io::stdout().is_terminal();
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    if report.passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
