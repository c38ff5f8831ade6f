//! GitHub Actions output formatter
//!
//! Informational lines are written as-is; the failure report becomes an
//! `::error::` workflow command so it shows up as a job annotation.

use crate::checker::CheckReport;
use crate::output::{OutputFormatter, Verbosity};
use std::io::Write;

/// Formatter emitting workflow commands
pub struct ActionsFormatter {
    verbosity: Verbosity,
}

impl ActionsFormatter {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

/// Escape a workflow command message
fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

impl OutputFormatter for ActionsFormatter {
    fn format(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity != Verbosity::Quiet {
            for line in report.info_lines() {
                writeln!(writer, "{}", line)?;
            }
        }
        if let Some(message) = report.failure_message() {
            writeln!(writer, "::error::{}", escape_data(&message))?;
        }
        Ok(())
    }
}
