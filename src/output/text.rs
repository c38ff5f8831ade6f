//! Text output formatter for human-readable display

use crate::checker::CheckReport;
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    fn write_info_line(&self, line: &str, writer: &mut dyn Write) -> std::io::Result<()> {
        if !self.color {
            return writeln!(writer, "{}", line);
        }
        if let Some(rest) = line.strip_prefix("- ") {
            match rest.split_once(": ") {
                Some((ecosystem, languages)) => {
                    writeln!(writer, "- {}: {}", ecosystem.cyan().bold(), languages)
                }
                None => writeln!(writer, "{}", line),
            }
        } else if line.starts_with("All supported") {
            writeln!(writer, "{}", line.green())
        } else {
            writeln!(writer, "{}", line)
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &CheckReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity != Verbosity::Quiet {
            for line in report.info_lines() {
                self.write_info_line(&line, writer)?;
            }
        }

        if let Some(message) = report.failure_message() {
            if self.color {
                writeln!(writer, "{}", message.red().bold())?;
            } else {
                writeln!(writer, "{}", message)?;
            }
        }
        Ok(())
    }
}
