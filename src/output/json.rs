//! JSON output formatter for machine processing
//!
//! Serializes the run report as-is: verdicts are tagged by `status` and
//! optional fields are omitted when absent, so the schema matches the
//! domain types directly.

use crate::domain::{DependencyVerdict, RunSummary};
use crate::output::{OutputFormatter, Verbosity};
use crate::pipeline::RunReport;
use std::io::Write;

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    /// Verbosity level affects detail in output
    verbosity: Verbosity,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &RunReport, writer: &mut dyn Write) -> std::io::Result<()> {
        // Quiet mode drops the per-dependency verdicts
        if self.verbosity == Verbosity::Quiet {
            return self.format_summary(&report.summary, writer);
        }

        let json = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)?;

        Ok(())
    }

    fn format_summary(&self, summary: &RunSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(summary).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)?;

        Ok(())
    }

    fn format_verdict(
        &self,
        verdict: &DependencyVerdict,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(verdict).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)?;

        Ok(())
    }
}
