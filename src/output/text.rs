//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Colored per-dependency report blocks in manifest order
//! - Semantic version change type indication (major/minor/patch)
//! - Breaking-change excerpts and staleness warnings
//! - Trailing summary with the four run counters

use crate::domain::{DependencyVerdict, RunSummary};
use crate::output::{OutputFormatter, Verbosity};
use crate::pipeline::RunReport;
use colored::Colorize;
use semver::Version;
use std::io::Write;

/// Semantic version change type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChangeType {
    /// Major version change (breaking)
    Major,
    /// Minor version change (features)
    Minor,
    /// Patch version change (fixes)
    Patch,
    /// Unknown or unparseable
    Unknown,
}

impl VersionChangeType {
    /// Determine the change type between two versions
    pub fn from_versions(old: &str, new: &str) -> Self {
        let parse = |value: &str| Version::parse(value.strip_prefix(['v', 'V']).unwrap_or(value)).ok();

        match (parse(old), parse(new)) {
            (Some(old), Some(new)) => {
                if new.major != old.major {
                    VersionChangeType::Major
                } else if new.minor != old.minor {
                    VersionChangeType::Minor
                } else {
                    VersionChangeType::Patch
                }
            }
            _ => VersionChangeType::Unknown,
        }
    }

    /// Get the display label with color
    pub fn colored_label(&self) -> String {
        match self {
            VersionChangeType::Major => "major".red().bold().to_string(),
            VersionChangeType::Minor => "minor".yellow().to_string(),
            VersionChangeType::Patch => "patch".green().to_string(),
            VersionChangeType::Unknown => "?".dimmed().to_string(),
        }
    }

    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            VersionChangeType::Major => "major",
            VersionChangeType::Minor => "minor",
            VersionChangeType::Patch => "patch",
            VersionChangeType::Unknown => "?",
        }
    }
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Staleness threshold shown in the summary, in months
    stale_after_months: f64,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity, stale_after_months: f64) -> Self {
        Self {
            verbosity,
            stale_after_months,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, stale_after_months: f64, color: bool) -> Self {
        Self {
            verbosity,
            stale_after_months,
            color,
        }
    }

    /// Write the `current -> latest` line with a change-type label
    fn write_update_line(
        &self,
        current: &str,
        latest: &str,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let change_type = VersionChangeType::from_versions(current, latest);

        if self.color {
            writeln!(
                writer,
                "  {} [{}]",
                format!("Update available: {} -> {}", current, latest).yellow(),
                change_type.colored_label()
            )
        } else {
            writeln!(
                writer,
                "  Update available: {} -> {} [{}]",
                current,
                latest,
                change_type.label()
            )
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &RunReport, writer: &mut dyn Write) -> std::io::Result<()> {
        // In quiet mode, only show summary
        if self.verbosity == Verbosity::Quiet {
            return self.format_summary(&report.summary, writer);
        }

        for verdict in &report.verdicts {
            self.format_verdict(verdict, writer)?;
            writeln!(writer)?;
        }

        self.format_summary(&report.summary, writer)
    }

    fn format_summary(&self, summary: &RunSummary, writer: &mut dyn Write) -> std::io::Result<()> {
        let stale_line = format!(
            "Outdated packages (>{} months): {}",
            self.stale_after_months, summary.stale
        );

        if self.color {
            writeln!(writer, "{}", "----- Analysis Summary -----".cyan())?;
            writeln!(
                writer,
                "{}",
                format!("Packages up to date: {}", summary.up_to_date).green()
            )?;
            writeln!(
                writer,
                "{}",
                format!("Packages needing update: {}", summary.update_available).yellow()
            )?;
            writeln!(writer, "{}", stale_line.red())?;
            writeln!(
                writer,
                "{}",
                format!("Errors encountered: {}", summary.errors).red()
            )?;
            writeln!(writer, "{}", "----------------------------".cyan())?;
        } else {
            writeln!(writer, "----- Analysis Summary -----")?;
            writeln!(writer, "Packages up to date: {}", summary.up_to_date)?;
            writeln!(
                writer,
                "Packages needing update: {}",
                summary.update_available
            )?;
            writeln!(writer, "{}", stale_line)?;
            writeln!(writer, "Errors encountered: {}", summary.errors)?;
            writeln!(writer, "----------------------------")?;
        }

        Ok(())
    }

    fn format_verdict(
        &self,
        verdict: &DependencyVerdict,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        if self.color {
            writeln!(writer, "{}", verdict.name().bold())?;
        } else {
            writeln!(writer, "{}", verdict.name())?;
        }

        match verdict {
            DependencyVerdict::UpToDate { .. } => {
                if self.color {
                    writeln!(writer, "  {}", "Already up to date".green())?;
                } else {
                    writeln!(writer, "  Already up to date")?;
                }
            }
            DependencyVerdict::UpdateAvailable {
                current_version,
                latest_version,
                breaking_risk,
                excerpt,
                note_source,
                months_since_release,
                ..
            } => {
                self.write_update_line(current_version, latest_version, writer)?;

                if self.verbosity == Verbosity::Verbose {
                    if let Some(source) = note_source {
                        let line = format!("Release notes: {}", source);
                        if self.color {
                            writeln!(writer, "  {}", line.dimmed())?;
                        } else {
                            writeln!(writer, "  {}", line)?;
                        }
                    }
                    if let Some(months) = months_since_release {
                        let line = format!("Last release: {:.1} months ago", months);
                        if self.color {
                            writeln!(writer, "  {}", line.dimmed())?;
                        } else {
                            writeln!(writer, "  {}", line)?;
                        }
                    }
                }

                if *breaking_risk {
                    if self.color {
                        writeln!(
                            writer,
                            "  {}",
                            "Breaking changes detected. Please review the following changes:"
                                .magenta()
                        )?;
                        for line in excerpt.lines() {
                            writeln!(writer, "    {}", line.magenta())?;
                        }
                        writeln!(
                            writer,
                            "  {}",
                            "Recommendation: Test thoroughly before updating".magenta()
                        )?;
                    } else {
                        writeln!(
                            writer,
                            "  Breaking changes detected. Please review the following changes:"
                        )?;
                        for line in excerpt.lines() {
                            writeln!(writer, "    {}", line)?;
                        }
                        writeln!(writer, "  Recommendation: Test thoroughly before updating")?;
                    }
                } else if note_source.is_none() {
                    // No release notes found anywhere, the excerpt is a placeholder
                    if self.color {
                        writeln!(writer, "  {}", excerpt.yellow())?;
                    } else {
                        writeln!(writer, "  {}", excerpt)?;
                    }
                } else if self.color {
                    writeln!(
                        writer,
                        "  {}",
                        "No breaking changes detected. You can update directly.".green()
                    )?;
                } else {
                    writeln!(
                        writer,
                        "  No breaking changes detected. You can update directly."
                    )?;
                }
            }
            DependencyVerdict::Stale {
                current_version,
                latest_version,
                months_since_release,
                ..
            } => {
                self.write_update_line(current_version, latest_version, writer)?;

                let warning = format!("Warning: Last updated {:.1} months ago", months_since_release);
                if self.color {
                    writeln!(writer, "  {}", warning.red())?;
                    writeln!(
                        writer,
                        "  {}",
                        "Consider finding an alternative or checking the project's status".red()
                    )?;
                } else {
                    writeln!(writer, "  {}", warning)?;
                    writeln!(
                        writer,
                        "  Consider finding an alternative or checking the project's status"
                    )?;
                }
            }
            DependencyVerdict::Error { name, message } => {
                let line = format!("Error analyzing {}: {}", name, message);
                if self.color {
                    writeln!(writer, "  {}", line.red())?;
                } else {
                    writeln!(writer, "  {}", line)?;
                }
            }
        }

        Ok(())
    }
}
