//! Run summary counters
//!
//! Tracks how many dependencies landed in each verdict category across a
//! whole analysis run.

use super::DependencyVerdict;
use serde::{Deserialize, Serialize};

/// Aggregated counts for a whole analysis run
///
/// Each verdict increments exactly one counter, so the four counts always
/// sum to the number of dependencies analyzed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Dependencies already at their latest version
    pub up_to_date: usize,
    /// Dependencies with a newer version available
    pub update_available: usize,
    /// Dependencies whose upstream looks abandoned
    pub stale: usize,
    /// Dependencies that could not be analyzed
    pub errors: usize,
}

impl RunSummary {
    /// Creates an empty summary
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a summary from a slice of verdicts
    pub fn from_verdicts(verdicts: &[DependencyVerdict]) -> Self {
        let mut summary = Self::new();
        for verdict in verdicts {
            summary.record(verdict);
        }
        summary
    }

    /// Records a verdict into exactly one counter
    pub fn record(&mut self, verdict: &DependencyVerdict) {
        match verdict {
            DependencyVerdict::UpToDate { .. } => self.up_to_date += 1,
            DependencyVerdict::UpdateAvailable { .. } => self.update_available += 1,
            DependencyVerdict::Stale { .. } => self.stale += 1,
            DependencyVerdict::Error { .. } => self.errors += 1,
        }
    }

    /// Returns the total number of dependencies counted
    pub fn total(&self) -> usize {
        self.up_to_date + self.update_available + self.stale + self.errors
    }

    /// Returns true if any dependency failed analysis
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}
