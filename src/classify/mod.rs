//! Dependency classification logic
//!
//! This module provides:
//! - Baseline resolution from declared version constraints
//! - Pending version windows between baseline and latest
//! - Release age evaluation against the staleness threshold
//! - The classifier that turns registry metadata into a verdict

mod resolver;
mod staleness;

pub use resolver::{baseline_version, check_update, UpdateCheck, VersionWindow};
pub use staleness::{months_since, Staleness, DEFAULT_STALE_AFTER_MONTHS, SECONDS_PER_MONTH};

use chrono::{DateTime, Utc};
use semver::Version;

use crate::changelog::{parse_release_notes, NoteLocator};
use crate::domain::{DependencyDeclaration, DependencyVerdict};
use crate::registry::Registry;

/// Decides the verdict for a single dependency
///
/// The classifier is pure decision logic: registry access and release note
/// retrieval are injected, which keeps every branch testable with fakes.
pub struct Classifier {
    /// Staleness threshold in 30-day months
    stale_after_months: f64,
    /// Current time for age calculations
    now: DateTime<Utc>,
}

impl Classifier {
    /// Creates a classifier with the given staleness threshold
    pub fn new(stale_after_months: f64) -> Self {
        Self {
            stale_after_months,
            now: Utc::now(),
        }
    }

    /// Creates a classifier with a custom current time (for testing)
    pub fn with_time(stale_after_months: f64, now: DateTime<Utc>) -> Self {
        Self {
            stale_after_months,
            now,
        }
    }

    /// Classifies one declared dependency
    ///
    /// Failures never propagate; every dependency gets a verdict, with
    /// analysis failures folded into [`DependencyVerdict::Error`]. Release
    /// notes are only fetched when an update is actually pending, and a
    /// stale upstream skips the fetch entirely.
    pub async fn classify(
        &self,
        declaration: &DependencyDeclaration,
        registry: &dyn Registry,
        locator: &dyn NoteLocator,
    ) -> DependencyVerdict {
        let name = &declaration.name;

        let metadata = match registry.fetch_metadata(name).await {
            Ok(metadata) => metadata,
            Err(e) => return DependencyVerdict::error(name, e.to_string()),
        };

        let baseline = match baseline_version(&declaration.constraint) {
            Ok(baseline) => baseline,
            Err(e) => return DependencyVerdict::error(name, e.to_string()),
        };

        let latest = match Version::parse(&metadata.latest) {
            Ok(latest) => latest,
            Err(e) => {
                return DependencyVerdict::error(
                    name,
                    format!("invalid latest version '{}': {}", metadata.latest, e),
                )
            }
        };

        if check_update(&baseline, &latest) == UpdateCheck::UpToDate {
            return DependencyVerdict::up_to_date(name, baseline.to_string(), &metadata.latest);
        }

        // Publish time for the latest release may be missing from the
        // metadata; in that case the age is unknown and never counts as stale.
        let staleness = metadata
            .publish_times
            .get(&metadata.latest)
            .map(|published| Staleness::evaluate(*published, self.now, self.stale_after_months));

        if let Some(staleness) = staleness {
            if staleness.is_stale {
                return DependencyVerdict::stale(
                    name,
                    baseline.to_string(),
                    &metadata.latest,
                    staleness.months_since_release,
                );
            }
        }

        let window = VersionWindow::compute(&metadata.versions, &baseline, &latest);

        let verdict = match locator.locate(&metadata).await {
            Some(source) => {
                let notes = parse_release_notes(&source.text, &window);
                DependencyVerdict::update_available(
                    name,
                    baseline.to_string(),
                    &metadata.latest,
                    notes.has_breaking_changes,
                    notes.relevant_content,
                )
                .with_note_source(source.provenance)
            }
            None => DependencyVerdict::update_available(
                name,
                baseline.to_string(),
                &metadata.latest,
                false,
                format!(
                    "Unable to fetch detailed changelog for {} from {} to {}",
                    name, baseline, metadata.latest
                ),
            ),
        };

        match staleness {
            Some(staleness) => verdict.with_months_since_release(staleness.months_since_release),
            None => verdict,
        }
    }
}
