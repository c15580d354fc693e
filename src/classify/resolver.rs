//! Baseline resolution and pending version windows

use crate::error::VersionError;
use semver::Version;

/// Relationship between the declared baseline and the latest release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateCheck {
    /// Baseline matches or exceeds the latest release
    UpToDate,
    /// A newer release exists
    Behind,
}

/// Reduces a declared constraint to a concrete baseline version
///
/// Strips at most one leading caret or tilde operator, then an optional
/// leading 'v', and parses the rest as semver. Ranges, wildcards, and
/// tags like "latest" are rejected.
pub fn baseline_version(constraint: &str) -> Result<Version, VersionError> {
    let trimmed = constraint.trim();
    let stripped = trimmed.strip_prefix(['^', '~']).unwrap_or(trimmed);
    let stripped = stripped.strip_prefix(['v', 'V']).unwrap_or(stripped);
    Version::parse(stripped).map_err(|e| VersionError::invalid(constraint, e.to_string()))
}

/// Compares the baseline against the latest published version
///
/// Behind only when latest is strictly newer. A baseline ahead of the
/// registry (e.g. a pre-release installed from a tag) counts as up to date.
pub fn check_update(baseline: &Version, latest: &Version) -> UpdateCheck {
    if latest > baseline {
        UpdateCheck::Behind
    } else {
        UpdateCheck::UpToDate
    }
}

/// The versions a consumer moves through when updating
///
/// Holds every published version strictly newer than the baseline and no
/// newer than the latest release, sorted ascending by semver. Version
/// strings are kept exactly as published so release note headings can be
/// matched verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionWindow {
    versions: Vec<String>,
}

impl VersionWindow {
    /// Computes the window of pending versions between baseline and latest
    ///
    /// Versions that do not parse as semver are ignored.
    pub fn compute(available: &[String], baseline: &Version, latest: &Version) -> Self {
        let mut pending: Vec<(Version, String)> = available
            .iter()
            .filter_map(|raw| Version::parse(raw).ok().map(|parsed| (parsed, raw.clone())))
            .filter(|(parsed, _)| parsed > baseline && parsed <= latest)
            .collect();
        pending.sort_by(|(a, _), (b, _)| a.cmp(b));
        Self {
            versions: pending.into_iter().map(|(_, raw)| raw).collect(),
        }
    }

    /// Returns true if the given version string is one of the pending versions
    pub fn contains(&self, version: &str) -> bool {
        self.versions.iter().any(|v| v == version)
    }

    /// Returns the pending versions in ascending order
    pub fn versions(&self) -> &[String] {
        &self.versions
    }

    /// Returns true if no versions fall inside the window
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Returns the number of pending versions
    pub fn len(&self) -> usize {
        self.versions.len()
    }
}
