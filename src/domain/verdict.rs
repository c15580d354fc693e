//! Per-dependency analysis verdict types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the release notes for an update came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteProvenance {
    /// Changelog URL declared in the package's registry metadata
    DeclaredChangelog,
    /// CHANGELOG.md fetched from the package's repository
    RepositoryChangelog,
    /// README.md fetched from the package's repository
    RepositoryReadme,
}

impl fmt::Display for NoteProvenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteProvenance::DeclaredChangelog => write!(f, "declared changelog"),
            NoteProvenance::RepositoryChangelog => write!(f, "repository CHANGELOG.md"),
            NoteProvenance::RepositoryReadme => write!(f, "repository README.md"),
        }
    }
}

/// Outcome of analyzing a single dependency
///
/// Exactly one verdict is produced per declared dependency, and each
/// verdict feeds exactly one summary counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DependencyVerdict {
    /// The declared baseline already matches or exceeds the latest release
    UpToDate {
        /// Package name
        name: String,
        /// Baseline version derived from the declared constraint
        current_version: String,
        /// Latest version published to the registry
        latest_version: String,
    },
    /// A newer version exists and the upstream is still maintained
    UpdateAvailable {
        /// Package name
        name: String,
        /// Baseline version derived from the declared constraint
        current_version: String,
        /// Latest version published to the registry
        latest_version: String,
        /// Whether the release notes mention breaking changes
        breaking_risk: bool,
        /// Release note lines relevant to the pending versions, or a
        /// placeholder when no notes could be retrieved
        excerpt: String,
        /// Where the release notes came from, if any were retrieved
        #[serde(skip_serializing_if = "Option::is_none")]
        note_source: Option<NoteProvenance>,
        /// Age of the latest release in 30-day months, when known
        #[serde(skip_serializing_if = "Option::is_none")]
        months_since_release: Option<f64>,
    },
    /// The latest release is older than the staleness threshold
    Stale {
        /// Package name
        name: String,
        /// Baseline version derived from the declared constraint
        current_version: String,
        /// Latest version published to the registry
        latest_version: String,
        /// Age of the latest release in 30-day months
        months_since_release: f64,
    },
    /// Analysis failed for this dependency
    Error {
        /// Package name
        name: String,
        /// Human-readable failure description
        message: String,
    },
}

impl DependencyVerdict {
    /// Creates an UpToDate verdict
    pub fn up_to_date(
        name: impl Into<String>,
        current_version: impl Into<String>,
        latest_version: impl Into<String>,
    ) -> Self {
        DependencyVerdict::UpToDate {
            name: name.into(),
            current_version: current_version.into(),
            latest_version: latest_version.into(),
        }
    }

    /// Creates an UpdateAvailable verdict
    pub fn update_available(
        name: impl Into<String>,
        current_version: impl Into<String>,
        latest_version: impl Into<String>,
        breaking_risk: bool,
        excerpt: impl Into<String>,
    ) -> Self {
        DependencyVerdict::UpdateAvailable {
            name: name.into(),
            current_version: current_version.into(),
            latest_version: latest_version.into(),
            breaking_risk,
            excerpt: excerpt.into(),
            note_source: None,
            months_since_release: None,
        }
    }

    /// Creates a Stale verdict
    pub fn stale(
        name: impl Into<String>,
        current_version: impl Into<String>,
        latest_version: impl Into<String>,
        months_since_release: f64,
    ) -> Self {
        DependencyVerdict::Stale {
            name: name.into(),
            current_version: current_version.into(),
            latest_version: latest_version.into(),
            months_since_release,
        }
    }

    /// Creates an Error verdict
    pub fn error(name: impl Into<String>, message: impl Into<String>) -> Self {
        DependencyVerdict::Error {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Sets the note source on an UpdateAvailable verdict (builder pattern)
    pub fn with_note_source(mut self, source: NoteProvenance) -> Self {
        if let DependencyVerdict::UpdateAvailable { note_source, .. } = &mut self {
            *note_source = Some(source);
        }
        self
    }

    /// Sets the release age on an UpdateAvailable verdict (builder pattern)
    pub fn with_months_since_release(mut self, months: f64) -> Self {
        if let DependencyVerdict::UpdateAvailable {
            months_since_release,
            ..
        } = &mut self
        {
            *months_since_release = Some(months);
        }
        self
    }

    /// Returns the package name
    pub fn name(&self) -> &str {
        match self {
            DependencyVerdict::UpToDate { name, .. } => name,
            DependencyVerdict::UpdateAvailable { name, .. } => name,
            DependencyVerdict::Stale { name, .. } => name,
            DependencyVerdict::Error { name, .. } => name,
        }
    }

    /// Returns true if this is an UpToDate verdict
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, DependencyVerdict::UpToDate { .. })
    }

    /// Returns true if this is an UpdateAvailable verdict
    pub fn is_update_available(&self) -> bool {
        matches!(self, DependencyVerdict::UpdateAvailable { .. })
    }

    /// Returns true if this is a Stale verdict
    pub fn is_stale(&self) -> bool {
        matches!(self, DependencyVerdict::Stale { .. })
    }

    /// Returns true if this is an Error verdict
    pub fn is_error(&self) -> bool {
        matches!(self, DependencyVerdict::Error { .. })
    }

    /// Returns true if an update is available and its notes flag breaking changes
    pub fn has_breaking_risk(&self) -> bool {
        matches!(
            self,
            DependencyVerdict::UpdateAvailable {
                breaking_risk: true,
                ..
            }
        )
    }
}

impl fmt::Display for DependencyVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DependencyVerdict::UpToDate { name, .. } => {
                write!(f, "{}: up to date", name)
            }
            DependencyVerdict::UpdateAvailable {
                name,
                current_version,
                latest_version,
                breaking_risk,
                ..
            } => {
                let risk = if *breaking_risk { " (breaking risk)" } else { "" };
                write!(
                    f,
                    "{}: {} → {}{}",
                    name, current_version, latest_version, risk
                )
            }
            DependencyVerdict::Stale {
                name,
                months_since_release,
                ..
            } => {
                write!(
                    f,
                    "{}: stale ({:.1} months since last release)",
                    name, months_since_release
                )
            }
            DependencyVerdict::Error { name, message } => {
                write!(f, "{}: error ({})", name, message)
            }
        }
    }
}
