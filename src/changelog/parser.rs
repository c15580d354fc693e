//! Release note parsing
//!
//! Scans free-form changelog or README text for breaking change markers
//! and for the sections covering the versions an update would pull in.

use std::sync::LazyLock;

use regex::Regex;

use crate::classify::VersionWindow;

// Markdown heading opening a version section: "## 1.2.3", "# v1.2.3 (2024-05-01)"
static VERSION_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#+\s*(v?\d+\.\d+\.\d+)").unwrap());

/// Case-insensitive marker that flags an update as risky
const BREAKING_MARKER: &str = "breaking change";

/// What the release notes say about a pending update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogVerdict {
    /// Whether any line anywhere in the document mentions breaking changes
    pub has_breaking_changes: bool,
    /// Lines belonging to version sections inside the pending window,
    /// heading lines included, in document order
    pub relevant_content: String,
}

/// Scans release notes line by line
///
/// The breaking change check is document-global: maintainers often list
/// breaking changes outside the section of the version that introduced
/// them, so a mention anywhere flags the update. Content extraction is
/// window-scoped: lines are kept while the most recent version heading
/// names a version inside the pending window. Text before the first
/// heading, and sections for versions outside the window, are dropped.
pub fn parse_release_notes(text: &str, window: &VersionWindow) -> ChangelogVerdict {
    let mut has_breaking_changes = false;
    let mut relevant_lines: Vec<&str> = Vec::new();
    let mut in_window = false;

    for line in text.lines() {
        if line.to_lowercase().contains(BREAKING_MARKER) {
            has_breaking_changes = true;
        }

        if let Some(caps) = VERSION_HEADING_RE.captures(line) {
            let heading = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
            let version = heading.strip_prefix(['v', 'V']).unwrap_or(heading);
            in_window = window.contains(version);
        }

        if in_window {
            relevant_lines.push(line);
        }
    }

    ChangelogVerdict {
        has_breaking_changes,
        relevant_content: relevant_lines.join("\n"),
    }
}
