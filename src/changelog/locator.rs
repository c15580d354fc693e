//! Release note retrieval
//!
//! Finds the best available release notes for a package. Candidates are
//! tried in order: a changelog URL declared in the registry metadata, then
//! CHANGELOG.md from the package's GitHub repository, then README.md. An
//! unreachable candidate falls through to the next one.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use tracing::debug;

use crate::domain::NoteProvenance;
use crate::error::ChangelogError;
use crate::registry::{HttpClient, RegistryMetadata};

/// Host serving raw repository files
const RAW_CONTENT_BASE: &str = "https://raw.githubusercontent.com";

/// Branch raw files are fetched from
const RAW_CONTENT_BRANCH: &str = "master";

// Repository id is whatever follows github.com/, minus a trailing .git
static GITHUB_REPOSITORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"github\.com/(.+?)(?:\.git)?$").unwrap());

/// Release note text together with where it came from
#[derive(Debug, Clone)]
pub struct ReleaseNoteSource {
    /// The raw note text
    pub text: String,
    /// Which candidate produced the text
    pub provenance: NoteProvenance,
    /// URL the text was fetched from
    pub url: String,
}

/// Locates release notes for a package
#[async_trait]
pub trait NoteLocator: Send + Sync {
    /// Returns the first retrievable release note candidate, if any
    async fn locate(&self, metadata: &RegistryMetadata) -> Option<ReleaseNoteSource>;
}

/// Extracts the "owner/name" id from a repository URL
///
/// Only GitHub URLs are supported. Everything after the host is taken
/// verbatim apart from a trailing ".git", so prefixes like "git+https://"
/// need no special handling.
pub fn repository_id(url: &str) -> Result<String, ChangelogError> {
    GITHUB_REPOSITORY_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ChangelogError::unparseable_repository_url(url))
}

/// Note locator backed by HTTP fetches of the candidate chain
pub struct ReleaseNoteLocator {
    client: HttpClient,
    raw_base: String,
}

impl ReleaseNoteLocator {
    /// Creates a locator fetching raw repository files from GitHub
    pub fn new(client: HttpClient) -> Self {
        Self::with_raw_base(client, RAW_CONTENT_BASE)
    }

    /// Creates a locator with a custom raw content host (for testing)
    pub fn with_raw_base(client: HttpClient, raw_base: impl Into<String>) -> Self {
        Self {
            client,
            raw_base: raw_base.into(),
        }
    }

    fn raw_url(&self, repository: &str, file: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.raw_base, repository, RAW_CONTENT_BRANCH, file
        )
    }

    async fn fetch(&self, url: &str, package: &str) -> Result<String, ChangelogError> {
        self.client
            .get_text(url, package, "GitHub")
            .await
            .map_err(|e| ChangelogError::fetch_failed(url, e.to_string()))
    }
}

#[async_trait]
impl NoteLocator for ReleaseNoteLocator {
    async fn locate(&self, metadata: &RegistryMetadata) -> Option<ReleaseNoteSource> {
        let package = &metadata.name;

        if let Some(declared) = &metadata.changelog_url {
            match self.fetch(declared, package).await {
                Ok(text) => {
                    return Some(ReleaseNoteSource {
                        text,
                        provenance: NoteProvenance::DeclaredChangelog,
                        url: declared.clone(),
                    });
                }
                Err(e) => {
                    debug!("declared changelog unavailable for {}: {}", package, e);
                }
            }
        }

        let repository_url = metadata.repository_url.as_deref()?;
        let repository = match repository_id(repository_url) {
            Ok(repository) => repository,
            Err(e) => {
                debug!("skipping release note lookup for {}: {}", package, e);
                return None;
            }
        };

        for (file, provenance) in [
            ("CHANGELOG.md", NoteProvenance::RepositoryChangelog),
            ("README.md", NoteProvenance::RepositoryReadme),
        ] {
            let url = self.raw_url(&repository, file);
            match self.fetch(&url, package).await {
                Ok(text) => {
                    return Some(ReleaseNoteSource {
                        text,
                        provenance,
                        url,
                    });
                }
                Err(e) => {
                    debug!("{} unavailable for {}: {}", file, package, e);
                }
            }
        }

        None
    }
}
