//! npm registry adapter
//!
//! Fetches package metadata from the npm registry.
//! API endpoint: https://registry.npmjs.org/{package}

use crate::error::RegistryError;
use crate::registry::{HttpClient, Registry, RegistryMetadata};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::Deserialize;
use std::collections::HashMap;

/// Public npm registry base URL
pub const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Registry name used in error messages
const REGISTRY_NAME: &str = "npm";

/// npm registry adapter
pub struct NpmRegistry {
    client: HttpClient,
    base_url: String,
}

/// npm package metadata response
#[derive(Debug, Deserialize)]
struct NpmPackageResponse {
    /// Distribution tags, of which only "latest" matters here
    #[serde(rename = "dist-tags")]
    dist_tags: DistTags,
    /// Per-version manifest entries
    versions: HashMap<String, VersionEntry>,
    /// Publish timestamps keyed by version
    #[serde(default)]
    time: HashMap<String, String>,
    /// Source repository, in any of the forms npm allows
    #[serde(default)]
    repository: Option<Repository>,
}

#[derive(Debug, Deserialize)]
struct DistTags {
    latest: String,
}

#[derive(Debug, Deserialize)]
struct VersionEntry {
    /// Changelog URL some packages declare per version
    #[serde(default)]
    changelog: Option<String>,
}

/// npm repository metadata, either shorthand or expanded form
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Repository {
    Url(String),
    Detailed { url: Option<String> },
    /// Anything else (old packages occasionally carry arrays here)
    Other(IgnoredAny),
}

impl Repository {
    fn url(&self) -> Option<&str> {
        match self {
            Repository::Url(url) => Some(url),
            Repository::Detailed { url } => url.as_deref(),
            Repository::Other(_) => None,
        }
    }
}

impl NpmRegistry {
    /// Create an adapter against the public npm registry
    pub fn new(client: HttpClient) -> Self {
        Self::with_base_url(client, NPM_REGISTRY_URL)
    }

    /// Create an adapter against a custom registry base URL
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the URL for a package
    ///
    /// Scoped packages URL-encode the slash: @types/node -> @types%2Fnode
    fn build_url(&self, package: &str) -> String {
        format!("{}/{}", self.base_url, package.replace('/', "%2F"))
    }
}

#[async_trait]
impl Registry for NpmRegistry {
    async fn fetch_metadata(&self, package: &str) -> Result<RegistryMetadata, RegistryError> {
        let url = self.build_url(package);
        let response: NpmPackageResponse =
            self.client.get_json(&url, package, REGISTRY_NAME).await?;

        let latest = response.dist_tags.latest;
        let changelog_url = response
            .versions
            .get(&latest)
            .and_then(|entry| entry.changelog.clone());

        let mut publish_times = HashMap::new();
        for (version, time_str) in &response.time {
            if let Ok(published) = time_str.parse::<DateTime<Utc>>() {
                publish_times.insert(version.clone(), published);
            }
        }

        let repository_url = response
            .repository
            .as_ref()
            .and_then(|r| r.url())
            .map(String::from);

        Ok(RegistryMetadata {
            name: package.to_string(),
            versions: response.versions.into_keys().collect(),
            latest,
            publish_times,
            repository_url,
            changelog_url,
        })
    }
}
