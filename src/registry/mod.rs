//! Registry access for package metadata
//!
//! This module provides:
//! - HTTP client shared foundation
//! - The registry abstraction used by classification
//! - npm registry adapter

mod client;
mod npm;

pub use client::HttpClient;
pub use npm::{NpmRegistry, NPM_REGISTRY_URL};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::error::RegistryError;

/// Everything analysis needs to know about a published package
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryMetadata {
    /// Package name as queried
    pub name: String,
    /// Every published version, in no particular order
    pub versions: Vec<String>,
    /// Version the "latest" dist-tag points at
    pub latest: String,
    /// Publish timestamps keyed by version
    ///
    /// May be missing entries; consumers must treat an absent timestamp
    /// as an unknown age.
    pub publish_times: HashMap<String, DateTime<Utc>>,
    /// Source repository URL, if declared
    pub repository_url: Option<String>,
    /// Changelog URL declared by the latest version, if any
    pub changelog_url: Option<String>,
}

/// Trait for package registries
#[async_trait]
pub trait Registry: Send + Sync {
    /// Fetch analysis metadata for a package
    async fn fetch_metadata(&self, package: &str) -> Result<RegistryMetadata, RegistryError>;
}
