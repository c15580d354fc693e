//! Manifest reading
//!
//! This module provides:
//! - package.json parsing into ordered dependency declarations
//! - The read entry point that distinguishes missing, unreadable, and
//!   malformed manifests

mod package_json;

pub use package_json::parse_package_json;

use std::fs;
use std::path::Path;

use crate::domain::DependencyDeclaration;
use crate::error::ManifestError;

/// Reads and parses a package.json manifest
pub fn read_manifest(path: &Path) -> Result<Vec<DependencyDeclaration>, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::not_found(path));
    }

    let content = fs::read_to_string(path).map_err(|e| ManifestError::read_error(path, e))?;
    parse_package_json(path, &content)
}
