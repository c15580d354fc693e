//! package.json parser
//!
//! Handles:
//! - dependencies
//! - devDependencies
//!
//! Declaration order is preserved, with devDependencies appended after
//! dependencies. A package declared in both groups keeps its original
//! position but takes the devDependencies constraint.

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

use crate::domain::DependencyDeclaration;
use crate::error::ManifestError;

#[derive(Debug, Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: IndexMap<String, String>,
    #[serde(rename = "devDependencies", default)]
    dev_dependencies: IndexMap<String, String>,
}

/// Parses package.json content into an ordered list of declarations
///
/// Constraint values must be strings; anything else makes the manifest
/// malformed. Other dependency groups (peer, optional) are ignored.
pub fn parse_package_json(
    path: &Path,
    content: &str,
) -> Result<Vec<DependencyDeclaration>, ManifestError> {
    let manifest: PackageJson =
        serde_json::from_str(content).map_err(|e| ManifestError::malformed(path, e.to_string()))?;

    let mut merged = manifest.dependencies;
    for (name, constraint) in manifest.dev_dependencies {
        merged.insert(name, constraint);
    }

    Ok(merged
        .into_iter()
        .map(|(name, constraint)| DependencyDeclaration::new(name, constraint))
        .collect())
}
