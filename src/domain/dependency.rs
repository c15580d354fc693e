//! Dependency declaration structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single dependency as declared in a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyDeclaration {
    /// Package name
    pub name: String,
    /// Version constraint exactly as written in the manifest (e.g. "^4.17.20")
    pub constraint: String,
}

impl DependencyDeclaration {
    /// Creates a new dependency declaration
    pub fn new(name: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraint: constraint.into(),
        }
    }
}

impl fmt::Display for DependencyDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.constraint)
    }
}
