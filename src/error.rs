//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ManifestError: Issues with manifest file parsing
//! - RegistryError: Issues with package registry communication
//! - ChangelogError: Issues with release note retrieval
//! - VersionError: Issues with declared version constraints

use std::path::PathBuf;
use thiserror::Error;

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Manifest file not found
    #[error("manifest file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest content is not valid package.json
    #[error("failed to parse {path}: {message}")]
    Malformed { path: PathBuf, message: String },
}

/// Errors related to package registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Package not found in registry
    #[error("package '{package}' not found in {registry} registry")]
    PackageNotFound { package: String, registry: String },

    /// Network request failed
    #[error("failed to fetch package '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// Invalid response from registry
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{package}' from {registry}")]
    Timeout { package: String, registry: String },
}

/// Errors related to release note retrieval
#[derive(Error, Debug)]
pub enum ChangelogError {
    /// Repository URL does not point at a supported host
    #[error("cannot derive a repository id from '{url}'")]
    UnparseableRepositoryUrl { url: String },

    /// Fetching a release note candidate failed
    #[error("failed to fetch release notes from {url}: {message}")]
    FetchFailed { url: String, message: String },
}

/// Errors related to declared version constraints
#[derive(Error, Debug)]
pub enum VersionError {
    /// Constraint cannot be reduced to a concrete semver version
    #[error("invalid version '{value}': {message}")]
    Invalid { value: String, message: String },
}

impl ManifestError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Malformed error
    pub fn malformed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::Malformed {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::PackageNotFound {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
            registry: registry.into(),
        }
    }
}

impl ChangelogError {
    /// Creates a new UnparseableRepositoryUrl error
    pub fn unparseable_repository_url(url: impl Into<String>) -> Self {
        ChangelogError::UnparseableRepositoryUrl { url: url.into() }
    }

    /// Creates a new FetchFailed error
    pub fn fetch_failed(url: impl Into<String>, message: impl Into<String>) -> Self {
        ChangelogError::FetchFailed {
            url: url.into(),
            message: message.into(),
        }
    }
}

impl VersionError {
    /// Creates a new Invalid error
    pub fn invalid(value: impl Into<String>, message: impl Into<String>) -> Self {
        VersionError::Invalid {
            value: value.into(),
            message: message.into(),
        }
    }
}
