//! Core domain models for depscout
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency declarations read from the manifest
//! - Per-dependency analysis verdicts
//! - Run-level summary counters

mod dependency;
mod summary;
mod verdict;

pub use dependency::DependencyDeclaration;
pub use summary::RunSummary;
pub use verdict::{DependencyVerdict, NoteProvenance};
