//! Release note retrieval and parsing
//!
//! This module provides:
//! - The note locator abstraction and its HTTP-backed implementation
//! - The parser that scans fetched notes for breaking changes and
//!   window-relevant content

mod locator;
mod parser;

pub use locator::{repository_id, NoteLocator, ReleaseNoteLocator, ReleaseNoteSource};
pub use parser::{parse_release_notes, ChangelogVerdict};
