//! depscout - dependency update risk analyzer library
//!
//! This library provides the core functionality for analyzing the
//! dependencies declared in a package.json:
//! - checking the npm registry for newer versions
//! - flagging upstreams with no recent releases
//! - scanning release notes for breaking-change mentions

pub mod changelog;
pub mod classify;
pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod registry;
