//! Stable DTOs used across the legacy-sweep workspace.
//!
//! This crate is intentionally boring:
//! - canonical repo-relative path handling
//! - cleanup targets and their risk labels
//! - run mode and the per-run summary

#![forbid(unsafe_code)]

pub mod path;
pub mod summary;
pub mod target;

pub use path::RepoPath;
pub use summary::{RunMode, SweepSummary};
pub use target::{Risk, Target};
