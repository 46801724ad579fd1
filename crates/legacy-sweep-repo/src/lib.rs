//! Repository adapters: probe targets on disk and remove them.
//!
//! This crate is the only place that touches the filesystem. It knows nothing about report
//! wording; callers decide what to print.

#![forbid(unsafe_code)]

mod probe;
mod remove;

pub use probe::{measure, probe};
pub use remove::{remove_target, RemoveError, Removed};
