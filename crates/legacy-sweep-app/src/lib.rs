//! Use case orchestration for legacy-sweep.
//!
//! This crate provides the application layer: it coordinates the domain, repo, and render
//! layers. The CLI crate depends on this; it only handles argument parsing and process setup.

#![forbid(unsafe_code)]

mod sweep;

pub use sweep::{run_sweep, SweepInput, SweepOutput};
