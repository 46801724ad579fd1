//! Pure sweep decisions (no IO).
//!
//! Input: a target plus what the filesystem probe observed for it.
//! Output: a per-target decision and the running tally for the summary line.

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;
pub mod report;

mod engine;

#[cfg(test)]
mod proptest;

pub use engine::decide;
pub use model::{Decision, EntryKind, Observation};
pub use policy::ProtectionGuard;
pub use report::Tally;
