//! Rendering for the line-oriented terminal report.
//!
//! Every function returns one line without a trailing newline. The wording is German and is
//! part of the tool's output contract.

#![forbid(unsafe_code)]

mod lines;
mod size;

pub use lines::{render_action, render_removed, render_skip, render_summary};
pub use size::format_size;
