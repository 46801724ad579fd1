//! Target registry presets and run configuration resolution.
//!
//! This crate is intentionally IO-free: the registry is compiled in and overrides come from
//! the caller (typically the CLI).

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::Registry;
pub use presets::{builtin_registry, BUILTIN_PROTECTED_PREFIXES};
pub use resolve::{Overrides, ResolvedConfig};

/// Validate `registry` and fix the run mode from the overrides.
pub fn resolve_config(registry: Registry, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(registry, overrides)
}
