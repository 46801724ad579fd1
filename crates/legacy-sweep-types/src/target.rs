use crate::RepoPath;
use std::fmt;

/// Coarse risk label attached to a cleanup target.
///
/// Displayed with the German labels used in the report lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Risk {
    Low,
    Medium,
    High,
}

impl Risk {
    pub fn label(self) -> &'static str {
        match self {
            Risk::Low => "niedrig",
            Risk::Medium => "mittel",
            Risk::High => "hoch",
        }
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single file or directory eligible for removal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Target {
    pub path: RepoPath,
    pub reason: String,
    pub risk: Risk,
}

impl Target {
    pub fn new(path: impl Into<RepoPath>, reason: impl Into<String>, risk: Risk) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
            risk,
        }
    }
}
