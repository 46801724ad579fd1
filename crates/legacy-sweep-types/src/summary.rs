/// The two run modes. Selected once per run, never switched mid-run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Report intended actions, never touch the filesystem.
    #[default]
    Preview,
    /// Remove every pending target.
    Force,
}

impl RunMode {
    pub fn from_force_flag(force: bool) -> Self {
        if force { RunMode::Force } else { RunMode::Preview }
    }

    pub fn is_force(self) -> bool {
        matches!(self, RunMode::Force)
    }
}

/// Aggregate outcome of one run. Not persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepSummary {
    pub mode: RunMode,
    /// Targets that passed existence and guard checks.
    pub pending: u32,
    /// Bytes freed (force) or that would be freed (preview).
    pub total_bytes: u64,
}
