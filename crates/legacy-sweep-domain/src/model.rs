/// Kind of filesystem entry found at a target path.
///
/// Symlinks are never followed: a link is removed as a link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
}

/// What a stat of the target path saw at check time.
///
/// Carries no size: sizes are only measured for targets that end up pending, so protected
/// directories are never walked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation {
    Absent,
    Present { kind: EntryKind },
}

impl Observation {
    pub fn exists(&self) -> bool {
        matches!(self, Observation::Present { .. })
    }
}

/// Outcome of checking one target against existence and the guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Already clean. Silent.
    Absent,
    /// Exists but covered by a protected prefix. Reported, never pending.
    Protected,
    /// Exists and unprotected: measure it and act on it.
    Pending { kind: EntryKind },
}

impl Decision {
    pub fn is_pending(&self) -> bool {
        matches!(self, Decision::Pending { .. })
    }
}
