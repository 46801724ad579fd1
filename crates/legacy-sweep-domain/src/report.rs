use legacy_sweep_types::{RunMode, SweepSummary};

/// Running totals over the pending targets of one run.
///
/// Absent and protected targets are never recorded, so they never reach the summary.
#[derive(Clone, Debug)]
pub struct Tally {
    summary: SweepSummary,
}

impl Tally {
    pub fn new(mode: RunMode) -> Self {
        Self {
            summary: SweepSummary {
                mode,
                pending: 0,
                total_bytes: 0,
            },
        }
    }

    /// Count one pending target of `bytes` on-disk size.
    pub fn record(&mut self, bytes: u64) {
        self.summary.pending += 1;
        self.summary.total_bytes = self.summary.total_bytes.saturating_add(bytes);
    }

    pub fn finish(self) -> SweepSummary {
        self.summary
    }
}
