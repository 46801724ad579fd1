use crate::format_size;
use legacy_sweep_types::{RepoPath, RunMode, SweepSummary, Target};

pub fn render_skip(path: &RepoPath) -> String {
    format!("[SKIP] {path} ist geschützt und wird nicht gelöscht.")
}

/// `<Action>: <path> (<reason>, Risiko: <risk>)`
pub fn render_action(target: &Target, mode: RunMode) -> String {
    let action = match mode {
        RunMode::Preview => "Würde löschen",
        RunMode::Force => "Lösche",
    };
    format!(
        "{action}: {} ({}, Risiko: {})",
        target.path, target.reason, target.risk
    )
}

pub fn render_removed(entries: u32) -> String {
    let plural = if entries == 1 { "" } else { "e" };
    format!("  → Entfernt ({entries} Eintrag{plural})")
}

pub fn render_summary(summary: &SweepSummary) -> String {
    let size = format_size(summary.total_bytes);
    match summary.mode {
        RunMode::Force => format!(
            "Zusammenfassung: {} Target(s) entfernt, freigegebener Speicher ~ {size}.",
            summary.pending
        ),
        RunMode::Preview => format!(
            "Dry-Run abgeschlossen: {} Target(s) würden entfernt werden, geschätzter Speichergewinn ~ {size}.",
            summary.pending
        ),
    }
}
