//! The `sweep` use case: walk the registry once, report, and optionally remove.

use anyhow::Context;
use camino::Utf8Path;
use legacy_sweep_domain::{decide, Decision, Tally};
use legacy_sweep_render::{render_action, render_removed, render_skip, render_summary};
use legacy_sweep_settings::ResolvedConfig;
use legacy_sweep_types::SweepSummary;
use std::io::Write;

/// Input for the sweep use case.
#[derive(Clone, Copy, Debug)]
pub struct SweepInput<'a> {
    /// Repository root the registry paths are relative to.
    pub repo_root: &'a Utf8Path,
    /// Validated registry and run mode.
    pub config: &'a ResolvedConfig,
}

/// Output from the sweep use case.
#[derive(Clone, Debug)]
pub struct SweepOutput {
    pub summary: SweepSummary,
}

/// Run one pass over the registry, writing report lines to `out`.
///
/// Targets are handled strictly in registry order and each one is probed only after the
/// previous one was fully processed. Sizes are measured only for pending targets, so a
/// protected directory is skipped without being walked. The first probe or removal failure aborts the run: later
/// targets are not visited and no summary line is written.
pub fn run_sweep<W: Write>(input: SweepInput<'_>, out: &mut W) -> anyhow::Result<SweepOutput> {
    let SweepInput { repo_root, config } = input;
    if !repo_root.is_dir() {
        anyhow::bail!("repo root does not exist: {repo_root}");
    }

    let mode = config.mode;
    let guard = &config.registry.guard;
    let mut tally = Tally::new(mode);

    for target in &config.registry.targets {
        let observation = legacy_sweep_repo::probe(repo_root, &target.path)
            .with_context(|| format!("probe {}", target.path))?;
        let decision = decide(target, &observation, guard);
        tracing::debug!(path = %target.path, ?decision, "decided");

        match decision {
            Decision::Absent => continue,
            Decision::Protected => {
                writeln!(out, "{}", render_skip(&target.path))?;
                continue;
            }
            Decision::Pending { kind } => {
                let bytes = legacy_sweep_repo::measure(repo_root, &target.path, kind)
                    .with_context(|| format!("measure {}", target.path))?;
                tally.record(bytes);
                writeln!(out, "{}", render_action(target, mode))?;

                if !mode.is_force() {
                    continue;
                }

                let removed =
                    legacy_sweep_repo::remove_target(repo_root, &target.path, kind, guard)
                        .with_context(|| format!("delete {}", target.path))?;
                writeln!(out, "{}", render_removed(removed.entries))?;
            }
        }
    }

    let summary = tally.finish();
    tracing::debug!(
        pending = summary.pending,
        total_bytes = summary.total_bytes,
        ?mode,
        "sweep finished"
    );

    writeln!(out)?;
    writeln!(out, "{}", render_summary(&summary))?;
    out.flush()?;

    Ok(SweepOutput { summary })
}
