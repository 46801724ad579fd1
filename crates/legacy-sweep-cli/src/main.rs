//! CLI entry point for legacy-sweep.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, and exit codes.
//! All business logic lives in the `legacy-sweep-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use legacy_sweep_app::{run_sweep, SweepInput};
use legacy_sweep_settings::{builtin_registry, resolve_config, Overrides};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "legacy-sweep",
    version,
    about = "Bereinigt Legacy-Dateien (Dry-Run default)."
)]
struct Cli {
    /// Dateien/Ordner wirklich löschen (ansonsten nur Dry-Run).
    #[arg(long)]
    force: bool,

    /// Repository root the registry paths are relative to.
    #[arg(long, default_value = ".")]
    repo_root: Utf8PathBuf,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = cmd_sweep(&cli) {
        eprintln!("legacy-sweep error: {err:#}");
        std::process::exit(1);
    }
}

fn cmd_sweep(cli: &Cli) -> anyhow::Result<()> {
    let repo_root = cli
        .repo_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.repo_root.clone());

    let config = resolve_config(builtin_registry(), Overrides { force: cli.force })
        .context("resolve registry")?;
    tracing::debug!(%repo_root, mode = ?config.mode, "starting sweep");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_sweep(
        SweepInput {
            repo_root: &repo_root,
            config: &config,
        },
        &mut out,
    )?;

    Ok(())
}

/// Diagnostics go to stderr so stdout carries only the report lines.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
