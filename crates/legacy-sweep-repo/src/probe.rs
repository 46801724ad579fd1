use anyhow::Context;
use camino::Utf8Path;
use legacy_sweep_domain::{EntryKind, Observation};
use legacy_sweep_types::RepoPath;
use std::io::ErrorKind;
use walkdir::WalkDir;

/// Stat `path` under `repo_root` without following a final symlink.
///
/// Only the entry itself is looked at; directories are not walked here (see [`measure`]).
/// A missing path, or one below a regular file, is `Observation::Absent`.
pub fn probe(repo_root: &Utf8Path, path: &RepoPath) -> anyhow::Result<Observation> {
    let full = path.under(repo_root);
    let meta = match std::fs::symlink_metadata(&full) {
        Ok(meta) => meta,
        Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            tracing::debug!(path = %path, "target absent");
            return Ok(Observation::Absent);
        }
        Err(err) => return Err(err).with_context(|| format!("stat {full}")),
    };

    let file_type = meta.file_type();
    let kind = if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Dir
    } else {
        EntryKind::File
    };

    tracing::debug!(path = %path, ?kind, "target present");
    Ok(Observation::Present { kind })
}

/// On-disk size of a probed target, for reporting only.
///
/// - regular file: its own size
/// - directory: sum of all regular files below it; symlinks to files count with the size of
///   the file they point to, symlinked directories are not descended into
/// - symlink: the size of the file it points to, 0 if dangling or pointing at a directory
pub fn measure(repo_root: &Utf8Path, path: &RepoPath, kind: EntryKind) -> anyhow::Result<u64> {
    let full = path.under(repo_root);
    let bytes = match kind {
        EntryKind::File => std::fs::symlink_metadata(&full)
            .with_context(|| format!("stat {full}"))?
            .len(),
        EntryKind::Symlink => linked_file_size(full.as_std_path()),
        EntryKind::Dir => dir_size(&full)?,
    };

    tracing::debug!(path = %path, bytes, "target measured");
    Ok(bytes)
}

fn dir_size(dir: &Utf8Path) -> anyhow::Result<u64> {
    let mut total = 0u64;
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.with_context(|| format!("walk {dir}"))?;
        let file_type = entry.file_type();
        let bytes = if file_type.is_file() {
            entry
                .metadata()
                .with_context(|| format!("stat {}", entry.path().display()))?
                .len()
        } else if file_type.is_symlink() {
            linked_file_size(entry.path())
        } else {
            continue;
        };
        total = total.saturating_add(bytes);
    }
    Ok(total)
}

fn linked_file_size(link: &std::path::Path) -> u64 {
    match std::fs::metadata(link) {
        Ok(meta) if meta.is_file() => meta.len(),
        _ => 0,
    }
}
