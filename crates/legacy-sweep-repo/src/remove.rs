use camino::{Utf8Path, Utf8PathBuf};
use legacy_sweep_domain::{EntryKind, ProtectionGuard};
use legacy_sweep_types::RepoPath;

/// Errors from [`remove_target`].
#[derive(Debug, thiserror::Error)]
pub enum RemoveError {
    /// The guard vetoed the removal. Never retried.
    #[error("refusing to remove protected path {path} (protected by {prefix:?})")]
    Protected { path: RepoPath, prefix: String },

    #[error("failed to remove {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result of a successful removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Removed {
    /// Filesystem roots removed. A directory counts once regardless of its contents.
    pub entries: u32,
}

/// Remove one target: unlink files and symlinks, recursively remove directories.
///
/// A symlink is removed as a link and its target is left alone.
///
/// The guard is checked again here, so a protected path is refused even when the caller
/// skipped the decision step.
pub fn remove_target(
    repo_root: &Utf8Path,
    path: &RepoPath,
    kind: EntryKind,
    guard: &ProtectionGuard,
) -> Result<Removed, RemoveError> {
    if let Some(prefix) = guard.matching_prefix(path) {
        return Err(RemoveError::Protected {
            path: path.clone(),
            prefix: prefix.to_string(),
        });
    }

    let full = path.under(repo_root);
    let result = match kind {
        EntryKind::Dir => std::fs::remove_dir_all(&full),
        EntryKind::File => std::fs::remove_file(&full),
        EntryKind::Symlink => remove_symlink(&full),
    };
    result.map_err(|source| RemoveError::Io {
        path: full.clone(),
        source,
    })?;

    tracing::info!(path = %path, ?kind, "removed");
    Ok(Removed { entries: 1 })
}

#[cfg(not(windows))]
fn remove_symlink(link: &Utf8Path) -> std::io::Result<()> {
    std::fs::remove_file(link)
}

/// Directory symlinks and junctions need `remove_dir` on Windows.
#[cfg(windows)]
fn remove_symlink(link: &Utf8Path) -> std::io::Result<()> {
    std::fs::remove_file(link).or_else(|file_err| std::fs::remove_dir(link).map_err(|_| file_err))
}
