use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;

/// Canonical repo-relative path used for guard matching and report lines.
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`)
/// - no leading `./`
/// - never empty (an empty input becomes `.`)
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RepoPath(String);

impl Default for RepoPath {
    fn default() -> Self {
        RepoPath::new(".")
    }
}

impl RepoPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve against a repository root on disk.
    pub fn under(&self, repo_root: &Utf8Path) -> Utf8PathBuf {
        repo_root.join(self.as_str())
    }

    /// True if the path points outside the repository (absolute or `..` segments).
    pub fn escapes_root(&self) -> bool {
        self.0.starts_with('/')
            || Utf8Path::new(&self.0).has_root()
            || self.0.split('/').any(|segment| segment == "..")
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RepoPath {
    fn from(value: &str) -> Self {
        RepoPath::new(value)
    }
}
