use legacy_sweep_types::RepoPath;

/// Literal-prefix allowlist of paths that must never be removed.
///
/// A path is protected when its forward-slash form equals a prefix, or starts with the
/// prefix (trailing `/` trimmed) followed by `/`. No globbing: `tsconfig` protects
/// `tsconfig` and `tsconfig/...`, but not `tsconfig.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProtectionGuard {
    prefixes: Vec<String>,
}

impl ProtectionGuard {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn is_protected(&self, path: &RepoPath) -> bool {
        self.matching_prefix(path).is_some()
    }

    /// First prefix that covers `path`, in declaration order.
    pub fn matching_prefix(&self, path: &RepoPath) -> Option<&str> {
        let rel = path.as_str();
        self.prefixes
            .iter()
            .find(|prefix| covers(prefix, rel))
            .map(String::as_str)
    }
}

fn covers(prefix: &str, rel: &str) -> bool {
    if rel == prefix {
        return true;
    }
    let trimmed = prefix.trim_end_matches('/');
    rel.strip_prefix(trimmed)
        .is_some_and(|rest| rest.starts_with('/'))
}
