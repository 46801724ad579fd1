use crate::model::Registry;
use legacy_sweep_domain::ProtectionGuard;
use legacy_sweep_types::{Risk, Target};

/// Paths no registry entry may ever remove: VCS, CI, governance, infra, and root manifests.
pub const BUILTIN_PROTECTED_PREFIXES: &[&str] = &[
    ".git",
    ".github",
    "infra/terraform",
    "compliance",
    "docs",
    "openapi",
    "AGENTS.md",
    "package.json",
    "package-lock.json",
    "tsconfig",
    "jest.config",
];

/// The compiled-in cleanup set for the lokaltreu monorepo.
///
/// Keep this small and readable. Each entry needs a reason a reviewer can verify.
pub fn builtin_registry() -> Registry {
    Registry::new(
        builtin_targets(),
        ProtectionGuard::new(BUILTIN_PROTECTED_PREFIXES.iter().copied()),
    )
}

fn builtin_targets() -> Vec<Target> {
    vec![
        Target::new(
            "apps/web/next.config.js",
            "Legacy Next.js-Config (JS) – TS-Version vorhanden",
            Risk::Low,
        ),
        Target::new(
            "apps/api/vitest.config.js",
            "Transpiliertes Duplikat von vitest.config.ts",
            Risk::Low,
        ),
        Target::new(
            "apps/api/vitest.config.d.ts",
            "Type-Definition-Artefakt; driftet gegenüber .ts",
            Risk::Low,
        ),
        Target::new(
            "packages/config",
            "Verwaistes Legacy-Package ohne package.json (nur dist)",
            Risk::Medium,
        ),
    ]
}
