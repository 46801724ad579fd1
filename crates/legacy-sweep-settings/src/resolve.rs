use crate::model::Registry;
use legacy_sweep_types::RunMode;
use std::collections::BTreeSet;

/// Values supplied on the command line.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub force: bool,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub mode: RunMode,
    pub registry: Registry,
}

pub fn resolve_config(registry: Registry, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    validate_registry(&registry)?;

    Ok(ResolvedConfig {
        mode: RunMode::from_force_flag(overrides.force),
        registry,
    })
}

fn validate_registry(registry: &Registry) -> anyhow::Result<()> {
    let mut seen = BTreeSet::new();
    for target in &registry.targets {
        let path = target.path.as_str();
        if path == "." {
            anyhow::bail!("registry target must name a path below the repo root (got {path:?})");
        }
        if target.path.escapes_root() {
            anyhow::bail!("registry target escapes the repo root: {path}");
        }
        if !seen.insert(path) {
            anyhow::bail!("duplicate registry target: {path}");
        }
    }

    if let Some(idx) = registry
        .guard
        .prefixes()
        .iter()
        .position(|p| p.trim_end_matches('/').is_empty())
    {
        anyhow::bail!("protected prefix #{idx} is empty");
    }

    Ok(())
}
