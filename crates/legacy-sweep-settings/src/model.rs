use legacy_sweep_domain::ProtectionGuard;
use legacy_sweep_types::Target;

/// An ordered list of cleanup targets plus the guard that vetoes them.
///
/// Order matters: targets are probed and acted on in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry {
    pub targets: Vec<Target>,
    pub guard: ProtectionGuard,
}

impl Registry {
    pub fn new(targets: Vec<Target>, guard: ProtectionGuard) -> Self {
        Self { targets, guard }
    }
}
