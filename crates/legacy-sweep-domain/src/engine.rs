use crate::model::{Decision, Observation};
use crate::policy::ProtectionGuard;
use legacy_sweep_types::Target;

/// Decide what to do with one target.
///
/// Absence wins over protection: a protected path that does not exist is simply clean and
/// produces no skip notice.
pub fn decide(target: &Target, observation: &Observation, guard: &ProtectionGuard) -> Decision {
    match *observation {
        Observation::Absent => Decision::Absent,
        Observation::Present { .. } if guard.is_protected(&target.path) => Decision::Protected,
        Observation::Present { kind } => Decision::Pending { kind },
    }
}
