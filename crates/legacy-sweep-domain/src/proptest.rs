//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Prefix matching of the protection guard
//! - Decisions never putting a protected path into the pending set
//! - Tally totals matching the recorded pending targets

use crate::engine::decide;
use crate::model::{Decision, EntryKind, Observation};
use crate::policy::ProtectionGuard;
use crate::report::Tally;
use legacy_sweep_types::{RepoPath, Risk, RunMode, Target};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Strategy for a single path segment.
fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_.-]{1,12}")
        .unwrap()
        .prop_filter("segment must not be a dot segment", |s| s != "." && s != "..")
}

/// Strategy for safe relative paths (one to four segments).
fn arb_relative_path() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_segment(), 1..=4).prop_map(|segments| segments.join("/"))
}

fn arb_entry_kind() -> impl Strategy<Value = EntryKind> {
    prop_oneof![
        Just(EntryKind::File),
        Just(EntryKind::Dir),
        Just(EntryKind::Symlink),
    ]
}

fn arb_observation() -> impl Strategy<Value = Observation> {
    prop_oneof![
        Just(Observation::Absent),
        arb_entry_kind().prop_map(|kind| Observation::Present { kind }),
    ]
}

fn arb_risk() -> impl Strategy<Value = Risk> {
    prop_oneof![Just(Risk::Low), Just(Risk::Medium), Just(Risk::High)]
}

// ============================================================================
// Guard properties
// ============================================================================

proptest! {
    /// A prefix always protects itself.
    #[test]
    fn prefix_protects_exact_path(prefix in arb_relative_path()) {
        let guard = ProtectionGuard::new([prefix.clone()]);
        prop_assert!(guard.is_protected(&RepoPath::new(&prefix)));
    }

    /// A prefix protects every path below it, with or without a trailing slash.
    #[test]
    fn prefix_protects_descendants(
        prefix in arb_relative_path(),
        rest in arb_relative_path(),
        trailing_slash in any::<bool>(),
    ) {
        let declared = if trailing_slash { format!("{prefix}/") } else { prefix.clone() };
        let guard = ProtectionGuard::new([declared]);
        let path = RepoPath::new(format!("{prefix}/{rest}"));
        prop_assert!(guard.is_protected(&path), "{} should be protected", path);
    }

    /// Extending the last segment of a prefix escapes the guard.
    #[test]
    fn sibling_with_shared_stem_is_not_protected(
        prefix in arb_relative_path(),
        suffix in "[a-z0-9]{1,6}",
    ) {
        let guard = ProtectionGuard::new([prefix.clone()]);
        let path = RepoPath::new(format!("{prefix}{suffix}"));
        prop_assert!(!guard.is_protected(&path), "{} should not be protected", path);
    }
}

// ============================================================================
// Decision properties
// ============================================================================

proptest! {
    /// A protected target never becomes pending, whatever the probe saw.
    #[test]
    fn protected_target_is_never_pending(
        prefix in arb_relative_path(),
        rest in prop::option::of(arb_relative_path()),
        observation in arb_observation(),
        risk in arb_risk(),
    ) {
        let guard = ProtectionGuard::new([prefix.clone()]);
        let path = match rest {
            Some(rest) => format!("{prefix}/{rest}"),
            None => prefix,
        };
        let target = Target::new(path.as_str(), "reason", risk);

        let decision = decide(&target, &observation, &guard);
        prop_assert!(!decision.is_pending());
        if observation.exists() {
            prop_assert_eq!(decision, Decision::Protected);
        } else {
            prop_assert_eq!(decision, Decision::Absent);
        }
    }

    /// Pending implies the target exists and carries the observed kind.
    #[test]
    fn pending_matches_observation(
        path in arb_relative_path(),
        observation in arb_observation(),
    ) {
        let guard = ProtectionGuard::new(["__never_matches__"]);
        let target = Target::new(path.as_str(), "reason", Risk::Low);

        match (decide(&target, &observation, &guard), observation) {
            (Decision::Pending { kind }, Observation::Present { kind: k }) => {
                prop_assert_eq!(kind, k);
            }
            (Decision::Absent, Observation::Absent) => {}
            (decision, observation) => {
                prop_assert!(false, "unexpected {:?} for {:?}", decision, observation);
            }
        }
    }

    /// The tally counts exactly the pending decisions and sums their sizes.
    #[test]
    fn tally_sums_pending_decisions(
        entries in prop::collection::vec((arb_observation(), 0u64..(1 << 40)), 0..16),
    ) {
        let guard = ProtectionGuard::new(["protected"]);
        let mut tally = Tally::new(RunMode::Preview);
        let mut expected_count = 0u32;
        let mut expected_bytes = 0u64;

        for (i, (observation, bytes)) in entries.iter().enumerate() {
            let path = if i % 3 == 0 { format!("protected/{i}") } else { format!("legacy/{i}") };
            let target = Target::new(path.as_str(), "reason", Risk::Low);
            if decide(&target, observation, &guard).is_pending() {
                expected_count += 1;
                expected_bytes += bytes;
                tally.record(*bytes);
            }
        }

        let summary = tally.finish();
        prop_assert_eq!(summary.pending, expected_count);
        prop_assert_eq!(summary.total_bytes, expected_bytes);
    }
}
