use proptest::prelude::*;
use shardstats_core::prelude::*;
use shardstats_core::{SameIndexAndCause, SameShardAndCause};
use shardstats_test_utils::{arb_failure, arb_search_failure, assert_fields_aligned};

proptest! {
    #[test]
    fn prop_counters_pass_through(
        total in 0i32..10_000,
        successful in 0i32..10_000,
        skipped in -5i32..10_000,
        failed in 0i32..10_000,
    ) {
        let stats = ResultProjector::new()
            .project_counts(total, successful, skipped, failed, None)
            .unwrap();

        prop_assert_eq!(stats.total, total);
        prop_assert_eq!(stats.successful, successful);
        prop_assert_eq!(stats.failed, failed);
        if skipped < 0 {
            prop_assert!(stats.skipped.is_none());
        } else {
            prop_assert_eq!(stats.skipped, Some(skipped));
        }
        prop_assert!(stats.failures.is_empty());
        prop_assert!(stats.failures_2.is_empty());
    }

    #[test]
    fn prop_search_only_fields_align(
        failures in prop::collection::vec(arb_search_failure(), 0..12),
    ) {
        let stats = ResultProjector::new()
            .project_counts(12, 0, 0, 12, Some(failures.as_slice()))
            .unwrap();

        assert_fields_aligned(&stats);
    }

    #[test]
    fn prop_current_never_exceeds_legacy(failures in prop::collection::vec(arb_failure(), 0..12)) {
        let stats = ResultProjector::new()
            .project_counts(12, 0, 0, 12, Some(failures.as_slice()))
            .unwrap();

        let all_search = FailureGrouper::new(SameIndexAndCause)
            .group(Some(failures.as_slice()))
            .iter()
            .all(|f| f.is_search());

        prop_assert!(stats.failures_2.len() <= stats.failures.len());
        prop_assert_eq!(stats.failures_2.len() == stats.failures.len(), all_search);
    }

    #[test]
    fn prop_projection_is_idempotent(failures in prop::collection::vec(arb_failure(), 0..12)) {
        let projector = ResultProjector::new();
        let first = projector.project_counts(12, 6, 1, 5, Some(failures.as_slice())).unwrap();
        let second = projector.project_counts(12, 6, 1, 5, Some(failures.as_slice())).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_grouping_keeps_first_of_each_class(
        failures in prop::collection::vec(arb_failure(), 0..16),
    ) {
        let grouper = FailureGrouper::new(SameShardAndCause);
        let grouped = grouper.group(Some(failures.as_slice()));

        // no two representatives are equivalent
        for (i, a) in grouped.iter().enumerate() {
            for b in &grouped[i + 1..] {
                prop_assert!(!grouper.equivalence().equivalent(a, b));
            }
        }

        // every input has a representative
        for failure in &failures {
            prop_assert!(grouped.iter().any(|r| grouper.equivalence().equivalent(r, failure)));
        }

        // representatives appear in input order
        let positions: Vec<usize> = grouped
            .iter()
            .map(|r| failures.iter().position(|f| std::ptr::eq(f, *r)).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_grouping_is_idempotent(failures in prop::collection::vec(arb_failure(), 0..16)) {
        let grouper = FailureGrouper::new(SameIndexAndCause);
        let once: Vec<FailureRecord> = grouper
            .group(Some(failures.as_slice()))
            .into_iter()
            .cloned()
            .collect();
        let twice = grouper.group(Some(once.as_slice()));

        prop_assert_eq!(once.len(), twice.len());
    }
}
