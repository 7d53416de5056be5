//! Testing utilities for shardstats workspace
//!
//! Shared fixtures, proptest strategies and assertions.

#![allow(missing_docs)]

use proptest::prelude::*;
use shardstats_model::{
    FailureCause, FailureRecord, GenericOperationFailure, SearchShardFailure, ShardTarget,
};
use shardstats_proto::ShardStatistics;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test-writer subscriber once; honours `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn exception(message: &str) -> FailureCause {
    FailureCause::new("java.lang.Exception").with_message(message)
}

pub fn search_failure(shard: u32, index: &str, node: &str, message: &str) -> FailureRecord {
    SearchShardFailure::new(exception(message), Some(ShardTarget::new(node, index, shard))).into()
}

pub fn untargeted_search_failure(message: &str) -> FailureRecord {
    SearchShardFailure::new(exception(message), None).into()
}

pub fn operation_failure(shard: u32, index: &str, primary: bool, message: &str) -> FailureRecord {
    let failure = GenericOperationFailure::new(shard, exception(message)).with_index(index);
    if primary {
        failure.on_primary().into()
    } else {
        failure.into()
    }
}

/// Assert legacy and current entries line up one-to-one on shard, index,
/// node and reason. Only meaningful when every failure was a search failure.
pub fn assert_fields_aligned(stats: &ShardStatistics) {
    assert_eq!(
        stats.failures.len(),
        stats.failures_2.len(),
        "legacy and current failure counts differ"
    );
    for (i, (legacy, current)) in stats.failures.iter().zip(&stats.failures_2).enumerate() {
        assert_eq!(legacy.shard, current.shard, "shard differs at position {i}");
        assert_eq!(legacy.index, current.index, "index differs at position {i}");
        assert_eq!(legacy.node, current.node, "node differs at position {i}");
        assert_eq!(legacy.reason, current.reason, "reason differs at position {i}");
        assert!(!legacy.primary, "search failure marked primary at position {i}");
    }
}

fn arb_message() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("boom".to_string()),
        Just("timeout".to_string()),
        Just("circuit breaker".to_string()),
    ]
}

fn arb_index() -> impl Strategy<Value = String> {
    prop_oneof![Just("a".to_string()), Just("b".to_string())]
}

/// Search failures over a small value space so that duplicates are common
pub fn arb_search_failure() -> impl Strategy<Value = FailureRecord> {
    (0u32..4, arb_index(), 0u32..3, arb_message()).prop_map(|(shard, index, node, message)| {
        search_failure(shard, &index, &format!("node{node}"), &message)
    })
}

/// Non-search failures over a small value space
pub fn arb_operation_failure() -> impl Strategy<Value = FailureRecord> {
    (0u32..4, arb_index(), any::<bool>(), arb_message()).prop_map(
        |(shard, index, primary, message)| operation_failure(shard, &index, primary, &message),
    )
}

/// Failures of either kind
pub fn arb_failure() -> impl Strategy<Value = FailureRecord> {
    prop_oneof![arb_search_failure(), arb_operation_failure()]
}
