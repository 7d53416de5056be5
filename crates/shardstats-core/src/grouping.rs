//! Failure grouping
//!
//! Collapses equivalent failures into one representative before they are
//! serialized. What "equivalent" means is decided by a
//! [`FailureEquivalence`] predicate, so the rule can be swapped and tested
//! on its own.

use serde::{Deserialize, Serialize};
use shardstats_model::FailureRecord;

/// Decides whether two failures report the same problem
pub trait FailureEquivalence {
    /// `true` when `b` adds nothing over `a`
    fn equivalent(&self, a: &FailureRecord, b: &FailureRecord) -> bool;
}

impl<F> FailureEquivalence for F
where
    F: Fn(&FailureRecord, &FailureRecord) -> bool,
{
    fn equivalent(&self, a: &FailureRecord, b: &FailureRecord) -> bool {
        self(a, b)
    }
}

/// Index the failure is about: the failure's own index, or the one named by
/// its cause when the failure has none
fn effective_index(failure: &FailureRecord) -> Option<&str> {
    failure.index().or(failure.cause().index.as_deref())
}

fn same_index_and_cause(a: &FailureRecord, b: &FailureRecord) -> bool {
    let (ca, cb) = (a.cause(), b.cause());
    effective_index(a) == effective_index(b)
        && ca.type_name == cb.type_name
        && ca.message == cb.message
}

/// Same index, same cause type and same cause message.
///
/// The shard is ignored, so one error hitting every shard of an index is
/// reported once.
#[derive(Debug, Clone, Copy, Default)]
pub struct SameIndexAndCause;

impl FailureEquivalence for SameIndexAndCause {
    fn equivalent(&self, a: &FailureRecord, b: &FailureRecord) -> bool {
        same_index_and_cause(a, b)
    }
}

/// Like [`SameIndexAndCause`], but failures on different shards stay apart
#[derive(Debug, Clone, Copy, Default)]
pub struct SameShardAndCause;

impl FailureEquivalence for SameShardAndCause {
    fn equivalent(&self, a: &FailureRecord, b: &FailureRecord) -> bool {
        a.shard() == b.shard() && same_index_and_cause(a, b)
    }
}

/// Grouping rule selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingMode {
    /// [`SameIndexAndCause`]
    #[default]
    ByIndexAndCause,
    /// [`SameShardAndCause`]
    ByShardAndCause,
    /// Every failure is kept
    Disabled,
}

impl FailureEquivalence for GroupingMode {
    fn equivalent(&self, a: &FailureRecord, b: &FailureRecord) -> bool {
        match self {
            Self::ByIndexAndCause => SameIndexAndCause.equivalent(a, b),
            Self::ByShardAndCause => SameShardAndCause.equivalent(a, b),
            Self::Disabled => false,
        }
    }
}

/// Reduces failures to one representative per equivalence class
#[derive(Debug, Clone, Copy, Default)]
pub struct FailureGrouper<E = SameIndexAndCause> {
    equivalence: E,
}

impl<E: FailureEquivalence> FailureGrouper<E> {
    /// Create grouper with an equivalence predicate
    #[inline]
    #[must_use]
    pub fn new(equivalence: E) -> Self {
        Self { equivalence }
    }

    /// The predicate in use
    #[inline]
    #[must_use]
    pub fn equivalence(&self) -> &E {
        &self.equivalence
    }

    /// Group failures, keeping the first failure seen of each class in input
    /// order.
    ///
    /// `None` and an empty slice both produce an empty set.
    #[must_use]
    pub fn group<'a>(&self, failures: Option<&'a [FailureRecord]>) -> Vec<&'a FailureRecord> {
        let mut representatives: Vec<&'a FailureRecord> = Vec::new();
        for failure in failures.unwrap_or_default() {
            let seen = representatives
                .iter()
                .any(|kept| self.equivalence.equivalent(kept, failure));
            if !seen {
                representatives.push(failure);
            }
        }
        representatives
    }
}
