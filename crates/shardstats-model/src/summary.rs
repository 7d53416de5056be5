//! Shard outcome counters

use serde::{Deserialize, Serialize};

/// Shard counters of a single sharded operation.
///
/// Counters are carried exactly as the execution engine reports them. The
/// only interpreted value is a negative `skipped`, which means the skip count
/// was not tracked for this operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShardOutcomeSummary {
    /// Total shards targeted
    pub total: i32,
    /// Shards that succeeded
    pub successful: i32,
    /// Shards skipped; negative when not tracked
    pub skipped: i32,
    /// Shards that failed
    pub failed: i32,
}

impl ShardOutcomeSummary {
    /// Sentinel for an untracked skip count
    pub const SKIPPED_UNTRACKED: i32 = -1;

    /// Create a summary without a skip count
    #[inline]
    #[must_use]
    pub fn new(total: i32, successful: i32, failed: i32) -> Self {
        Self {
            total,
            successful,
            skipped: Self::SKIPPED_UNTRACKED,
            failed,
        }
    }

    /// With skip count (negative values mean "not tracked")
    #[inline]
    #[must_use]
    pub fn with_skipped(mut self, skipped: i32) -> Self {
        self.skipped = skipped;
        self
    }

    /// Skip count, or `None` when it was not tracked
    #[inline]
    #[must_use]
    pub fn skipped_if_tracked(&self) -> Option<i32> {
        (self.skipped >= 0).then_some(self.skipped)
    }

    /// Whether `successful + failed <= total` holds.
    ///
    /// Advisory only: nothing in the workspace rejects a summary that fails
    /// this check.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        i64::from(self.successful) + i64::from(self.failed) <= i64::from(self.total)
    }
}

impl Default for ShardOutcomeSummary {
    fn default() -> Self {
        Self::new(0, 0, 0)
    }
}
