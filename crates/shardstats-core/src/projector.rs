//! Shard statistics projection
//!
//! [`ResultProjector`] builds the [`ShardStatistics`] wire message from shard
//! counters and failures. Every grouped failure lands in the legacy
//! `failures` field; search failures are also written to `failures_2` in the
//! current schema. The two fields do not have the same length unless every
//! failure is a search failure.

use crate::config::ProjectorConfig;
use crate::convert::{operation_failure_to_legacy_proto, search_failure_to_proto};
use crate::error::ProjectionError;
use crate::grouping::{FailureEquivalence, FailureGrouper, GroupingMode, SameIndexAndCause};
use shardstats_model::{CauseChainRenderer, FailureRecord, ReasonRenderer, ShardOutcomeSummary};
use shardstats_proto::{ShardFailure, ShardSearchFailure, ShardStatistics};

/// Builds [`ShardStatistics`] messages
///
/// Holds no per-call state; one instance can serve any number of
/// conversions, from any number of threads when `R` and `E` allow it.
#[derive(Debug, Clone, Default)]
pub struct ResultProjector<R = CauseChainRenderer, E = SameIndexAndCause> {
    renderer: R,
    grouper: FailureGrouper<E>,
}

impl ResultProjector {
    /// Create projector with the default renderer and grouping
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultProjector<CauseChainRenderer, GroupingMode> {
    /// Create projector from configuration
    #[must_use]
    pub fn from_config(config: &ProjectorConfig) -> Self {
        Self::with_parts(
            CauseChainRenderer::with_config(config.render),
            config.grouping,
        )
    }
}

impl<R: ReasonRenderer, E: FailureEquivalence> ResultProjector<R, E> {
    /// Create projector from a renderer and an equivalence predicate
    #[inline]
    #[must_use]
    pub fn with_parts(renderer: R, equivalence: E) -> Self {
        Self {
            renderer,
            grouper: FailureGrouper::new(equivalence),
        }
    }

    /// The reason renderer in use
    #[inline]
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The failure grouper in use
    #[inline]
    #[must_use]
    pub fn grouper(&self) -> &FailureGrouper<E> {
        &self.grouper
    }

    /// Project counters and failures into a statistics message.
    ///
    /// `None` and empty failures leave both repeated fields empty.
    ///
    /// # Errors
    /// Returns [`ProjectionError::Rendering`] if any grouped failure's cause
    /// cannot be rendered. No partial message is returned.
    pub fn project(
        &self,
        summary: &ShardOutcomeSummary,
        failures: Option<&[FailureRecord]>,
    ) -> Result<ShardStatistics, ProjectionError> {
        if !summary.is_consistent() {
            tracing::warn!(
                total = summary.total,
                successful = summary.successful,
                failed = summary.failed,
                "shard counters do not add up"
            );
        }

        let grouped = self.grouper.group(failures);
        let (legacy, current) = self.route(&grouped).map_err(|err| {
            tracing::warn!(error = %err, "shard statistics projection aborted");
            err
        })?;

        tracing::debug!(
            input = failures.map_or(0, <[FailureRecord]>::len),
            grouped = grouped.len(),
            legacy = legacy.len(),
            current = current.len(),
            "projected shard statistics"
        );

        Ok(ShardStatistics {
            failures: legacy,
            total: summary.total,
            successful: summary.successful,
            skipped: summary.skipped_if_tracked(),
            failed: summary.failed,
            failures_2: current,
        })
    }

    /// Render each representative once and write it to the field(s) its
    /// kind belongs to.
    fn route(
        &self,
        grouped: &[&FailureRecord],
    ) -> Result<(Vec<ShardFailure>, Vec<ShardSearchFailure>), ProjectionError> {
        let mut legacy = Vec::with_capacity(grouped.len());
        let mut current = Vec::new();

        for failure in grouped {
            tracing::trace!(shard = failure.shard(), kind = %failure.kind(), "routing failure");

            match failure {
                FailureRecord::SearchShard(search) => {
                    let proto = search_failure_to_proto(&self.renderer, search)?;
                    legacy.push(ShardFailure::from(proto.clone()));
                    current.push(proto);
                }
                FailureRecord::GenericOperation(op) => {
                    legacy.push(operation_failure_to_legacy_proto(&self.renderer, op)?);
                }
            }
        }

        Ok((legacy, current))
    }

    /// [`project`](Self::project) from bare counters; a negative `skipped`
    /// means the skip count was not tracked.
    ///
    /// # Errors
    /// Returns [`ProjectionError::Rendering`] if any grouped failure's cause
    /// cannot be rendered.
    pub fn project_counts(
        &self,
        total: i32,
        successful: i32,
        skipped: i32,
        failed: i32,
        failures: Option<&[FailureRecord]>,
    ) -> Result<ShardStatistics, ProjectionError> {
        let summary = ShardOutcomeSummary::new(total, successful, failed).with_skipped(skipped);
        self.project(&summary, failures)
    }
}
