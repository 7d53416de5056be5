//! shardstats Core
//!
//! Builds shard statistics messages that legacy and current consumers can
//! both read.
//!
//! # Core Concepts
//!
//! - [`FailureGrouper`]: collapses equivalent failures, keeping first-seen
//!   order
//! - [`FailureEquivalence`]: the injectable rule deciding equivalence
//! - [`ResultProjector`]: counters + failures → [`ShardStatistics`], with
//!   every failure in the legacy field and search failures also in the
//!   current field
//! - [`ProjectorConfig`]: rendering and grouping settings, loadable from TOML
//!
//! # Example
//!
//! ```rust,ignore
//! use shardstats_core::ResultProjector;
//! use shardstats_model::{FailureCause, FailureRecord, SearchShardFailure, ShardTarget};
//!
//! let failures: Vec<FailureRecord> = vec![SearchShardFailure::new(
//!     FailureCause::new("Exception").with_message("boom"),
//!     Some(ShardTarget::new("n1", "idx", 1)),
//! )
//! .into()];
//!
//! let stats = ResultProjector::new().project_counts(10, 9, -1, 1, Some(failures.as_slice()))?;
//! assert_eq!(stats.failures.len(), stats.failures_2.len());
//! assert!(stats.skipped.is_none());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod config;
mod convert;
mod error;
mod grouping;
mod projector;

pub use config::ProjectorConfig;
pub use convert::{
    error_cause, failure_reason, failure_to_legacy_proto, operation_failure_to_legacy_proto,
    search_failure_to_legacy_proto, search_failure_to_proto,
};
pub use error::ProjectionError;
pub use grouping::{
    FailureEquivalence, FailureGrouper, GroupingMode, SameIndexAndCause, SameShardAndCause,
};
pub use projector::ResultProjector;

pub use shardstats_proto::{
    ErrorCause, LegacyShardStatistics, ShardFailure, ShardSearchFailure, ShardStatistics,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for projecting shard statistics
    pub use crate::{
        FailureEquivalence, FailureGrouper, GroupingMode, ProjectionError, ProjectorConfig,
        ResultProjector, ShardStatistics,
    };
    pub use shardstats_model::{
        FailureCause, FailureRecord, GenericOperationFailure, SearchShardFailure,
        ShardOutcomeSummary, ShardTarget,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
