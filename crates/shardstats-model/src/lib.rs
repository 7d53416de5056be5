//! shardstats Model
//!
//! Value types describing the outcome of a sharded operation.
//!
//! # Core Concepts
//!
//! - [`ShardOutcomeSummary`]: total/successful/skipped/failed shard counters
//! - [`FailureRecord`]: a per-shard failure, either a generic operation
//!   failure or a search shard failure
//! - [`FailureCause`]: an error value with its nested cause chain
//! - [`StructuredReason`]: the serializable form of a cause
//! - [`ReasonRenderer`]: turns a [`FailureCause`] into a [`StructuredReason`]
//!
//! # Example
//!
//! ```rust,ignore
//! use shardstats_model::{CauseChainRenderer, FailureCause, ReasonRenderer};
//!
//! let cause = FailureCause::new("RuntimeException").with_message("boom");
//! let reason = CauseChainRenderer::new().render(&cause)?;
//! assert_eq!(reason.r#type, "runtime_exception");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod cause;
mod error;
mod failure;
mod reason;
mod summary;

pub use cause::FailureCause;
pub use error::RenderError;
pub use failure::{
    FailureKind, FailureRecord, GenericOperationFailure, SearchShardFailure, ShardTarget,
};
pub use reason::{
    exception_name, CauseChainRenderer, ReasonRenderer, RenderConfig, StructuredReason,
    DEFAULT_MAX_CAUSE_DEPTH,
};
pub use summary::ShardOutcomeSummary;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
