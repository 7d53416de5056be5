//! shardstats Proto
//!
//! Protobuf messages for shard statistics.
//!
//! [`ShardStatistics`] carries two parallel repeated fields:
//!
//! - `failures` ([`ShardFailure`]): the legacy schema, understood by every
//!   consumer and populated for every failure kind
//! - `failures_2` ([`ShardSearchFailure`]): the current schema, which has no
//!   `primary` field and is only populated for search failures
//!
//! Consumers built against the legacy message ([`LegacyShardStatistics`])
//! decode the same bytes and never see `failures_2`.

#![warn(unreachable_pub)]
#![allow(missing_docs)]
#![allow(clippy::derive_partial_eq_without_eq)]

mod messages;

pub use messages::{
    ErrorCause, LegacyShardStatistics, ShardFailure, ShardSearchFailure, ShardStatistics,
};

/// Re-export of [`prost::Message`] for encoding and decoding
pub use prost::Message;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
