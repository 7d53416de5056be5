//! Message definitions
//!
//! Tags are part of the wire contract. Never renumber them; add new fields
//! with fresh tags.

use std::collections::BTreeMap;

/// Rendered cause of a failure
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ErrorCause {
    #[prost(string, tag = "1")]
    pub r#type: String,
    #[prost(string, optional, tag = "2")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[prost(string, optional, tag = "3")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
    #[prost(message, optional, boxed, tag = "4")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caused_by: Option<Box<ErrorCause>>,
    #[prost(btree_map = "string, string", tag = "5")]
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    #[prost(message, repeated, tag = "6")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suppressed: Vec<ErrorCause>,
}

/// Legacy failure schema, one entry per failure of any kind
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ShardFailure {
    #[prost(string, optional, tag = "1")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[prost(string, optional, tag = "2")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    #[prost(message, optional, tag = "3")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<ErrorCause>,
    #[prost(uint32, tag = "4")]
    pub shard: u32,
    /// Only set for non-search failures that report a status
    #[prost(string, optional, tag = "5")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Always `false` for search failures
    #[prost(bool, tag = "6")]
    #[serde(default)]
    pub primary: bool,
}

/// Current failure schema, search failures only
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ShardSearchFailure {
    #[prost(string, optional, tag = "1")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    #[prost(string, optional, tag = "2")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    #[prost(message, optional, tag = "3")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<ErrorCause>,
    #[prost(uint32, tag = "4")]
    pub shard: u32,
}

impl From<ShardSearchFailure> for ShardFailure {
    /// Legacy view of a search failure. `primary` keeps its default and no
    /// status is reported.
    fn from(failure: ShardSearchFailure) -> Self {
        Self {
            index: failure.index,
            node: failure.node,
            reason: failure.reason,
            shard: failure.shard,
            status: None,
            primary: false,
        }
    }
}

/// Shard statistics as sent to current consumers
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ShardStatistics {
    /// Deprecated: every failure in the legacy schema
    #[prost(message, repeated, tag = "1")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<ShardFailure>,
    #[prost(int32, tag = "2")]
    pub total: i32,
    #[prost(int32, tag = "3")]
    pub successful: i32,
    /// Unset when the skip count is not tracked
    #[prost(int32, optional, tag = "4")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped: Option<i32>,
    #[prost(int32, tag = "5")]
    pub failed: i32,
    /// Search failures in the current schema
    #[prost(message, repeated, tag = "6")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures_2: Vec<ShardSearchFailure>,
}

impl ShardStatistics {
    /// Whether the skip count is set
    #[inline]
    #[must_use]
    pub fn has_skipped(&self) -> bool {
        self.skipped.is_some()
    }

    /// The message as a legacy consumer decodes it
    #[must_use]
    pub fn to_legacy(&self) -> LegacyShardStatistics {
        LegacyShardStatistics {
            failures: self.failures.clone(),
            total: self.total,
            successful: self.successful,
            skipped: self.skipped,
            failed: self.failed,
        }
    }
}

/// Shard statistics as known to consumers that predate `failures_2`
#[derive(serde::Serialize, serde::Deserialize)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LegacyShardStatistics {
    #[prost(message, repeated, tag = "1")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<ShardFailure>,
    #[prost(int32, tag = "2")]
    pub total: i32,
    #[prost(int32, tag = "3")]
    pub successful: i32,
    #[prost(int32, optional, tag = "4")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped: Option<i32>,
    #[prost(int32, tag = "5")]
    pub failed: i32,
}
