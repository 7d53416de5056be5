//! Per-shard failure records
//!
//! A [`FailureRecord`] is one of two kinds:
//!
//! - [`GenericOperationFailure`]: a failure of any shard-level operation,
//!   which knows whether the failing copy was the primary
//! - [`SearchShardFailure`]: a failure while searching a shard copy, which
//!   has no notion of primary

use crate::cause::FailureCause;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The shard copy a search request was sent to
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShardTarget {
    /// Node holding the shard copy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    /// Index name
    pub index: String,
    /// Shard number within the index
    pub shard: u32,
}

impl ShardTarget {
    /// Create target on a known node
    #[inline]
    #[must_use]
    pub fn new(node_id: impl Into<String>, index: impl Into<String>, shard: u32) -> Self {
        Self {
            node_id: Some(node_id.into()),
            index: index.into(),
            shard,
        }
    }

    /// Create target whose node is unknown
    #[inline]
    #[must_use]
    pub fn unassigned(index: impl Into<String>, shard: u32) -> Self {
        Self {
            node_id: None,
            index: index.into(),
            shard,
        }
    }
}

/// Failure of a shard-level operation other than search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericOperationFailure {
    /// Shard number
    pub shard: u32,
    /// Index name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    /// Node the failure is attributable to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
    /// Whether the failing copy was the primary
    #[serde(default)]
    pub primary: bool,
    /// Status name, e.g. `INTERNAL_SERVER_ERROR`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// What went wrong
    pub cause: FailureCause,
}

impl GenericOperationFailure {
    /// Create failure on a replica copy with no index or node attribution
    #[inline]
    #[must_use]
    pub fn new(shard: u32, cause: FailureCause) -> Self {
        Self {
            shard,
            index: None,
            node_id: None,
            primary: false,
            status: None,
            cause,
        }
    }

    /// With index
    #[inline]
    #[must_use]
    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    /// With node
    #[inline]
    #[must_use]
    pub fn with_node(mut self, node_id: impl Into<String>) -> Self {
        self.node_id = Some(node_id.into());
        self
    }

    /// Mark the failing copy as primary
    #[inline]
    #[must_use]
    pub fn on_primary(mut self) -> Self {
        self.primary = true;
        self
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

/// Failure while searching a shard copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchShardFailure {
    /// Where the search was sent; absent when the failure happened before a
    /// target was picked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ShardTarget>,
    /// What went wrong
    pub cause: FailureCause,
}

impl SearchShardFailure {
    /// Create search failure
    #[inline]
    #[must_use]
    pub fn new(cause: FailureCause, target: Option<ShardTarget>) -> Self {
        Self { target, cause }
    }

    /// Shard number.
    ///
    /// `0` when there is no target, which on the wire is indistinguishable
    /// from a failure on shard `0`; check [`target`](Self::target) to tell
    /// them apart.
    #[inline]
    #[must_use]
    pub fn shard(&self) -> u32 {
        self.target.as_ref().map_or(0, |t| t.shard)
    }

    /// Index name, only known through the target
    #[inline]
    #[must_use]
    pub fn index(&self) -> Option<&str> {
        self.target.as_ref().map(|t| t.index.as_str())
    }

    /// Node the failing copy lives on
    #[inline]
    #[must_use]
    pub fn node_id(&self) -> Option<&str> {
        self.target.as_ref().and_then(|t| t.node_id.as_deref())
    }
}

/// Kind tag of a [`FailureRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// [`GenericOperationFailure`]
    GenericOperation,
    /// [`SearchShardFailure`]
    SearchShard,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GenericOperation => f.write_str("generic_operation"),
            Self::SearchShard => f.write_str("search_shard"),
        }
    }
}

/// A per-shard failure of either kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureRecord {
    /// Non-search operation failure
    GenericOperation(GenericOperationFailure),
    /// Search failure
    SearchShard(SearchShardFailure),
}

impl FailureRecord {
    /// Kind tag
    #[inline]
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::GenericOperation(_) => FailureKind::GenericOperation,
            Self::SearchShard(_) => FailureKind::SearchShard,
        }
    }

    /// Shard number
    #[inline]
    #[must_use]
    pub fn shard(&self) -> u32 {
        match self {
            Self::GenericOperation(f) => f.shard,
            Self::SearchShard(f) => f.shard(),
        }
    }

    /// Index name as reported by the failure
    #[inline]
    #[must_use]
    pub fn index(&self) -> Option<&str> {
        match self {
            Self::GenericOperation(f) => f.index.as_deref(),
            Self::SearchShard(f) => f.index(),
        }
    }

    /// Node id, when the failure is attributable to a node
    #[inline]
    #[must_use]
    pub fn node_id(&self) -> Option<&str> {
        match self {
            Self::GenericOperation(f) => f.node_id.as_deref(),
            Self::SearchShard(f) => f.node_id(),
        }
    }

    /// Whether the failing copy was the primary; always `false` for search
    /// failures
    #[inline]
    #[must_use]
    pub fn primary(&self) -> bool {
        match self {
            Self::GenericOperation(f) => f.primary,
            Self::SearchShard(_) => false,
        }
    }

    /// Cause of the failure
    #[inline]
    #[must_use]
    pub fn cause(&self) -> &FailureCause {
        match self {
            Self::GenericOperation(f) => &f.cause,
            Self::SearchShard(f) => &f.cause,
        }
    }

    /// Whether this is a search failure
    #[inline]
    #[must_use]
    pub fn is_search(&self) -> bool {
        matches!(self, Self::SearchShard(_))
    }
}

impl From<GenericOperationFailure> for FailureRecord {
    fn from(failure: GenericOperationFailure) -> Self {
        Self::GenericOperation(failure)
    }
}

impl From<SearchShardFailure> for FailureRecord {
    fn from(failure: SearchShardFailure) -> Self {
        Self::SearchShard(failure)
    }
}
