//! Failure causes
//!
//! A [`FailureCause`] is a plain value snapshot of an error and its cause
//! chain, taken by the execution engine. It carries no live error object.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Snapshot of an error value and its nested causes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureCause {
    /// Type name of the error (may be path-qualified)
    pub type_name: String,
    /// Human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Index the error refers to, when the error itself knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    /// Stack frames, innermost first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stack: Vec<String>,
    /// Extra key/value details
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    /// Errors suppressed while handling this one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suppressed: Vec<FailureCause>,
    /// The underlying cause
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Box<FailureCause>>,
}

impl FailureCause {
    /// Create a cause with only a type name
    #[inline]
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: None,
            index: None,
            stack: Vec::new(),
            metadata: BTreeMap::new(),
            suppressed: Vec::new(),
            source: None,
        }
    }

    /// With message
    #[inline]
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// With index
    #[inline]
    #[must_use]
    pub fn with_index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    /// With stack frames
    #[inline]
    #[must_use]
    pub fn with_stack<I, S>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stack = frames.into_iter().map(Into::into).collect();
        self
    }

    /// Add metadata entry
    #[inline]
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Add suppressed cause
    #[inline]
    #[must_use]
    pub fn with_suppressed(mut self, suppressed: FailureCause) -> Self {
        self.suppressed.push(suppressed);
        self
    }

    /// With underlying cause
    #[inline]
    #[must_use]
    pub fn caused_by(mut self, source: FailureCause) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Number of causes in the chain, counting `self`
    #[must_use]
    pub fn chain_depth(&self) -> usize {
        self.chain().count()
    }

    /// Iterate over `self` and its nested causes, outermost first
    pub fn chain(&self) -> impl Iterator<Item = &FailureCause> {
        std::iter::successors(Some(self), |cause| cause.source.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let cause = FailureCause::new("IllegalStateException")
            .with_message("bad state")
            .with_index("logs")
            .with_stack(["a.b(C.java:1)", "d.e(F.java:2)"])
            .with_metadata("phase", "query");

        assert_eq!(cause.type_name, "IllegalStateException");
        assert_eq!(cause.message.as_deref(), Some("bad state"));
        assert_eq!(cause.index.as_deref(), Some("logs"));
        assert_eq!(cause.stack.len(), 2);
        assert_eq!(cause.metadata.get("phase").map(String::as_str), Some("query"));
    }

    #[test]
    fn chain_walks_sources() {
        let cause = FailureCause::new("Outer")
            .caused_by(FailureCause::new("Middle").caused_by(FailureCause::new("Inner")));

        let names: Vec<_> = cause.chain().map(|c| c.type_name.as_str()).collect();
        assert_eq!(names, ["Outer", "Middle", "Inner"]);
        assert_eq!(cause.chain_depth(), 3);
    }

    #[test]
    fn json_omits_empty_parts() {
        let json = serde_json::to_value(FailureCause::new("X")).unwrap();
        assert_eq!(json, serde_json::json!({ "type_name": "X" }));
    }
}
