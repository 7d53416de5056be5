//! Structured failure reasons
//!
//! Provides the [`ReasonRenderer`] trait and the default
//! [`CauseChainRenderer`], which walks a [`FailureCause`] chain and produces
//! a recursive [`StructuredReason`].

use crate::cause::FailureCause;
use crate::error::RenderError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default limit on the number of nested causes rendered
pub const DEFAULT_MAX_CAUSE_DEPTH: usize = 32;

/// Serializable description of a failure cause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredReason {
    /// snake_case error type, e.g. `runtime_exception`
    pub r#type: String,
    /// Error message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Rendered stack trace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
    /// Extra details
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
    /// Suppressed errors
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suppressed: Vec<StructuredReason>,
    /// Nested cause
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caused_by: Option<Box<StructuredReason>>,
}

impl StructuredReason {
    /// Create reason with a type and message
    #[inline]
    #[must_use]
    pub fn new(r#type: impl Into<String>, reason: Option<String>) -> Self {
        Self {
            r#type: r#type.into(),
            reason,
            stack_trace: None,
            metadata: BTreeMap::new(),
            suppressed: Vec::new(),
            caused_by: None,
        }
    }

    /// The innermost reason of the chain
    #[must_use]
    pub fn root_cause(&self) -> &StructuredReason {
        let mut current = self;
        while let Some(next) = current.caused_by.as_deref() {
            current = next;
        }
        current
    }
}

/// Turns a [`FailureCause`] into a [`StructuredReason`]
pub trait ReasonRenderer {
    /// Render the cause and its chain
    ///
    /// # Errors
    /// Returns [`RenderError`] when the cause cannot be introspected.
    fn render(&self, cause: &FailureCause) -> Result<StructuredReason, RenderError>;
}

impl<R: ReasonRenderer + ?Sized> ReasonRenderer for &R {
    fn render(&self, cause: &FailureCause) -> Result<StructuredReason, RenderError> {
        (**self).render(cause)
    }
}

/// Renderer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Include stack frames in the rendered reason
    pub include_stack_trace: bool,
    /// Maximum number of nested causes (suppressed causes count as nested)
    pub max_cause_depth: usize,
}

impl RenderConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With stack traces
    #[inline]
    #[must_use]
    pub fn with_stack_trace(mut self, include: bool) -> Self {
        self.include_stack_trace = include;
        self
    }

    /// With maximum cause depth
    #[inline]
    #[must_use]
    pub fn with_max_cause_depth(mut self, depth: usize) -> Self {
        self.max_cause_depth = depth;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            include_stack_trace: false,
            max_cause_depth: DEFAULT_MAX_CAUSE_DEPTH,
        }
    }
}

/// Default renderer: walks the cause chain recursively
#[derive(Debug, Clone, Copy, Default)]
pub struct CauseChainRenderer {
    config: RenderConfig,
}

impl CauseChainRenderer {
    /// Create renderer with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create renderer with configuration
    #[inline]
    #[must_use]
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn render_at(
        &self,
        cause: &FailureCause,
        depth: usize,
    ) -> Result<StructuredReason, RenderError> {
        if depth >= self.config.max_cause_depth {
            return Err(RenderError::CauseChainTooDeep {
                limit: self.config.max_cause_depth,
            });
        }

        let name = exception_name(&cause.type_name);
        if name.is_empty() {
            return Err(RenderError::MissingTypeName { depth });
        }

        let mut reason = StructuredReason::new(name, cause.message.clone());
        reason.metadata = cause.metadata.clone();
        if let Some(index) = &cause.index {
            reason.metadata.insert("index".to_string(), index.clone());
        }
        if self.config.include_stack_trace && !cause.stack.is_empty() {
            reason.stack_trace = Some(cause.stack.join("\n"));
        }

        reason.suppressed = cause
            .suppressed
            .iter()
            .map(|s| self.render_at(s, depth + 1))
            .collect::<Result<_, _>>()?;

        if let Some(source) = cause.source.as_deref() {
            reason.caused_by = Some(Box::new(self.render_at(source, depth + 1)?));
        }

        Ok(reason)
    }
}

impl ReasonRenderer for CauseChainRenderer {
    fn render(&self, cause: &FailureCause) -> Result<StructuredReason, RenderError> {
        self.render_at(cause, 0)
    }
}

/// Underscore-cased name of an error type, without its module/package path.
///
/// Every uppercase letter after the first is preceded by `_`, so acronyms
/// split per letter: `IOException` becomes `i_o_exception`.
#[must_use]
pub fn exception_name(type_name: &str) -> String {
    let simple = type_name
        .rsplit(|c: char| c == '.' || c == ':')
        .next()
        .unwrap_or(type_name)
        .trim();

    let mut out = String::with_capacity(simple.len() + 4);
    for (i, c) in simple.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exception_name_strips_path_and_snake_cases() {
        assert_eq!(exception_name("java.lang.RuntimeException"), "runtime_exception");
        assert_eq!(exception_name("std::io::TimeoutError"), "timeout_error");
        assert_eq!(exception_name("Exception"), "exception");
        assert_eq!(exception_name("IOException"), "i_o_exception");
        assert_eq!(exception_name("Http2Error"), "http2_error");
        assert_eq!(
            exception_name("search_phase_execution_exception"),
            "search_phase_execution_exception"
        );
        assert_eq!(exception_name(""), "");
        assert_eq!(exception_name("a.b."), "");
    }

    #[test]
    fn renders_message_and_type() {
        let cause = FailureCause::new("java.lang.Exception").with_message("boom");
        let reason = CauseChainRenderer::new().render(&cause).unwrap();

        assert_eq!(reason, StructuredReason::new("exception", Some("boom".to_string())));
    }

    #[test]
    fn renders_nested_causes() {
        let cause = FailureCause::new("SearchPhaseExecutionException")
            .with_message("all shards failed")
            .caused_by(
                FailureCause::new("CircuitBreakingException")
                    .with_message("data too large")
                    .with_index("logs"),
            );

        let reason = CauseChainRenderer::new().render(&cause).unwrap();
        let inner = reason.caused_by.as_deref().unwrap();

        assert_eq!(reason.r#type, "search_phase_execution_exception");
        assert_eq!(inner.r#type, "circuit_breaking_exception");
        assert_eq!(inner.metadata.get("index").map(String::as_str), Some("logs"));
        assert_eq!(reason.root_cause().reason.as_deref(), Some("data too large"));
    }

    #[test]
    fn stack_trace_only_when_enabled() {
        let cause = FailureCause::new("Exception").with_stack(["f1", "f2"]);

        let plain = CauseChainRenderer::new().render(&cause).unwrap();
        assert_eq!(plain.stack_trace, None);

        let traced = CauseChainRenderer::with_config(RenderConfig::new().with_stack_trace(true))
            .render(&cause)
            .unwrap();
        assert_eq!(traced.stack_trace.as_deref(), Some("f1\nf2"));
    }

    #[test]
    fn suppressed_causes_are_rendered() {
        let cause = FailureCause::new("Exception")
            .with_suppressed(FailureCause::new("IllegalArgumentException").with_message("x"));

        let reason = CauseChainRenderer::new().render(&cause).unwrap();
        assert_eq!(reason.suppressed.len(), 1);
        assert_eq!(reason.suppressed[0].r#type, "illegal_argument_exception");
    }

    #[test]
    fn missing_type_name_fails() {
        let cause = FailureCause::new("Exception").caused_by(FailureCause::new("  "));
        let err = CauseChainRenderer::new().render(&cause).unwrap_err();
        assert_eq!(err, RenderError::MissingTypeName { depth: 1 });
    }

    #[test]
    fn chain_deeper_than_limit_fails() {
        let renderer = CauseChainRenderer::with_config(RenderConfig::new().with_max_cause_depth(2));

        let two = FailureCause::new("A").caused_by(FailureCause::new("B"));
        assert!(renderer.render(&two).is_ok());

        let three = FailureCause::new("A").caused_by(two);
        let err = renderer.render(&three).unwrap_err();
        assert_eq!(err, RenderError::CauseChainTooDeep { limit: 2 });
    }

    #[test]
    fn renderer_by_reference() {
        fn render_with<R: ReasonRenderer>(r: R) -> StructuredReason {
            r.render(&FailureCause::new("Exception")).unwrap()
        }
        let renderer = CauseChainRenderer::new();
        assert_eq!(render_with(&renderer).r#type, "exception");
    }
}
