//! Projector configuration

use crate::error::ProjectionError;
use crate::grouping::GroupingMode;
use serde::{Deserialize, Serialize};
use shardstats_model::RenderConfig;

/// Configuration for [`ResultProjector::from_config`](crate::ResultProjector::from_config)
///
/// ```toml
/// grouping = "by_shard_and_cause"
///
/// [render]
/// include_stack_trace = true
/// max_cause_depth = 16
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectorConfig {
    /// Reason rendering
    pub render: RenderConfig,
    /// Failure grouping rule
    pub grouping: GroupingMode,
}

impl ProjectorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With render configuration
    #[inline]
    #[must_use]
    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }

    /// With grouping rule
    #[inline]
    #[must_use]
    pub fn with_grouping(mut self, grouping: GroupingMode) -> Self {
        self.grouping = grouping;
        self
    }

    /// Parse from TOML text; missing keys take their defaults
    ///
    /// # Errors
    /// Returns [`ProjectionError::Config`] for malformed TOML, unknown keys,
    /// or a zero `max_cause_depth`.
    pub fn from_toml_str(text: &str) -> Result<Self, ProjectionError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that parse but cannot work
    ///
    /// # Errors
    /// Returns [`ProjectionError::Config`] when `max_cause_depth` is zero,
    /// since no cause could ever be rendered.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if self.render.max_cause_depth == 0 {
            return Err(ProjectionError::Config(
                "render.max_cause_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
