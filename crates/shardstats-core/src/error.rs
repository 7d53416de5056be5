//! Error types for shard statistics projection

use shardstats_model::{FailureKind, RenderError};

/// Main projection error type
#[derive(Debug, thiserror::Error)]
pub enum ProjectionError {
    /// A failure's cause could not be rendered; no message is produced
    #[error("failed to render reason of {kind} failure on shard {shard}: {source}")]
    Rendering {
        /// Shard of the failure being rendered
        shard: u32,
        /// Kind of the failure being rendered
        kind: FailureKind,
        /// The underlying renderer error
        #[source]
        source: RenderError,
    },

    /// Configuration text could not be parsed
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ProjectionError {
    /// Create rendering error
    #[inline]
    pub(crate) fn rendering(shard: u32, kind: FailureKind, source: RenderError) -> Self {
        Self::Rendering {
            shard,
            kind,
            source,
        }
    }

    /// Check if the error came from the reason renderer
    #[inline]
    #[must_use]
    pub fn is_rendering(&self) -> bool {
        matches!(self, Self::Rendering { .. })
    }

    /// The renderer error, if this is a rendering failure
    #[inline]
    #[must_use]
    pub fn render_error(&self) -> Option<&RenderError> {
        match self {
            Self::Rendering { source, .. } => Some(source),
            Self::Config(_) => None,
        }
    }
}

impl From<toml::de::Error> for ProjectionError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn rendering_error_keeps_source() {
        let err = ProjectionError::rendering(
            3,
            FailureKind::SearchShard,
            RenderError::MissingTypeName { depth: 0 },
        );

        assert!(err.is_rendering());
        assert!(err.to_string().contains("search_shard failure on shard 3"));
        assert_eq!(err.render_error(), Some(&RenderError::MissingTypeName { depth: 0 }));
        assert!(err.source().is_some());
    }

    #[test]
    fn config_error_display() {
        let err = ProjectionError::Config("bad".to_string());
        assert!(!err.is_rendering());
        assert_eq!(err.render_error(), None);
        assert!(err.to_string().contains("invalid configuration"));
    }
}
