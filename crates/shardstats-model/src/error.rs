//! Error types for reason rendering

/// Errors raised while rendering a [`FailureCause`](crate::FailureCause)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The cause (or one of its nested causes) has no type name
    #[error("cause at depth {depth} has no type name")]
    MissingTypeName { depth: usize },

    /// The cause chain is deeper than the renderer allows
    #[error("cause chain exceeds maximum depth of {limit}")]
    CauseChainTooDeep { limit: usize },
}

impl RenderError {
    /// Check if the error comes from the shape of the cause chain rather
    /// than a single malformed cause
    #[inline]
    #[must_use]
    pub fn is_chain_limit(&self) -> bool {
        matches!(self, Self::CauseChainTooDeep { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_error_display() {
        let err = RenderError::MissingTypeName { depth: 2 };
        assert!(err.to_string().contains("depth 2"));

        let err = RenderError::CauseChainTooDeep { limit: 8 };
        assert!(err.to_string().contains("maximum depth of 8"));
    }

    #[test]
    fn render_error_is_chain_limit() {
        assert!(RenderError::CauseChainTooDeep { limit: 1 }.is_chain_limit());
        assert!(!RenderError::MissingTypeName { depth: 0 }.is_chain_limit());
    }
}
