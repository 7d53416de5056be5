//! Per-kind failure conversion
//!
//! Turns model failures into wire records. Reasons go through a
//! [`ReasonRenderer`] first, then through [`error_cause`] to get their wire
//! shape.

use crate::error::ProjectionError;
use shardstats_model::{
    FailureCause, FailureKind, FailureRecord, GenericOperationFailure, ReasonRenderer,
    SearchShardFailure, StructuredReason,
};
use shardstats_proto::{ErrorCause, ShardFailure, ShardSearchFailure};

/// Wire form of a rendered reason
#[must_use]
pub fn error_cause(reason: StructuredReason) -> ErrorCause {
    ErrorCause {
        r#type: reason.r#type,
        reason: reason.reason,
        stack_trace: reason.stack_trace,
        caused_by: reason.caused_by.map(|inner| Box::new(error_cause(*inner))),
        metadata: reason.metadata,
        suppressed: reason.suppressed.into_iter().map(error_cause).collect(),
    }
}

fn render_reason<R: ReasonRenderer>(
    renderer: &R,
    cause: &FailureCause,
    shard: u32,
    kind: FailureKind,
) -> Result<ErrorCause, ProjectionError> {
    renderer
        .render(cause)
        .map(error_cause)
        .map_err(|source| ProjectionError::rendering(shard, kind, source))
}

/// Search failure in the current schema
///
/// # Errors
/// Returns [`ProjectionError::Rendering`] when the cause cannot be rendered.
pub fn search_failure_to_proto<R: ReasonRenderer>(
    renderer: &R,
    failure: &SearchShardFailure,
) -> Result<ShardSearchFailure, ProjectionError> {
    let reason = render_reason(
        renderer,
        &failure.cause,
        failure.shard(),
        FailureKind::SearchShard,
    )?;

    Ok(ShardSearchFailure {
        index: failure.index().map(str::to_owned),
        node: failure.node_id().map(str::to_owned),
        reason: Some(reason),
        shard: failure.shard(),
    })
}

/// Search failure in the legacy schema; `primary` stays `false`
///
/// # Errors
/// Returns [`ProjectionError::Rendering`] when the cause cannot be rendered.
pub fn search_failure_to_legacy_proto<R: ReasonRenderer>(
    renderer: &R,
    failure: &SearchShardFailure,
) -> Result<ShardFailure, ProjectionError> {
    search_failure_to_proto(renderer, failure).map(ShardFailure::from)
}

/// Non-search failure in the legacy schema
///
/// # Errors
/// Returns [`ProjectionError::Rendering`] when the cause cannot be rendered.
pub fn operation_failure_to_legacy_proto<R: ReasonRenderer>(
    renderer: &R,
    failure: &GenericOperationFailure,
) -> Result<ShardFailure, ProjectionError> {
    let reason = render_reason(
        renderer,
        &failure.cause,
        failure.shard,
        FailureKind::GenericOperation,
    )?;

    Ok(ShardFailure {
        index: failure.index.clone(),
        node: failure.node_id.clone(),
        reason: Some(reason),
        shard: failure.shard,
        status: failure.status.clone(),
        primary: failure.primary,
    })
}

/// Any failure in the legacy schema
///
/// # Errors
/// Returns [`ProjectionError::Rendering`] when the cause cannot be rendered.
pub fn failure_to_legacy_proto<R: ReasonRenderer>(
    renderer: &R,
    failure: &FailureRecord,
) -> Result<ShardFailure, ProjectionError> {
    match failure {
        FailureRecord::GenericOperation(op) => operation_failure_to_legacy_proto(renderer, op),
        FailureRecord::SearchShard(search) => search_failure_to_legacy_proto(renderer, search),
    }
}

/// Rendered reason of any failure in wire form
///
/// # Errors
/// Returns [`ProjectionError::Rendering`] when the cause cannot be rendered.
pub fn failure_reason<R: ReasonRenderer>(
    renderer: &R,
    failure: &FailureRecord,
) -> Result<ErrorCause, ProjectionError> {
    render_reason(renderer, failure.cause(), failure.shard(), failure.kind())
}
