use thiserror::Error;

use crate::logging::LoggingError;
use crate::tree::NodeId;

/// Unified result type for the crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced by tree mutation, configuration and rendering.
///
/// Navigation misses and geometry underflow are not errors: the former
/// return `None`, the latter clamp to empty rectangles.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),
    #[error("node {child} is already attached to {parent}")]
    AlreadyAttached { child: NodeId, parent: NodeId },
    #[error("attaching {child} under {parent} would create a cycle")]
    Cycle { parent: NodeId, child: NodeId },
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("logging failure: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
