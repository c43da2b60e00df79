//! Configuration errors raised while setting up a draggable.

use crate::host::NodeId;

/// Errors that make a drag configuration unusable.
///
/// These are only produced by construction and reconfiguration. Pointer
/// handlers absorb every failure locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragError {
    /// The bounds selector or element matched nothing.
    BoundsNotFound(String),
    /// `handle` and `cancel` are the same selector, so no drag could ever start.
    HandleCancelConflict(String),
    /// Every handle sits inside a cancel zone (or the cancel zone wraps the element).
    CancelCoversHandle,
    /// The node to make draggable is not part of the host.
    NodeNotFound(NodeId),
}

impl std::fmt::Display for DragError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DragError::BoundsNotFound(spec) => write!(f, "Bounds '{}' matched no element", spec),
            DragError::HandleCancelConflict(selector) => write!(
                f,
                "Handle and cancel share the selector '{}'; dragging could never start",
                selector
            ),
            DragError::CancelCoversHandle => {
                write!(f, "Every handle is nested inside a cancel zone")
            }
            DragError::NodeNotFound(id) => write!(f, "Node {:?} not found", id),
        }
    }
}

impl std::error::Error for DragError {}

/// Result type for drag configuration.
pub type DragResult<T> = Result<T, DragError>;
