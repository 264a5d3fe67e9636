//! Workspace operation errors.

use blockyard_core::{ObjectId, PlacementError, PointError};
use std::error::Error;
use std::fmt;

/// Why a [`Workspace`](crate::Workspace) operation was refused.
///
/// Every variant is recoverable: a refused operation leaves the object set
/// and highlight set exactly as they were.
#[derive(Clone, Debug, PartialEq)]
pub enum WorkspaceError {
    /// The engine refused the placement or move.
    Placement(PlacementError),
    /// The world-space point could not be snapped.
    Point(PointError),
    /// No object with this ID exists (never created, or removed).
    UnknownObject(ObjectId),
    /// A rotation delta is NaN or infinite.
    InvalidRotation {
        /// Horizontal pointer delta.
        dx: f64,
        /// Vertical pointer delta.
        dy: f64,
    },
}

impl fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placement(e) => write!(f, "placement refused: {e}"),
            Self::Point(e) => write!(f, "invalid point: {e}"),
            Self::UnknownObject(id) => write!(f, "unknown object {id}"),
            Self::InvalidRotation { dx, dy } => {
                write!(f, "rotation delta must be finite, got ({dx}, {dy})")
            }
        }
    }
}

impl Error for WorkspaceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Placement(e) => Some(e),
            Self::Point(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PlacementError> for WorkspaceError {
    fn from(e: PlacementError) -> Self {
        Self::Placement(e)
    }
}

impl From<PointError> for WorkspaceError {
    fn from(e: PointError) -> Self {
        Self::Point(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockyard_core::Cell;

    #[test]
    fn source_chains_to_placement_error() {
        let inner = PlacementError::Exhausted {
            desired: Cell::ORIGIN,
        };
        let e = WorkspaceError::from(inner);
        let source = e.source().expect("placement errors carry a source");
        assert_eq!(source.to_string(), inner.to_string());
        assert!(WorkspaceError::UnknownObject(ObjectId(3)).source().is_none());
    }

    #[test]
    fn display_wraps_inner_message() {
        let e = WorkspaceError::UnknownObject(ObjectId(3));
        assert_eq!(e.to_string(), "unknown object #3");
    }
}
