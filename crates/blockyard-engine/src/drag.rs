//! In-progress translate gestures.

use blockyard_core::{Cell, ObjectId};

/// The live state of one object being dragged.
///
/// Created by [`Workspace::begin_drag`](crate::Workspace::begin_drag).
/// Each [`drag_to`](crate::Workspace::drag_to) updates the preview cell
/// without touching the object set; [`end_drag`](crate::Workspace::end_drag)
/// commits the preview. Dropping the session cancels the gesture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSession {
    id: ObjectId,
    origin: Cell,
    preview: Cell,
}

impl DragSession {
    pub(crate) fn new(id: ObjectId, origin: Cell) -> Self {
        Self {
            id,
            origin,
            preview: origin,
        }
    }

    /// The object being dragged.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// The object's cell when the drag began.
    pub fn origin(&self) -> Cell {
        self.origin
    }

    /// The cell the object is currently shown at.
    pub fn preview(&self) -> Cell {
        self.preview
    }

    /// `true` if the preview has left the origin cell.
    pub fn has_moved(&self) -> bool {
        self.preview != self.origin
    }

    pub(crate) fn set_preview(&mut self, cell: Cell) {
        self.preview = cell;
    }
}
