//! The session controller that owns the object set.
//!
//! [`Workspace`] is the single writer of its [`ObjectSet`]. Every mutating
//! method snaps its input, consults the engine, and either applies the
//! result and recomputes highlights, or returns an error with nothing
//! changed. The no-overlap invariant therefore holds after every call.

use indexmap::IndexSet;
use log::{debug, trace, warn};

use blockyard_core::{Cell, ObjectId, ObjectSet, Orientation, PlacedObject, Point};
use blockyard_lattice::{Lattice, Planar4};

use crate::config::{ConfigError, WorkspaceConfig};
use crate::drag::DragSession;
use crate::error::WorkspaceError;
use crate::highlight::compute_highlights;
use crate::palette::PaletteEntry;
use crate::resolve::{resolve_move, resolve_placement, TieBreak};

/// Radians of rotation per unit of normalized pointer travel.
pub const ROTATION_GAIN: f64 = 2.0;

/// A builder session: placed objects plus the derived highlight set.
///
/// # Examples
///
/// ```
/// use blockyard_core::{Cell, Point};
/// use blockyard_engine::{TieBreakMode, Workspace, WorkspaceConfig};
///
/// let mut ws = Workspace::new(WorkspaceConfig {
///     tie_break: TieBreakMode::DeterministicNearest,
///     ..WorkspaceConfig::default()
/// })
/// .unwrap();
///
/// let a = ws.place(0, Point::new(0.2, 3.0, -0.1)).unwrap();
/// assert_eq!(ws.get(a).unwrap().cell, Cell::new(0, 0, 0));
///
/// // Dropping onto the same spot lands next door.
/// let b = ws.place(1, Point::new(0.0, 0.0, 0.0)).unwrap();
/// assert_eq!(ws.get(b).unwrap().cell, Cell::new(-1, 0, 0));
/// assert!(ws.highlights().contains(&Cell::new(1, 0, 0)));
/// ```
#[derive(Debug)]
pub struct Workspace {
    lattice: Lattice,
    adjacency: Planar4,
    tie_break: TieBreak,
    variant_count: u32,
    objects: ObjectSet,
    highlights: IndexSet<Cell>,
    next_id: ObjectId,
}

impl Workspace {
    /// Create an empty workspace.
    ///
    /// # Errors
    ///
    /// Whatever [`WorkspaceConfig::validate`] reports.
    pub fn new(config: WorkspaceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            lattice: config.lattice()?,
            adjacency: Planar4,
            tie_break: config.tie_break(),
            variant_count: config.variant_count,
            objects: ObjectSet::new(),
            highlights: IndexSet::new(),
            next_id: ObjectId::FIRST,
        })
    }

    // ── Accessors ──────────────────────────────────────────────

    /// The lattice points are snapped to.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Placed objects in creation order.
    pub fn objects(&self) -> &ObjectSet {
        &self.objects
    }

    /// Look up one object.
    pub fn get(&self, id: ObjectId) -> Option<&PlacedObject> {
        self.objects.get(id)
    }

    /// Free cells adjacent to placed objects, in discovery order.
    pub fn highlights(&self) -> &IndexSet<Cell> {
        &self.highlights
    }

    /// Number of visual variants palette entries are reduced to.
    pub fn variant_count(&self) -> u32 {
        self.variant_count
    }

    /// World-space position of an object's cell.
    pub fn world_position(&self, id: ObjectId) -> Option<Point> {
        self.objects.get(id).map(|o| self.lattice.to_world(&o.cell))
    }

    // ── Creation ───────────────────────────────────────────────

    /// Create an object near the world-space `point`.
    ///
    /// The point is snapped; if its cell is taken, a free neighbour is
    /// chosen by the workspace's tie-break strategy.
    ///
    /// # Errors
    ///
    /// - [`WorkspaceError::Point`] for a non-finite or out-of-range point
    /// - [`WorkspaceError::Placement`] wrapping
    ///   [`PlacementError::Exhausted`](blockyard_core::PlacementError::Exhausted)
    ///   when the whole neighbourhood is full
    pub fn place(&mut self, variant: u32, point: Point) -> Result<ObjectId, WorkspaceError> {
        let desired = self.lattice.snap(&point)?;
        self.place_cell(variant, desired)
    }

    /// Create an object at, or next to, an already-snapped cell.
    pub fn place_cell(&mut self, variant: u32, desired: Cell) -> Result<ObjectId, WorkspaceError> {
        let cell = match resolve_placement(
            &self.objects,
            None,
            desired,
            &self.lattice,
            &mut self.tie_break,
        ) {
            Ok(cell) => cell,
            Err(e) => {
                warn!("no available cell near {desired} for a new object: {e}");
                return Err(e.into());
            }
        };

        let id = self.next_id;
        self.next_id = id.next_after();
        self.objects.insert(PlacedObject::new(id, cell, variant));
        self.refresh_highlights();
        debug!("placed object {id} (variant {variant}) at {cell}, asked for {desired}");
        Ok(id)
    }

    /// Create an object from a palette entry dropped at `point`.
    ///
    /// The object's variant is the entry's ID reduced modulo the
    /// workspace's variant count.
    pub fn drop_entry(
        &mut self,
        entry: &PaletteEntry,
        point: Point,
    ) -> Result<ObjectId, WorkspaceError> {
        self.place(entry.variant(self.variant_count), point)
    }

    // ── Moves ──────────────────────────────────────────────────

    /// Move an object to the cell containing `point`.
    ///
    /// Strict: if another object holds that cell the move is refused and
    /// the object stays where it was. Moving onto its own cell succeeds
    /// without change.
    ///
    /// # Errors
    ///
    /// - [`WorkspaceError::UnknownObject`] if `id` is not placed
    /// - [`WorkspaceError::Point`] for a non-finite or out-of-range point
    /// - [`WorkspaceError::Placement`] wrapping
    ///   [`PlacementError::Occupied`](blockyard_core::PlacementError::Occupied)
    pub fn move_object(&mut self, id: ObjectId, point: Point) -> Result<Cell, WorkspaceError> {
        self.require(id)?;
        let desired = self.lattice.snap(&point)?;
        self.move_to_cell(id, desired)
    }

    /// Move an object to an already-snapped cell. Same policy as
    /// [`move_object`](Self::move_object).
    pub fn move_to_cell(&mut self, id: ObjectId, desired: Cell) -> Result<Cell, WorkspaceError> {
        let current = self.require(id)?.cell;
        let cell = resolve_move(&self.objects, id, desired)?;
        if cell != current {
            self.objects.set_cell(id, cell);
            self.refresh_highlights();
            debug!("moved object {id} from {current} to {cell}");
        }
        Ok(cell)
    }

    // ── Drag gestures ──────────────────────────────────────────

    /// Start dragging an object.
    pub fn begin_drag(&self, id: ObjectId) -> Result<DragSession, WorkspaceError> {
        let object = self.require(id)?;
        Ok(DragSession::new(id, object.cell))
    }

    /// Update a drag with the pointer's current world-space position.
    ///
    /// The preview follows the pointer only onto cells no other object
    /// holds; otherwise it stays put for this update and the conflict is
    /// returned. The object set is never modified.
    pub fn drag_to(&self, session: &mut DragSession, point: Point) -> Result<Cell, WorkspaceError> {
        self.require(session.id())?;
        let desired = self.lattice.snap(&point)?;
        match resolve_move(&self.objects, session.id(), desired) {
            Ok(cell) => {
                session.set_preview(cell);
                Ok(cell)
            }
            Err(e) => {
                trace!(
                    "drag of {} held at {}: {e}",
                    session.id(),
                    session.preview()
                );
                Err(e.into())
            }
        }
    }

    /// Finish a drag, committing its preview cell.
    ///
    /// The preview is re-checked against the current object set; if it has
    /// been taken since, the object stays at its pre-drag cell.
    pub fn end_drag(&mut self, session: DragSession) -> Result<Cell, WorkspaceError> {
        self.move_to_cell(session.id(), session.preview())
    }

    // ── Rotation ───────────────────────────────────────────────

    /// Rotate an object by a normalized pointer delta.
    ///
    /// Horizontal travel turns the object about the vertical axis, vertical
    /// travel about the x axis, each scaled by [`ROTATION_GAIN`]. Occupancy
    /// is unaffected, so highlights are not recomputed.
    pub fn rotate(&mut self, id: ObjectId, dx: f64, dy: f64) -> Result<Orientation, WorkspaceError> {
        if !dx.is_finite() || !dy.is_finite() {
            return Err(WorkspaceError::InvalidRotation { dx, dy });
        }
        let object = self
            .objects
            .get_mut(id)
            .ok_or(WorkspaceError::UnknownObject(id))?;
        object.orientation.yaw += dx * ROTATION_GAIN;
        object.orientation.pitch += dy * ROTATION_GAIN;
        Ok(object.orientation)
    }

    // ── Removal ────────────────────────────────────────────────

    /// Delete an object, freeing its cell.
    pub fn remove(&mut self, id: ObjectId) -> Result<PlacedObject, WorkspaceError> {
        let removed = self
            .objects
            .remove(id)
            .ok_or(WorkspaceError::UnknownObject(id))?;
        self.refresh_highlights();
        debug!("removed object {id} from {}", removed.cell);
        Ok(removed)
    }

    fn require(&self, id: ObjectId) -> Result<&PlacedObject, WorkspaceError> {
        self.objects.get(id).ok_or(WorkspaceError::UnknownObject(id))
    }

    fn refresh_highlights(&mut self) {
        self.highlights = compute_highlights(&self.objects, &self.adjacency);
    }
}
