//! Placement hints: free cells adjacent to occupied ones.

use blockyard_core::{Cell, ObjectSet};
use blockyard_lattice::Adjacency;
use indexmap::IndexSet;

/// Every unoccupied cell adjacent (under `adjacency`) to an occupied cell.
///
/// Cells appear in order of first discovery: objects in creation order,
/// neighbours in the adjacency's order. Recomputed from scratch on each
/// call; linear in the number of objects.
///
/// # Examples
///
/// ```
/// use blockyard_core::{Cell, ObjectId, ObjectSet, PlacedObject};
/// use blockyard_engine::compute_highlights;
/// use blockyard_lattice::Planar4;
///
/// let objects: ObjectSet = [PlacedObject::new(ObjectId(1), Cell::ORIGIN, 0)]
///     .into_iter()
///     .collect();
/// let hints = compute_highlights(&objects, &Planar4);
/// assert_eq!(hints.len(), 4);
/// assert!(hints.contains(&Cell::new(0, 0, -1)));
/// ```
pub fn compute_highlights<A: Adjacency + ?Sized>(
    objects: &ObjectSet,
    adjacency: &A,
) -> IndexSet<Cell> {
    let occupied: IndexSet<Cell> = objects.cells().collect();
    let mut out = IndexSet::with_capacity(occupied.len() * adjacency.degree());
    for cell in &occupied {
        for nb in adjacency.neighbours(cell) {
            if !occupied.contains(&nb) {
                out.insert(nb);
            }
        }
    }
    out
}
