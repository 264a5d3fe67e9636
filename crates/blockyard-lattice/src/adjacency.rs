//! Adjacency relations used for placement highlighting.

use crate::neighbourhood::PLANAR_OFFSETS;
use blockyard_core::Cell;
use smallvec::SmallVec;

/// Which cells count as adjacent to an occupied cell.
///
/// The highlighter asks an `Adjacency` for the neighbours of every occupied
/// cell and surfaces the free ones as placement hints. Implementations must
/// be symmetric (`b` adjacent to `a` implies `a` adjacent to `b`), must not
/// list a cell as its own neighbour, and must return neighbours in a
/// deterministic order.
///
/// Only [`Planar4`] ships today. A 6-connected variant that also offers
/// the cells directly above and below would slot in here once multi-layer
/// stacking is supported.
pub trait Adjacency {
    /// Maximum number of neighbours any cell can have.
    fn degree(&self) -> usize;

    /// Neighbours of `cell`, in a deterministic implementation-defined order.
    fn neighbours(&self, cell: &Cell) -> SmallVec<[Cell; 8]>;
}

/// 4-connected adjacency within a horizontal layer.
///
/// Neighbours are one cell away along +x, -x, +z and -z; the vertical index
/// is carried over unchanged. Cells on the edge of the `i32` index range
/// have fewer neighbours; every other cell has exactly four.
///
/// # Examples
///
/// ```
/// use blockyard_core::Cell;
/// use blockyard_lattice::{Adjacency, Planar4};
///
/// let n = Planar4.neighbours(&Cell::new(0, 0, 0));
/// assert_eq!(
///     n.as_slice(),
///     &[Cell::new(1, 0, 0), Cell::new(-1, 0, 0), Cell::new(0, 0, 1), Cell::new(0, 0, -1)]
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Planar4;

impl Adjacency for Planar4 {
    fn degree(&self) -> usize {
        PLANAR_OFFSETS.len()
    }

    fn neighbours(&self, cell: &Cell) -> SmallVec<[Cell; 8]> {
        PLANAR_OFFSETS
            .iter()
            .filter_map(|&o| cell.checked_add(o))
            .collect()
    }
}

impl<A: Adjacency + ?Sized> Adjacency for &A {
    fn degree(&self) -> usize {
        (**self).degree()
    }

    fn neighbours(&self, cell: &Cell) -> SmallVec<[Cell; 8]> {
        (**self).neighbours(cell)
    }
}
