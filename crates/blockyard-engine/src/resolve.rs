//! Conflict resolution for placements and moves.
//!
//! Two policies, deliberately distinct:
//!
//! - **Create** ([`resolve_placement`]): accept the desired cell if free,
//!   otherwise search its neighbourhood and accept the first free cell, or
//!   fail with [`PlacementError::Exhausted`].
//! - **Move** ([`resolve_move`]): accept the desired cell if no *other*
//!   object holds it, otherwise fail with [`PlacementError::Occupied`].
//!   No search.

use crate::occupancy::Occupancy;
use blockyard_core::{Cell, ObjectId, Offset, PlacementError};
use blockyard_lattice::Lattice;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Order in which equally-near free neighbours are tried.
///
/// Every candidate in the search neighbourhood is at Chebyshev distance 1
/// from the desired cell, so any free candidate is a nearest one; the
/// strategy only decides between them.
#[derive(Clone, Debug)]
pub enum TieBreak {
    /// Shuffle the neighbourhood on every call. Repeated calls with the same
    /// inputs may return different (always free) cells.
    Random(ChaCha8Rng),
    /// Try candidates by ascending Euclidean length of the offset (face
    /// neighbours, then edge, then corner), ties in neighbourhood table
    /// order. Repeated calls with the same inputs return the same cell.
    DeterministicNearest,
}

impl TieBreak {
    /// Random tie-break seeded from the thread-local generator.
    pub fn random() -> Self {
        Self::Random(ChaCha8Rng::from_rng(&mut rand::rng()))
    }

    /// Random tie-break with a reproducible seed.
    pub fn seeded(seed: u64) -> Self {
        Self::Random(ChaCha8Rng::seed_from_u64(seed))
    }

    /// `true` for [`TieBreak::DeterministicNearest`].
    pub fn is_deterministic(&self) -> bool {
        matches!(self, Self::DeterministicNearest)
    }

    fn order(&mut self, offsets: &mut [Offset]) {
        match self {
            Self::Random(rng) => offsets.shuffle(rng),
            // Stable sort keeps table order among equal lengths.
            Self::DeterministicNearest => offsets.sort_by_key(Offset::length_squared),
        }
    }
}

/// Find a cell for a new object that wants `desired`.
///
/// Returns `desired` itself when it is free. Otherwise probes the
/// lattice's [search neighbourhood](Lattice::search_offsets) in the order
/// chosen by `tie_break` and returns the first free cell: at most 27
/// occupancy probes in total. Pinned axes never move, so with the vertical
/// axis fixed the search stays on the build plane. Candidates beyond the
/// `i32` index range do not exist and are skipped.
///
/// `exclude` is normally `None` (the object does not exist yet).
///
/// # Errors
///
/// [`PlacementError::Exhausted`] if `desired` and every searched neighbour
/// are occupied. Nothing is mutated either way.
///
/// # Examples
///
/// ```
/// use blockyard_core::{Cell, ObjectId, ObjectSet, PlacedObject};
/// use blockyard_engine::{resolve_placement, TieBreak};
/// use blockyard_lattice::Lattice;
///
/// let lattice = Lattice::default();
/// let objects: ObjectSet = [PlacedObject::new(ObjectId(1), Cell::ORIGIN, 0)]
///     .into_iter()
///     .collect();
///
/// let mut tie_break = TieBreak::DeterministicNearest;
/// let cell = resolve_placement(&objects, None, Cell::ORIGIN, &lattice, &mut tie_break).unwrap();
/// assert_eq!(cell, Cell::new(-1, 0, 0));
/// ```
pub fn resolve_placement<O: Occupancy + ?Sized>(
    objects: &O,
    exclude: Option<ObjectId>,
    desired: Cell,
    lattice: &Lattice,
    tie_break: &mut TieBreak,
) -> Result<Cell, PlacementError> {
    if !objects.is_occupied(&desired, exclude) {
        return Ok(desired);
    }

    let mut offsets = lattice.search_offsets();
    tie_break.order(&mut offsets);

    offsets
        .iter()
        .filter_map(|&offset| desired.checked_add(offset))
        .find(|candidate| !objects.is_occupied(candidate, exclude))
        .ok_or(PlacementError::Exhausted { desired })
}

/// Check a move of object `id` to `desired`.
///
/// The object's own current cell never blocks it, so moving onto the cell
/// it already occupies succeeds (a no-op for the caller).
///
/// # Errors
///
/// [`PlacementError::Occupied`] naming the blocker if a different object
/// holds `desired`.
pub fn resolve_move<O: Occupancy + ?Sized>(
    objects: &O,
    id: ObjectId,
    desired: Cell,
) -> Result<Cell, PlacementError> {
    match objects.occupant(&desired, Some(id)) {
        Some(occupant) => Err(PlacementError::Occupied {
            cell: desired,
            occupant,
        }),
        None => Ok(desired),
    }
}
