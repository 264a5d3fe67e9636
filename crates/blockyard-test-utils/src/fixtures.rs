//! Reusable object-set layouts and point sources.
//!
//! - [`set_at`]: one object per listed cell, IDs assigned in order.
//! - [`ring`]: the planar neighbourhood of a cell, with the centre empty.
//! - [`filled_block`]: every cell of an axis-aligned box.
//! - [`PointWalk`]: deterministic stream of jittered world-space points.

use blockyard_core::{Cell, ObjectId, ObjectSet, PlacedObject, Point};
use blockyard_lattice::Lattice;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Build an object set with one object per cell, IDs `1..=n` in order.
///
/// Duplicate cells are passed through as-is, so a caller can deliberately
/// build an overlapping set to exercise invariant checks.
pub fn set_at(cells: &[Cell]) -> ObjectSet {
    cells
        .iter()
        .enumerate()
        .map(|(i, &cell)| PlacedObject::new(ObjectId(i as u64 + 1), cell, 0))
        .collect()
}

/// The cells surrounding `center` on its own layer, centre excluded.
pub fn ring(center: Cell) -> Vec<Cell> {
    let mut out = Vec::with_capacity(8);
    for dx in -1..=1 {
        for dz in -1..=1 {
            if dx == 0 && dz == 0 {
                continue;
            }
            out.push(Cell::new(center.x + dx, center.y, center.z + dz));
        }
    }
    out
}

/// Every cell in the inclusive box spanned by `min` and `max`.
pub fn filled_block(min: Cell, max: Cell) -> Vec<Cell> {
    let mut out = Vec::new();
    for x in min.x..=max.x {
        for y in min.y..=max.y {
            for z in min.z..=max.z {
                out.push(Cell::new(x, y, z));
            }
        }
    }
    out
}

/// Deterministic stream of world-space points near lattice centres.
///
/// Each point sits within a third of a cell of some cell in a square of
/// half-width `radius` around the origin, so it snaps unambiguously. The
/// sequence depends only on the seed.
#[derive(Clone, Debug)]
pub struct PointWalk {
    rng: ChaCha8Rng,
    radius: i32,
    cell_size: f64,
}

impl PointWalk {
    pub fn new(seed: u64, radius: i32, lattice: &Lattice) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            radius: radius.max(0),
            cell_size: lattice.cell_size(),
        }
    }

    fn next_jitter(&mut self) -> f64 {
        self.rng.random_range(-1.0 / 3.0..1.0 / 3.0)
    }

    /// The cell the next point will snap to, followed by the point.
    pub fn next_pair(&mut self) -> (Cell, Point) {
        let x = self.rng.random_range(-self.radius..=self.radius);
        let z = self.rng.random_range(-self.radius..=self.radius);
        let px = (f64::from(x) + self.next_jitter()) * self.cell_size;
        let pz = (f64::from(z) + self.next_jitter()) * self.cell_size;
        let py = self.next_jitter() * self.cell_size;
        (Cell::new(x, 0, z), Point::new(px, py, pz))
    }
}

impl Iterator for PointWalk {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        Some(self.next_pair().1)
    }
}
