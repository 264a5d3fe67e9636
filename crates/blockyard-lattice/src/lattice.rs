//! The [`Lattice`]: cell size plus one [`AxisPolicy`] per axis.

use crate::axis::{quantize_index, AxisPolicy};
use crate::error::LatticeError;
use crate::neighbourhood::MOORE_OFFSETS;
use blockyard_core::{Axis, Cell, Offset, Point, PointError};
use smallvec::SmallVec;

/// A regular cubic lattice.
///
/// Maps world-space points to cells and cells back to world space. Every
/// axis is either quantized from the input or pinned to a fixed elevation;
/// offsets applied to a cell (neighbour search, adjacency) are projected
/// through the same policies, so pinned axes never move.
///
/// # Examples
///
/// ```
/// use blockyard_core::{Cell, Point};
/// use blockyard_lattice::Lattice;
///
/// // Unit cells, vertical axis pinned to the ground plane.
/// let lattice = Lattice::default();
/// let cell = lattice.snap(&Point::new(2.4, 7.0, -0.6)).unwrap();
/// assert_eq!(cell, Cell::new(2, 0, -1));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Lattice {
    cell_size: f64,
    policies: [AxisPolicy; 3],
}

impl Lattice {
    /// Cell edge length used by [`Lattice::default`].
    pub const DEFAULT_CELL_SIZE: f64 = 1.0;

    /// Create a lattice that quantizes both horizontal axes and applies
    /// `vertical` to the y axis.
    ///
    /// Returns `Err(LatticeError::InvalidCellSize)` unless `cell_size` is
    /// finite and positive, and `Err(LatticeError::InvalidElevation)` for a
    /// fixed elevation that is non-finite or beyond the addressable layers.
    pub fn new(cell_size: f64, vertical: AxisPolicy) -> Result<Self, LatticeError> {
        Self::with_policies(
            cell_size,
            [AxisPolicy::Quantize, vertical, AxisPolicy::Quantize],
        )
    }

    /// Create a lattice with an explicit policy per axis, in `[x, y, z]`
    /// order.
    pub fn with_policies(cell_size: f64, policies: [AxisPolicy; 3]) -> Result<Self, LatticeError> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(LatticeError::InvalidCellSize { value: cell_size });
        }
        for policy in &policies {
            if let AxisPolicy::Fixed(elevation) = *policy {
                if !elevation.is_finite() || quantize_index(elevation, cell_size).is_none() {
                    return Err(LatticeError::InvalidElevation { value: elevation });
                }
            }
        }
        Ok(Self {
            cell_size,
            policies,
        })
    }

    /// Cell edge length in world units.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Policy applied to `axis`.
    pub fn policy(&self, axis: Axis) -> AxisPolicy {
        self.policies[axis.index()]
    }

    /// Snap a world-space point to its cell.
    ///
    /// Fails fast on NaN or infinite coordinates, including those on pinned
    /// axes: a malformed point is a caller bug and is never silently placed.
    /// A finite coordinate whose cell index does not fit in an `i32` fails
    /// with [`PointError::OutOfRange`].
    pub fn snap(&self, point: &Point) -> Result<Cell, PointError> {
        if let Some((axis, value)) = point.first_non_finite() {
            return Err(PointError::NonFinite { axis, value });
        }
        let index = |axis: Axis| {
            let value = point.get(axis);
            self.policy(axis)
                .index(value, self.cell_size)
                .ok_or(PointError::OutOfRange { axis, value })
        };
        Ok(Cell::new(index(Axis::X)?, index(Axis::Y)?, index(Axis::Z)?))
    }

    /// World-space position of a cell's centre.
    pub fn to_world(&self, cell: &Cell) -> Point {
        let s = self.cell_size;
        Point::new(
            f64::from(cell.x) * s,
            f64::from(cell.y) * s,
            f64::from(cell.z) * s,
        )
    }

    /// Zero the components of `offset` that lie on pinned axes.
    pub fn project(&self, offset: Offset) -> Offset {
        Axis::ALL
            .into_iter()
            .filter(|&axis| self.policy(axis).is_fixed())
            .fold(offset, Offset::without)
    }

    /// The cell reached from `cell` by the projected `offset`, or `None`
    /// past the edge of the index range.
    pub fn step(&self, cell: Cell, offset: Offset) -> Option<Cell> {
        cell.checked_add(self.project(offset))
    }

    /// The conflict-search neighbourhood under this lattice's policies.
    ///
    /// [`MOORE_OFFSETS`] projected through [`project`](Self::project), with
    /// offsets that collapse to zero dropped and duplicates kept only at
    /// their first position in the table. With every axis quantized this is
    /// all 26 offsets; with the vertical axis pinned it is the 8 planar
    /// ring offsets.
    pub fn search_offsets(&self) -> SmallVec<[Offset; 26]> {
        let mut out: SmallVec<[Offset; 26]> = SmallVec::new();
        for offset in MOORE_OFFSETS {
            let projected = self.project(offset);
            if !projected.is_zero() && !out.contains(&projected) {
                out.push(projected);
            }
        }
        out
    }
}

impl Default for Lattice {
    /// Unit cells on the ground build plane.
    fn default() -> Self {
        Self {
            cell_size: Self::DEFAULT_CELL_SIZE,
            policies: [AxisPolicy::Quantize, AxisPolicy::GROUND, AxisPolicy::Quantize],
        }
    }
}
