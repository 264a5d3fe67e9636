//! Lattice cells, world-space points and neighbourhood offsets.

use std::fmt;

/// One of the three world axes.
///
/// `Y` is the vertical axis; the build plane spans `X` and `Z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
    /// Horizontal axis, perpendicular to `X`.
    Z,
}

impl Axis {
    /// All axes in storage order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Storage index of this axis (`X = 0`, `Y = 1`, `Z = 2`).
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// A cell of the discrete 3D lattice, addressed by integer index per axis.
///
/// The world-space position of a cell is `index * cell_size` on each axis;
/// the cell size lives on the lattice, not on the cell. Two cells are equal
/// iff all three indices match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Index along the x axis.
    pub x: i32,
    /// Index along the vertical axis.
    pub y: i32,
    /// Index along the z axis.
    pub z: i32,
}

impl Cell {
    /// The lattice origin.
    pub const ORIGIN: Cell = Cell { x: 0, y: 0, z: 0 };

    /// Construct a cell from its three indices.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Index along `axis`.
    pub fn get(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Chebyshev (L∞) distance in cells.
    pub fn chebyshev(&self, other: &Cell) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        let dz = (self.z - other.z).unsigned_abs();
        dx.max(dy).max(dz)
    }

    /// The cell one `offset` away, or `None` if any index would leave the
    /// `i32` range.
    pub fn checked_add(self, offset: Offset) -> Option<Cell> {
        Some(Cell {
            x: self.x.checked_add(i32::from(offset.dx))?,
            y: self.y.checked_add(i32::from(offset.dy))?,
            z: self.z.checked_add(i32::from(offset.dz))?,
        })
    }
}


impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<[i32; 3]> for Cell {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self { x, y, z }
    }
}

/// A unit step between neighbouring cells; each component is -1, 0 or 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Offset {
    /// Step along x.
    pub dx: i8,
    /// Step along the vertical axis.
    pub dy: i8,
    /// Step along z.
    pub dz: i8,
}

impl Offset {
    /// The zero step.
    pub const ZERO: Offset = Offset {
        dx: 0,
        dy: 0,
        dz: 0,
    };

    /// Construct an offset from its components.
    pub const fn new(dx: i8, dy: i8, dz: i8) -> Self {
        Self { dx, dy, dz }
    }

    /// `true` for the zero step.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Squared Euclidean length, in cells.
    pub fn length_squared(&self) -> u32 {
        let sq = |v: i8| (i32::from(v) * i32::from(v)) as u32;
        sq(self.dx) + sq(self.dy) + sq(self.dz)
    }

    /// This offset with the component along `axis` zeroed.
    pub fn without(self, axis: Axis) -> Self {
        match axis {
            Axis::X => Self { dx: 0, ..self },
            Axis::Y => Self { dy: 0, ..self },
            Axis::Z => Self { dz: 0, ..self },
        }
    }
}

/// A continuous world-space position.
///
/// Produced by the host's rendering layer (pointer ray already projected
/// into world space) and handed to the lattice for snapping.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// World x.
    pub x: f64,
    /// World y (vertical).
    pub y: f64,
    /// World z.
    pub z: f64,
}

impl Point {
    /// Construct a point from its coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Coordinate along `axis`.
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// The first axis whose coordinate is NaN or infinite, if any.
    pub fn first_non_finite(&self) -> Option<(Axis, f64)> {
        Axis::ALL
            .into_iter()
            .map(|axis| (axis, self.get(axis)))
            .find(|(_, v)| !v.is_finite())
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
