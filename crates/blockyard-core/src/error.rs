//! Error types shared across the Blockyard workspace.
//!
//! Placement errors are always recoverable: the caller leaves the object
//! set untouched and may report the condition to the user.

use crate::cell::{Axis, Cell};
use crate::id::ObjectId;
use std::error::Error;
use std::fmt;

/// Why a placement or move was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementError {
    /// The desired cell and every cell of its searched neighbourhood are
    /// occupied. Only raised for the creation of new objects.
    Exhausted {
        /// The cell the caller originally asked for.
        desired: Cell,
    },
    /// The target cell belongs to a different object. Raised by the strict
    /// move policy, which never searches for alternatives.
    Occupied {
        /// The contested cell.
        cell: Cell,
        /// The object currently holding it.
        occupant: ObjectId,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted { desired } => {
                write!(f, "no free cell in the neighbourhood of {desired}")
            }
            Self::Occupied { cell, occupant } => {
                write!(f, "cell {cell} is occupied by object {occupant}")
            }
        }
    }
}

impl Error for PlacementError {}

/// A world-space point that cannot be snapped to the lattice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointError {
    /// A coordinate is NaN or infinite.
    NonFinite {
        /// The offending axis.
        axis: Axis,
        /// The offending value.
        value: f64,
    },
    /// A coordinate is finite but lies beyond the addressable lattice: its
    /// cell index does not fit in an `i32`.
    OutOfRange {
        /// The offending axis.
        axis: Axis,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for PointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { axis, value } => {
                write!(f, "{axis} coordinate is not finite: {value}")
            }
            Self::OutOfRange { axis, value } => {
                write!(f, "{axis} coordinate {value} is outside the lattice")
            }
        }
    }
}

impl Error for PointError {}
