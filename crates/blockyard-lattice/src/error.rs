//! Error types for lattice construction.

use std::fmt;

/// Errors arising from lattice construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LatticeError {
    /// The cell size is zero, negative, NaN or infinite.
    InvalidCellSize {
        /// The rejected value.
        value: f64,
    },
    /// A fixed-axis elevation is NaN or infinite.
    InvalidElevation {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCellSize { value } => {
                write!(f, "cell size must be finite and > 0, got {value}")
            }
            Self::InvalidElevation { value } => {
                write!(f, "fixed elevation must be finite, got {value}")
            }
        }
    }
}

impl std::error::Error for LatticeError {}
