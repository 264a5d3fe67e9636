//! Lattice geometry for Blockyard.
//!
//! This crate maps continuous world-space points onto the discrete 3D
//! lattice and describes which cells count as neighbours.
//!
//! # Quantization
//!
//! [`quantize`] and [`quantize_index`] round one coordinate to the nearest
//! lattice line. A [`Lattice`] applies them per axis under an
//! [`AxisPolicy`]: an axis is either snapped from the input or pinned to a
//! fixed elevation (the single-layer build plane pins the vertical axis).
//!
//! # Neighbourhoods
//!
//! [`MOORE_OFFSETS`] is the 26-cell neighbourhood used when a placement
//! conflicts; [`Lattice::search_offsets`] projects it through the axis
//! policy. The [`Adjacency`] trait describes which cells are highlighted
//! around an occupied one; [`Planar4`] is the 4-connected build-plane
//! adjacency.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod axis;
pub mod error;
pub mod lattice;
pub mod neighbourhood;

#[cfg(test)]
pub(crate) mod compliance;

pub use adjacency::{Adjacency, Planar4};
pub use axis::{quantize, quantize_index, AxisPolicy};
pub use error::LatticeError;
pub use lattice::Lattice;
pub use neighbourhood::{MOORE_OFFSETS, PLANAR_OFFSETS};
