//! Core types for the Blockyard lattice placement engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the rest of the workspace: object identities,
//! lattice cells and world-space points, placed objects and the ordered
//! object set, and the error types that cross crate boundaries.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod object;

pub use cell::{Axis, Cell, Offset, Point};
pub use error::{PlacementError, PointError};
pub use id::ObjectId;
pub use object::{ObjectSet, Orientation, PlacedObject};
