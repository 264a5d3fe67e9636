//! Blockyard: a grid-snapped placement engine for 3D block builders.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Blockyard sub-crates. For most users, adding `blockyard` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use blockyard::prelude::*;
//!
//! let mut ws = Workspace::new(WorkspaceConfig::default()).unwrap();
//! let palette = Palette::default();
//!
//! // Drop "Cube 1" near the origin. The vertical coordinate is ignored on
//! // the single-layer build plane.
//! let first = ws
//!     .drop_entry(palette.get(1).unwrap(), Point::new(0.3, 4.0, -0.2))
//!     .unwrap();
//! assert_eq!(ws.get(first).unwrap().cell, Cell::new(0, 0, 0));
//!
//! // A second drop on the same spot is moved to a free neighbouring cell.
//! let second = ws
//!     .drop_entry(palette.get(2).unwrap(), Point::new(0.0, 0.0, 0.0))
//!     .unwrap();
//! let cell = ws.get(second).unwrap().cell;
//! assert_ne!(cell, Cell::ORIGIN);
//! assert_eq!(cell.chebyshev(&Cell::ORIGIN), 1);
//!
//! // Strict moves refuse occupied cells.
//! assert!(ws.move_object(first, ws.world_position(second).unwrap()).is_err());
//!
//! // Free cells beside each object are offered as placement hints.
//! assert!(!ws.highlights().is_empty());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `blockyard-core` | IDs, cells, points, placed objects, core errors |
//! | [`lattice`] | `blockyard-lattice` | Quantization, axis policies, neighbourhoods, adjacency |
//! | [`engine`] | `blockyard-engine` | Conflict resolution, highlights, the workspace controller |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`blockyard-core`).
///
/// Contains [`types::Cell`], [`types::Point`], [`types::PlacedObject`],
/// the ordered [`types::ObjectSet`], and the error types shared by the
/// other crates.
pub use blockyard_core as types;

/// Lattice geometry (`blockyard-lattice`).
///
/// Provides [`lattice::Lattice`] for snapping, the 26-cell
/// [`lattice::MOORE_OFFSETS`] search table, and the [`lattice::Adjacency`]
/// trait with its [`lattice::Planar4`] implementation.
pub use blockyard_lattice as lattice;

/// Placement engine and workspace controller (`blockyard-engine`).
///
/// [`engine::Workspace`] drives the stateless [`engine::resolve_placement`],
/// [`engine::resolve_move`] and [`engine::compute_highlights`] functions.
pub use blockyard_engine as engine;

/// Common imports for typical Blockyard usage.
///
/// ```rust
/// use blockyard::prelude::*;
/// ```
///
/// This imports the workspace and its configuration, the palette, the core
/// geometric types, and the error types a caller needs to match on.
pub mod prelude {
    // Core types
    pub use blockyard_core::{Cell, ObjectId, ObjectSet, Orientation, PlacedObject, Point};

    // Errors
    pub use blockyard_core::{PlacementError, PointError};
    pub use blockyard_engine::{ConfigError, WorkspaceError};

    // Lattice
    pub use blockyard_lattice::{Adjacency, AxisPolicy, Lattice};

    // Engine
    pub use blockyard_engine::{
        DragSession, Palette, PaletteEntry, TieBreakMode, Workspace, WorkspaceConfig,
    };
}
