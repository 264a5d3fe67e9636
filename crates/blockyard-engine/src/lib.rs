//! Placement engine and workspace controller for Blockyard.
//!
//! The engine is a set of stateless functions over an object set:
//!
//! - [`occupancy`]: exact-cell occupancy tests ([`Occupancy`], [`is_occupied`])
//! - [`resolve`]: conflict resolution for new objects
//!   ([`resolve_placement`]) and strict moves ([`resolve_move`])
//! - [`highlight`]: placement hints around occupied cells
//!   ([`compute_highlights`])
//!
//! [`Workspace`] owns the object set and drives those functions on every
//! create, move, drag, rotate and remove, keeping the highlight set current.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod drag;
pub mod error;
pub mod highlight;
pub mod occupancy;
pub mod palette;
pub mod resolve;
pub mod workspace;

pub use config::{ConfigError, TieBreakMode, WorkspaceConfig};
pub use drag::DragSession;
pub use error::WorkspaceError;
pub use highlight::compute_highlights;
pub use occupancy::{is_occupied, Occupancy};
pub use palette::{Palette, PaletteEntry};
pub use resolve::{resolve_move, resolve_placement, TieBreak};
pub use workspace::{Workspace, ROTATION_GAIN};
