//! Benchmark profiles and utilities for the Blockyard placement engine.
//!
//! Provides pre-built workspaces for benchmarking:
//!
//! - [`reference_profile`]: 32x32 field of objects with a regular gap pattern
//! - [`stress_profile`]: 128x128 field (~13K objects) for stress testing
//! - [`gap_cells`]: the free cells a profile leaves behind

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::error::Error;

use blockyard_core::Cell;
use blockyard_engine::{TieBreakMode, Workspace, WorkspaceConfig};

/// Error type for profile construction.
pub type ProfileError = Box<dyn Error + Send + Sync>;

/// Every `GAP_STRIDE`-th cell along each row is left empty.
pub const GAP_STRIDE: i32 = 5;

/// Config shared by all profiles: unit cells, ground plane, nearest-first
/// tie-break so runs are comparable.
pub fn bench_config() -> WorkspaceConfig {
    WorkspaceConfig {
        tie_break: TieBreakMode::DeterministicNearest,
        ..WorkspaceConfig::default()
    }
}

fn is_gap(x: i32, z: i32) -> bool {
    (x + z).rem_euclid(GAP_STRIDE) == 0
}

/// Fill a `side` x `side` square at the origin, skipping gap cells.
pub fn dense_field(side: i32) -> Result<Workspace, ProfileError> {
    let mut ws = Workspace::new(bench_config())?;
    for x in 0..side {
        for z in 0..side {
            if !is_gap(x, z) {
                ws.place_cell((x * side + z) as u32 % 6, Cell::new(x, 0, z))?;
            }
        }
    }
    Ok(ws)
}

/// Build a reference benchmark workspace: 32x32 cells, ~820 objects.
pub fn reference_profile() -> Result<Workspace, ProfileError> {
    dense_field(32)
}

/// Build a stress benchmark workspace: 128x128 cells, ~13K objects.
pub fn stress_profile() -> Result<Workspace, ProfileError> {
    dense_field(128)
}

/// The free cells inside a `side` x `side` profile.
pub fn gap_cells(side: i32) -> Vec<Cell> {
    let mut out = Vec::new();
    for x in 0..side {
        for z in 0..side {
            if is_gap(x, z) {
                out.push(Cell::new(x, 0, z));
            }
        }
    }
    out
}
