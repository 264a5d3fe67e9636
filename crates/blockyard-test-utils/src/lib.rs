//! Test utilities and fixtures for Blockyard development.
//!
//! Provides object-set builders for common occupancy layouts
//! ([`set_at`], [`ring`], [`filled_block`]) and [`PointWalk`], a
//! reproducible generator of world-space points for scenario tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{filled_block, ring, set_at, PointWalk};
