//! Workspace configuration, validation, and error types.
//!
//! [`WorkspaceConfig`] is the constructor input for a
//! [`Workspace`](crate::Workspace). [`validate()`](WorkspaceConfig::validate)
//! checks structural invariants up front so that a constructed workspace
//! never has to.

use std::error::Error;
use std::fmt;

use blockyard_lattice::{AxisPolicy, Lattice, LatticeError};

use crate::resolve::TieBreak;

/// Number of visual variants in the stock palette (one per cube colour).
pub const DEFAULT_VARIANT_COUNT: u32 = 6;

// ── TieBreakMode ───────────────────────────────────────────────────

/// Which [`TieBreak`] strategy a workspace uses for placement conflicts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreakMode {
    /// Shuffle the search neighbourhood on every conflict.
    #[default]
    Random,
    /// Always prefer the nearest neighbour in a fixed order.
    DeterministicNearest,
}

// ── WorkspaceConfig ────────────────────────────────────────────────

/// Construction-time parameters for a [`Workspace`](crate::Workspace).
#[derive(Clone, Debug, PartialEq)]
pub struct WorkspaceConfig {
    /// Cell edge length in world units. Default: 1.0.
    pub cell_size: f64,
    /// Policy for the vertical axis; horizontal axes are always quantized.
    /// Default: pinned to elevation 0 (single-layer build plane).
    pub vertical: AxisPolicy,
    /// Conflict tie-break strategy. Default: random.
    pub tie_break: TieBreakMode,
    /// Seed for the random tie-break. `None` seeds from the thread-local
    /// generator. Ignored for deterministic tie-break. Default: `None`.
    pub seed: Option<u64>,
    /// Number of visual variants; palette entry IDs are reduced modulo this.
    /// Default: 6.
    pub variant_count: u32,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            cell_size: Lattice::DEFAULT_CELL_SIZE,
            vertical: AxisPolicy::GROUND,
            tie_break: TieBreakMode::Random,
            seed: None,
            variant_count: DEFAULT_VARIANT_COUNT,
        }
    }
}

impl WorkspaceConfig {
    /// Check structural invariants without building anything.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Lattice`] for a bad cell size or fixed elevation
    /// - [`ConfigError::ZeroVariants`] if `variant_count` is 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.lattice()?;
        if self.variant_count == 0 {
            return Err(ConfigError::ZeroVariants);
        }
        Ok(())
    }

    /// The lattice described by this configuration.
    pub fn lattice(&self) -> Result<Lattice, ConfigError> {
        Lattice::new(self.cell_size, self.vertical).map_err(ConfigError::Lattice)
    }

    /// A fresh tie-break strategy for this configuration.
    pub fn tie_break(&self) -> TieBreak {
        match (self.tie_break, self.seed) {
            (TieBreakMode::DeterministicNearest, _) => TieBreak::DeterministicNearest,
            (TieBreakMode::Random, Some(seed)) => TieBreak::seeded(seed),
            (TieBreakMode::Random, None) => TieBreak::random(),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`WorkspaceConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The lattice parameters are invalid.
    Lattice(LatticeError),
    /// `variant_count` is zero.
    ZeroVariants,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lattice(e) => write!(f, "lattice: {e}"),
            Self::ZeroVariants => write!(f, "variant_count must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lattice(e) => Some(e),
            Self::ZeroVariants => None,
        }
    }
}

impl From<LatticeError> for ConfigError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}
