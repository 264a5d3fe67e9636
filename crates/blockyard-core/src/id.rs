//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a placed object within a workspace.
///
/// Opaque to callers. Allocated from a per-workspace monotonic counter via
/// [`ObjectId::next_after`], so an ID is never reused within one workspace,
/// even after the object it named has been removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

impl ObjectId {
    /// The first ID a fresh workspace hands out.
    pub const FIRST: ObjectId = ObjectId(1);

    /// The ID allocated immediately after `self`.
    pub fn next_after(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for ObjectId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
