//! The component palette objects are dragged from.

use indexmap::IndexMap;

/// One draggable component in the palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    /// Catalog ID. Also selects the visual variant of objects created from
    /// this entry.
    pub id: u32,
    /// Display label.
    pub label: String,
}

impl PaletteEntry {
    /// A new entry.
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    /// Visual variant for objects created from this entry: `id` modulo
    /// `variant_count`. A zero `variant_count` yields variant 0.
    pub fn variant(&self, variant_count: u32) -> u32 {
        self.id.checked_rem(variant_count).unwrap_or(0)
    }
}

/// An ordered catalog of [`PaletteEntry`] values keyed by ID.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    entries: IndexMap<u32, PaletteEntry>,
}

impl Palette {
    /// Number of entries in [`Palette::default`].
    pub const STOCK_SIZE: u32 = 6;

    /// An empty palette.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Add an entry at the end, or replace the entry with the same ID in
    /// place. Returns the replaced entry.
    pub fn push(&mut self, entry: PaletteEntry) -> Option<PaletteEntry> {
        self.entries.insert(entry.id, entry)
    }

    /// Look up an entry by ID.
    pub fn get(&self, id: u32) -> Option<&PaletteEntry> {
        self.entries.get(&id)
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &PaletteEntry> + '_ {
        self.entries.values()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the palette has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Palette {
    /// Six cubes, IDs 1 through 6, labelled "Cube 1" through "Cube 6".
    fn default() -> Self {
        (1..=Self::STOCK_SIZE)
            .map(|id| PaletteEntry::new(id, format!("Cube {id}")))
            .collect()
    }
}

impl FromIterator<PaletteEntry> for Palette {
    fn from_iter<I: IntoIterator<Item = PaletteEntry>>(iter: I) -> Self {
        let mut palette = Palette::new();
        for entry in iter {
            palette.push(entry);
        }
        palette
    }
}
