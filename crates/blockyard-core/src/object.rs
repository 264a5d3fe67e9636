//! Placed objects and the ordered [`ObjectSet`] that holds them.

use crate::cell::Cell;
use crate::id::ObjectId;
use indexmap::map::Entry;
use indexmap::IndexMap;

/// Visual rotation of a placed object, in radians.
///
/// Rotation is purely presentational: it never changes which cell an
/// object occupies.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    /// Rotation about the vertical axis.
    pub yaw: f64,
    /// Rotation about the horizontal x axis.
    pub pitch: f64,
}

/// An object occupying one lattice cell.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedObject {
    /// Stable identity for the object's lifetime.
    pub id: ObjectId,
    /// The occupied cell.
    pub cell: Cell,
    /// Index selecting the object's appearance.
    pub variant: u32,
    /// Current visual rotation.
    pub orientation: Orientation,
}

impl PlacedObject {
    /// A new, unrotated object.
    pub fn new(id: ObjectId, cell: Cell, variant: u32) -> Self {
        Self {
            id,
            cell,
            variant,
            orientation: Orientation::default(),
        }
    }
}

/// The placed objects of one workspace, in creation order.
///
/// Keyed by [`ObjectId`]. Iteration yields objects in insertion order and
/// removal preserves the relative order of the survivors.
///
/// The set itself does not police cell uniqueness; the owner (normally
/// the engine's `Workspace`) only inserts cells it has validated. Use
/// [`find_overlap`](Self::find_overlap) to check the invariant.
///
/// Equality is order-sensitive: two sets are equal only if they hold the
/// same objects in the same creation order.
#[derive(Clone, Debug, Default)]
pub struct ObjectSet {
    objects: IndexMap<ObjectId, PlacedObject>,
}

impl ObjectSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// `true` if no objects are placed.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Look up an object by ID.
    pub fn get(&self, id: ObjectId) -> Option<&PlacedObject> {
        self.objects.get(&id)
    }

    /// Mutable access to an object by ID.
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut PlacedObject> {
        self.objects.get_mut(&id)
    }

    /// `true` if an object with this ID is present.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    /// Iterate objects in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &PlacedObject> + '_ {
        self.objects.values()
    }

    /// Iterate occupied cells in creation order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.objects.values().map(|o| o.cell)
    }

    /// Append an object.
    ///
    /// If an object with the same ID is already present it is replaced in
    /// place (keeping its position in the order) and returned.
    pub fn insert(&mut self, object: PlacedObject) -> Option<PlacedObject> {
        match self.objects.entry(object.id) {
            Entry::Occupied(mut slot) => Some(std::mem::replace(slot.get_mut(), object)),
            Entry::Vacant(slot) => {
                slot.insert(object);
                None
            }
        }
    }

    /// Remove an object, preserving the order of the rest.
    pub fn remove(&mut self, id: ObjectId) -> Option<PlacedObject> {
        self.objects.shift_remove(&id)
    }

    /// Move an object to `cell`, returning its previous cell.
    pub fn set_cell(&mut self, id: ObjectId, cell: Cell) -> Option<Cell> {
        self.objects
            .get_mut(&id)
            .map(|o| std::mem::replace(&mut o.cell, cell))
    }

    /// The first pair of objects sharing a cell, in creation order.
    ///
    /// `None` means the no-overlap invariant holds.
    pub fn find_overlap(&self) -> Option<(ObjectId, ObjectId)> {
        let mut seen: IndexMap<Cell, ObjectId> = IndexMap::with_capacity(self.len());
        for object in self.iter() {
            if let Some(first) = seen.insert(object.cell, object.id) {
                return Some((first, object.id));
            }
        }
        None
    }
}

impl PartialEq for ObjectSet {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl FromIterator<PlacedObject> for ObjectSet {
    fn from_iter<I: IntoIterator<Item = PlacedObject>>(iter: I) -> Self {
        let mut set = ObjectSet::new();
        for object in iter {
            set.insert(object);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ObjectSet {
    type Item = &'a PlacedObject;
    type IntoIter = indexmap::map::Values<'a, ObjectId, PlacedObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.values()
    }
}
