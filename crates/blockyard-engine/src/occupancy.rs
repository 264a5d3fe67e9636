//! Exact-cell occupancy tests.

use blockyard_core::{Cell, ObjectId, ObjectSet, PlacedObject};

/// Answers "who, if anyone, holds this cell?".
///
/// Equality is exact on lattice indices; inputs are already snapped, so no
/// tolerance is applied. `exclude` names an object to ignore (the object
/// being moved); pass `None` when checking on behalf of an object that does
/// not exist yet.
pub trait Occupancy {
    /// The object other than `exclude` that occupies `cell`, if any.
    fn occupant(&self, cell: &Cell, exclude: Option<ObjectId>) -> Option<ObjectId>;

    /// `true` if an object other than `exclude` occupies `cell`.
    fn is_occupied(&self, cell: &Cell, exclude: Option<ObjectId>) -> bool {
        self.occupant(cell, exclude).is_some()
    }
}

fn first_occupant<'a>(
    mut objects: impl Iterator<Item = &'a PlacedObject>,
    cell: &Cell,
    exclude: Option<ObjectId>,
) -> Option<ObjectId> {
    objects
        .find(|o| o.cell == *cell && Some(o.id) != exclude)
        .map(|o| o.id)
}

impl Occupancy for ObjectSet {
    fn occupant(&self, cell: &Cell, exclude: Option<ObjectId>) -> Option<ObjectId> {
        first_occupant(self.iter(), cell, exclude)
    }
}

impl Occupancy for [PlacedObject] {
    fn occupant(&self, cell: &Cell, exclude: Option<ObjectId>) -> Option<ObjectId> {
        first_occupant(self.iter(), cell, exclude)
    }
}

impl<O: Occupancy + ?Sized> Occupancy for &O {
    fn occupant(&self, cell: &Cell, exclude: Option<ObjectId>) -> Option<ObjectId> {
        (**self).occupant(cell, exclude)
    }
}

/// `true` if any object other than `exclude` occupies `cell`.
///
/// Free-function form of [`Occupancy::is_occupied`].
///
/// # Examples
///
/// ```
/// use blockyard_core::{Cell, ObjectId, ObjectSet, PlacedObject};
/// use blockyard_engine::is_occupied;
///
/// let objects: ObjectSet = [PlacedObject::new(ObjectId(1), Cell::ORIGIN, 0)]
///     .into_iter()
///     .collect();
/// assert!(is_occupied(&objects, None, &Cell::ORIGIN));
/// // An object never blocks itself.
/// assert!(!is_occupied(&objects, Some(ObjectId(1)), &Cell::ORIGIN));
/// ```
pub fn is_occupied<O: Occupancy + ?Sized>(
    objects: &O,
    exclude: Option<ObjectId>,
    cell: &Cell,
) -> bool {
    objects.is_occupied(cell, exclude)
}
