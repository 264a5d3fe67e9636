//! Adjacency trait compliance test helpers.
//!
//! These functions verify that an [`Adjacency`] implementation satisfies
//! the invariants required by the trait contract, over a small cube of
//! sample cells around the origin.

use crate::adjacency::Adjacency;
use blockyard_core::Cell;
use indexmap::IndexSet;

/// Half-width of the sampled cube.
const RADIUS: i32 = 3;

fn sample_cells() -> Vec<Cell> {
    let mut out = Vec::new();
    for x in -RADIUS..=RADIUS {
        for y in -RADIUS..=RADIUS {
            for z in -RADIUS..=RADIUS {
                out.push(Cell::new(x, y, z));
            }
        }
    }
    out
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(adjacency: &dyn Adjacency) {
    for cell in sample_cells() {
        for nb in adjacency.neighbours(&cell) {
            assert!(
                adjacency.neighbours(&nb).contains(&cell),
                "neighbour symmetry violated: {nb} in N({cell}) but {cell} not in N({nb})"
            );
        }
    }
}

/// Assert that no cell is its own neighbour and neighbours are unique.
pub fn assert_neighbours_distinct(adjacency: &dyn Adjacency) {
    for cell in sample_cells() {
        let n = adjacency.neighbours(&cell);
        assert!(!n.contains(&cell), "{cell} lists itself as a neighbour");
        let unique: IndexSet<_> = n.iter().collect();
        assert_eq!(unique.len(), n.len(), "duplicate neighbours of {cell}");
    }
}

/// Assert that the neighbour count never exceeds `degree()`.
pub fn assert_degree_bound(adjacency: &dyn Adjacency) {
    for cell in sample_cells() {
        let n = adjacency.neighbours(&cell).len();
        assert!(
            n <= adjacency.degree(),
            "{cell} has {n} neighbours, degree is {}",
            adjacency.degree()
        );
    }
}

/// Assert that two calls return the same neighbours in the same order.
pub fn assert_neighbours_deterministic(adjacency: &dyn Adjacency) {
    for cell in sample_cells() {
        assert_eq!(
            adjacency.neighbours(&cell),
            adjacency.neighbours(&cell),
            "neighbours of {cell} are non-deterministic"
        );
    }
}

/// Assert that every neighbour is exactly one step away.
pub fn assert_neighbours_unit_distance(adjacency: &dyn Adjacency) {
    for cell in sample_cells() {
        for nb in adjacency.neighbours(&cell) {
            assert_eq!(cell.chebyshev(&nb), 1, "{nb} is not adjacent to {cell}");
        }
    }
}

/// Run all 5 compliance checks on an adjacency.
pub fn run_full_compliance(adjacency: &dyn Adjacency) {
    assert_neighbours_symmetric(adjacency);
    assert_neighbours_distinct(adjacency);
    assert_degree_bound(adjacency);
    assert_neighbours_deterministic(adjacency);
    assert_neighbours_unit_distance(adjacency);
}
