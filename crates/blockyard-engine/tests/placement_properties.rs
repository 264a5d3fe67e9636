//! Property tests over random operation sequences and occupancy layouts.

use blockyard_core::{Cell, ObjectId, PlacementError, Point, PointError};
use blockyard_engine::{
    compute_highlights, resolve_placement, TieBreak, TieBreakMode, Workspace, WorkspaceConfig,
    WorkspaceError,
};
use blockyard_lattice::{AxisPolicy, Lattice, Planar4};
use blockyard_test_utils::{filled_block, ring, set_at};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Place { variant: u32, x: f64, z: f64 },
    Move { pick: usize, x: f64, z: f64 },
    Drag { pick: usize, path: Vec<(f64, f64)> },
    Rotate { pick: usize, dx: f64, dy: f64 },
    Remove { pick: usize },
}

fn coord() -> impl Strategy<Value = f64> {
    -4.0f64..4.0
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u32..6, coord(), coord()).prop_map(|(variant, x, z)| Op::Place { variant, x, z }),
        2 => (any::<usize>(), coord(), coord()).prop_map(|(pick, x, z)| Op::Move { pick, x, z }),
        1 => (any::<usize>(), proptest::collection::vec((coord(), coord()), 1..6))
            .prop_map(|(pick, path)| Op::Drag { pick, path }),
        1 => (any::<usize>(), -1.0f64..1.0, -1.0f64..1.0)
            .prop_map(|(pick, dx, dy)| Op::Rotate { pick, dx, dy }),
        1 => any::<usize>().prop_map(|pick| Op::Remove { pick }),
    ]
}

fn arb_tie_break() -> impl Strategy<Value = TieBreakMode> {
    prop_oneof![
        Just(TieBreakMode::Random),
        Just(TieBreakMode::DeterministicNearest),
    ]
}

fn nth_id(ws: &Workspace, pick: usize) -> Option<ObjectId> {
    let len = ws.objects().len();
    if len == 0 {
        return None;
    }
    ws.objects().iter().nth(pick % len).map(|o| o.id)
}

fn apply(ws: &mut Workspace, op: &Op) {
    match *op {
        Op::Place { variant, x, z } => {
            let before = ws.objects().clone();
            match ws.place(variant, Point::new(x, 0.0, z)) {
                Ok(_) => assert_eq!(ws.objects().len(), before.len() + 1),
                Err(_) => assert_eq!(ws.objects(), &before),
            }
        }
        Op::Move { pick, x, z } => {
            if let Some(id) = nth_id(ws, pick) {
                let before = ws.objects().clone();
                if ws.move_object(id, Point::new(x, 0.0, z)).is_err() {
                    assert_eq!(ws.objects(), &before);
                }
            }
        }
        Op::Drag { pick, ref path } => {
            if let Some(id) = nth_id(ws, pick) {
                let before = ws.objects().clone();
                let mut drag = ws.begin_drag(id).unwrap();
                for &(x, z) in path {
                    let _ = ws.drag_to(&mut drag, Point::new(x, 0.0, z));
                    assert_eq!(ws.objects(), &before);
                }
                let _ = ws.end_drag(drag);
            }
        }
        Op::Rotate { pick, dx, dy } => {
            if let Some(id) = nth_id(ws, pick) {
                let cell = ws.get(id).unwrap().cell;
                ws.rotate(id, dx, dy).unwrap();
                assert_eq!(ws.get(id).unwrap().cell, cell);
            }
        }
        Op::Remove { pick } => {
            if let Some(id) = nth_id(ws, pick) {
                let removed = ws.remove(id).unwrap();
                assert!(ws.objects().cells().all(|c| c != removed.cell));
            }
        }
    }
}

proptest! {
    #[test]
    fn no_overlap_after_any_operation_sequence(
        mode in arb_tie_break(),
        seed in any::<u64>(),
        ops in proptest::collection::vec(arb_op(), 0..60),
    ) {
        let mut ws = Workspace::new(WorkspaceConfig {
            tie_break: mode,
            seed: Some(seed),
            ..WorkspaceConfig::default()
        })
        .unwrap();
        for op in &ops {
            apply(&mut ws, op);
            prop_assert_eq!(ws.objects().find_overlap(), None);
            prop_assert!(ws.objects().cells().all(|c| c.y == 0));
            prop_assert_eq!(ws.highlights(), &compute_highlights(ws.objects(), &Planar4));
        }
    }

    #[test]
    fn highlights_are_free_and_adjacent(
        xs in proptest::collection::hash_set((-6i32..6, -6i32..6), 0..25),
    ) {
        let cells: Vec<Cell> = xs.iter().map(|&(x, z)| Cell::new(x, 0, z)).collect();
        let objects = set_at(&cells);
        let highlights = compute_highlights(&objects, &Planar4);
        for h in &highlights {
            prop_assert!(!cells.contains(h));
            let touching = cells
                .iter()
                .any(|c| c.y == h.y && (c.x - h.x).abs() + (c.z - h.z).abs() == 1);
            prop_assert!(touching);
        }
    }

    #[test]
    fn conflict_with_a_free_neighbour_never_returns_desired(
        blocked in proptest::collection::vec(any::<bool>(), 8),
        seed in any::<u64>(),
        deterministic in any::<bool>(),
    ) {
        let center = Cell::ORIGIN;
        let mut cells = vec![center];
        cells.extend(
            ring(center)
                .into_iter()
                .zip(&blocked)
                .filter(|(_, b)| **b)
                .map(|(c, _)| c),
        );
        let objects = set_at(&cells);
        let lattice = Lattice::default();
        let mut tie_break = if deterministic {
            TieBreak::DeterministicNearest
        } else {
            TieBreak::seeded(seed)
        };

        let result = resolve_placement(&objects, None, center, &lattice, &mut tie_break);
        if blocked.iter().all(|&b| b) {
            prop_assert_eq!(result, Err(PlacementError::Exhausted { desired: center }));
        } else {
            let cell = result.unwrap();
            prop_assert_ne!(cell, center);
            prop_assert!(!cells.contains(&cell));
            prop_assert_eq!(cell.chebyshev(&center), 1);
            prop_assert_eq!(cell.y, 0);
        }
    }

    #[test]
    fn nearest_tie_break_is_a_function_of_occupancy(
        blocked in proptest::collection::vec(any::<bool>(), 8),
    ) {
        let mut cells = vec![Cell::ORIGIN];
        cells.extend(
            ring(Cell::ORIGIN)
                .into_iter()
                .zip(&blocked)
                .filter(|(_, b)| **b)
                .map(|(c, _)| c),
        );
        let objects = set_at(&cells);
        let lattice = Lattice::default();
        let a = resolve_placement(&objects, None, Cell::ORIGIN, &lattice, &mut TieBreak::DeterministicNearest);
        let b = resolve_placement(&objects, None, Cell::ORIGIN, &lattice, &mut TieBreak::DeterministicNearest);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn exhausted_drop_leaves_workspace_unchanged(
        x in -3i32..3,
        z in -3i32..3,
        jitter in -0.4f64..0.4,
    ) {
        let mut ws = Workspace::new(WorkspaceConfig::default()).unwrap();
        let center = Cell::new(x, 0, z);
        ws.place_cell(0, center).unwrap();
        for c in ring(center) {
            ws.place_cell(0, c).unwrap();
        }
        let before = ws.objects().clone();
        let highlights = ws.highlights().clone();

        let point = Point::new(f64::from(x) + jitter, 7.5, f64::from(z) - jitter);
        let err = ws.place(3, point).unwrap_err();
        prop_assert_eq!(
            err,
            WorkspaceError::Placement(PlacementError::Exhausted { desired: center })
        );
        prop_assert_eq!(ws.objects(), &before);
        prop_assert_eq!(ws.highlights(), &highlights);
    }

    #[test]
    fn full_cube_exhausts_any_stacked_drop(
        x in -50i32..50,
        y in -50i32..50,
        z in -50i32..50,
        mode in arb_tie_break(),
        seed in any::<u64>(),
    ) {
        let mut ws = Workspace::new(WorkspaceConfig {
            vertical: AxisPolicy::Quantize,
            tie_break: mode,
            seed: Some(seed),
            ..WorkspaceConfig::default()
        })
        .unwrap();
        let center = Cell::new(x, y, z);
        let min = Cell::new(x - 1, y - 1, z - 1);
        let max = Cell::new(x + 1, y + 1, z + 1);
        for cell in filled_block(min, max) {
            ws.place_cell(0, cell).unwrap();
        }
        let before = ws.objects().clone();

        let point = Point::new(f64::from(x), f64::from(y), f64::from(z));
        prop_assert_eq!(
            ws.place(0, point),
            Err(WorkspaceError::Placement(PlacementError::Exhausted { desired: center }))
        );
        prop_assert_eq!(ws.objects(), &before);
    }

    #[test]
    fn points_beyond_the_index_range_never_place(
        magnitude in 2.2e9f64..1.0e15,
        negative in any::<bool>(),
    ) {
        let x = if negative { -magnitude } else { magnitude };
        let mut ws = Workspace::new(WorkspaceConfig::default()).unwrap();
        let result = ws.place(0, Point::new(x, 0.0, 0.0));
        prop_assert!(
            matches!(result, Err(WorkspaceError::Point(PointError::OutOfRange { .. }))),
            "placed {} at {:?}",
            x,
            result
        );
        prop_assert!(ws.objects().is_empty());
        prop_assert!(ws.highlights().is_empty());
    }

    #[test]
    fn stacked_lattice_searches_all_layers(
        layer in -3i32..3,
        seed in any::<u64>(),
    ) {
        let mut ws = Workspace::new(WorkspaceConfig {
            vertical: AxisPolicy::Quantize,
            seed: Some(seed),
            ..WorkspaceConfig::default()
        })
        .unwrap();
        let y = f64::from(layer);
        // Fill the 3x3 ring of the layer: the next drop must leave it.
        let center = Cell::new(0, layer, 0);
        ws.place_cell(0, center).unwrap();
        for c in ring(center) {
            ws.place_cell(0, c).unwrap();
        }
        let id = ws.place(0, Point::new(0.0, y, 0.0)).unwrap();
        let cell = ws.get(id).unwrap().cell;
        prop_assert_ne!(cell.y, layer);
        prop_assert_eq!(cell.chebyshev(&center), 1);
    }
}
