//! Criterion micro-benchmarks for snapping, conflict resolution and highlights.

use std::hint::black_box;

use blockyard_bench::{gap_cells, reference_profile, stress_profile};
use blockyard_core::{Cell, ObjectSet, Point};
use blockyard_engine::{compute_highlights, resolve_placement, TieBreak};
use blockyard_lattice::{Lattice, Planar4};
use blockyard_test_utils::{filled_block, set_at, PointWalk};
use criterion::{criterion_group, criterion_main, Criterion};

/// Benchmark: snap 10K jittered points onto the ground lattice.
fn bench_snap_10k(c: &mut Criterion) {
    let lattice = Lattice::default();
    let points: Vec<Point> = PointWalk::new(42, 50, &lattice).take(10_000).collect();

    c.bench_function("snap_10k", |b| {
        b.iter(|| {
            for p in &points {
                black_box(lattice.snap(p).ok());
            }
        });
    });
}

/// Benchmark: resolve a conflict whose neighbourhood is entirely full,
/// forcing a scan of every candidate before reporting exhaustion.
fn bench_resolve_exhausted(c: &mut Criterion) {
    let lattice = Lattice::default();
    let objects: ObjectSet = set_at(&filled_block(Cell::new(-1, 0, -1), Cell::new(1, 0, 1)));

    let mut random = TieBreak::seeded(7);
    c.bench_function("resolve_exhausted_random", |b| {
        b.iter(|| {
            black_box(resolve_placement(&objects, None, Cell::ORIGIN, &lattice, &mut random).ok());
        });
    });

    let mut nearest = TieBreak::DeterministicNearest;
    c.bench_function("resolve_exhausted_nearest", |b| {
        b.iter(|| {
            black_box(
                resolve_placement(&objects, None, Cell::ORIGIN, &lattice, &mut nearest).ok(),
            );
        });
    });
}

/// Benchmark: resolve conflicts against the ~800-object reference field.
///
/// Each occupied probe has a gap within reach, so every call succeeds.
fn bench_resolve_reference(c: &mut Criterion) {
    let ws = reference_profile().unwrap();
    let lattice = ws.lattice().clone();
    let targets: Vec<Cell> = ws.objects().cells().take(256).collect();
    let mut tie_break = TieBreak::seeded(11);

    c.bench_function("resolve_reference_256", |b| {
        b.iter(|| {
            for &desired in &targets {
                black_box(
                    resolve_placement(ws.objects(), None, desired, &lattice, &mut tie_break).ok(),
                );
            }
        });
    });
}

/// Benchmark: recompute highlights for the reference and stress fields.
fn bench_highlights(c: &mut Criterion) {
    let reference = reference_profile().unwrap();
    c.bench_function("highlights_reference", |b| {
        b.iter(|| black_box(compute_highlights(reference.objects(), &Planar4)));
    });

    let stress = stress_profile().unwrap();
    c.bench_function("highlights_stress", |b| {
        b.iter(|| black_box(compute_highlights(stress.objects(), &Planar4)));
    });
}

/// Benchmark: fill every gap of the reference field through the workspace,
/// including highlight maintenance after each placement.
fn bench_workspace_fill_gaps(c: &mut Criterion) {
    let gaps = gap_cells(32);

    c.bench_function("workspace_fill_gaps_reference", |b| {
        b.iter_batched(
            || reference_profile().unwrap(),
            |mut ws| {
                for &cell in &gaps {
                    let id = ws.place_cell(0, cell).unwrap();
                    black_box(id);
                }
                ws
            },
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_snap_10k,
    bench_resolve_exhausted,
    bench_resolve_reference,
    bench_highlights,
    bench_workspace_fill_gaps,
);
criterion_main!(benches);
