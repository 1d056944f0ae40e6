//! Criterion benchmarks for grid totals and figure growth.
//! Grid sizes: n×n with n in {3, 32, 256}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use figures::figure::{EquilateralTriangle, Figure, Rectangle};
use figures::grid::{total, Grid};
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_rows(n: usize, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect())
        .collect()
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    for &n in &[3usize, 32, 256] {
        let rows = random_rows(n, 43);
        group.bench_with_input(BenchmarkId::new("total_rows", n), &rows, |b, rows| {
            b.iter(|| total(rows).unwrap())
        });
        let grid = Grid::from_rows(&rows).unwrap();
        group.bench_with_input(BenchmarkId::new("grid_total", n), &grid, |b, g| {
            b.iter(|| g.total())
        });
    }
    group.finish();
}

fn bench_figures(c: &mut Criterion) {
    let mut group = c.benchmark_group("figures");
    group.bench_function("rect_grow_then_vertices", |b| {
        b.iter_batched(
            || Rectangle::new(Vector2::zeros(), 4.0, 2.0).unwrap(),
            |mut r| {
                r.grow_area(4.0).unwrap();
                r.grow_perimeter(1.0).unwrap();
                r.vertices()
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("triangle_grow_then_vertices", |b| {
        b.iter_batched(
            || EquilateralTriangle::new(Vector2::zeros(), 3.0).unwrap(),
            |mut t| {
                t.grow_area(4.0).unwrap();
                t.translate(2.0, 3.0);
                t.vertices()
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_grid, bench_figures);
criterion_main!(benches);
