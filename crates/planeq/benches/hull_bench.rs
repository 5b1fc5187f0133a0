//! Criterion benchmarks for the exact hull and minimum enclosing circle.
//! Focus sizes: n in {64, 256, 1024}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planeq::geom2::{convex_hull, min_enclosing_circle, par_convex_hull, Point2};
use planeq::scalar::Q;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_points(n: usize, seed: u64) -> Vec<Point2> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point2::new(
                Q::from_integer(rng.gen_range(-10_000..=10_000)),
                Q::from_integer(rng.gen_range(-10_000..=10_000)),
            )
        })
        .collect()
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[64usize, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("convex_hull", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 43),
                |pts| {
                    let _res = convex_hull(pts);
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_with_input(BenchmarkId::new("par_convex_hull_4", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 43),
                |pts| {
                    let _res = par_convex_hull(4, pts);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_min_circle(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_circle");
    for &n in &[64usize, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("min_enclosing_circle", n), &n, |b, &n| {
            b.iter_batched(
                || random_points(n, 47),
                |pts| {
                    let _res = min_enclosing_circle(pts);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull, bench_min_circle);
criterion_main!(benches);
