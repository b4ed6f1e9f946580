use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use effectsize_core::math::distributions::normal;
use effectsize_core::{ContingencyTable, Point2D};
use effectsize_measures::{cramers_v, fit_line, odds_ratio, pearson_r, r_squared};
use rand::prelude::*;

/// Generate a noisy linear point cloud
fn generate_points(size: usize, seed: u64) -> Vec<Point2D> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| {
            let x: f64 = rng.gen_range(0.0..10.0);
            let noise: f64 = rng.gen_range(-1.0..1.0);
            Point2D::new(x, 0.5 * x + noise)
        })
        .collect()
}

fn bench_point_measures(c: &mut Criterion) {
    let mut group = c.benchmark_group("PointMeasures");
    let sizes = [50, 500, 5000];

    for &size in &sizes {
        let points = generate_points(size, 42);

        group.bench_with_input(BenchmarkId::new("pearson_r", size), &points, |b, points| {
            b.iter(|| pearson_r(black_box(points)))
        });
        group.bench_with_input(BenchmarkId::new("fit_line", size), &points, |b, points| {
            b.iter(|| fit_line(black_box(points)))
        });
        group.bench_with_input(BenchmarkId::new("r_squared", size), &points, |b, points| {
            b.iter(|| r_squared(black_box(points)))
        });
    }

    group.finish();
}

fn bench_normal_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("NormalCurve");

    for &num_points in &[100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("curve", num_points),
            &num_points,
            |b, &num_points| b.iter(|| normal::curve(0.0, 1.0, black_box(num_points), -3.5, 3.5)),
        );
    }
    group.bench_function("cdf", |b| b.iter(|| normal::cdf(black_box(1.2345))));

    group.finish();
}

fn bench_contingency(c: &mut Criterion) {
    let mut group = c.benchmark_group("Contingency");
    let table = ContingencyTable::new(40, 10, 15, 35);

    group.bench_function("odds_ratio", |b| b.iter(|| odds_ratio(black_box(&table))));
    group.bench_function("cramers_v", |b| b.iter(|| cramers_v(black_box(&table))));

    group.finish();
}

criterion_group!(benches, bench_point_measures, bench_normal_curve, bench_contingency);
criterion_main!(benches);
