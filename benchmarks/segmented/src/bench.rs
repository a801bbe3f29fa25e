//! Segmented least squares benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of full runs (100 to 1000 points)
//! - Individual stages (prefix sums, fit table, partition)
//! - Segment cost sweep at a fixed size
//! - Real-world scenarios (financial, sensor) and pathological cases

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use segmented::internals::algorithms::fit::{DegeneratePolicy, SegmentFitTable};
use segmented::internals::algorithms::partition::Partition;
use segmented::internals::math::prefix::PrefixSums;
use segmented::prelude::*;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate piecewise-linear data with a breakpoint every `piece` points.
fn generate_piecewise_data(size: usize, piece: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.3).unwrap();
    let slope_dist = Uniform::new(-2.0, 2.0).unwrap();

    let x: Vec<f64> = (0..size).map(|i| i as f64).collect();
    let mut y = Vec::with_capacity(size);
    let mut level = 0.0;
    let mut slope = slope_dist.sample(&mut rng);

    for i in 0..size {
        if i > 0 && i % piece == 0 {
            slope = slope_dist.sample(&mut rng);
        }
        level += slope;
        y.push(level + noise_dist.sample(&mut rng));
    }
    (x, y)
}

/// Generate smooth sinusoidal data with Gaussian noise.
fn generate_sine_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.2).unwrap();

    let x: Vec<f64> = (0..size).map(|i| i as f64 * 10.0 / size as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| xi.sin() + noise_dist.sample(&mut rng))
        .collect();
    (x, y)
}

/// Generate financial time series (trending with volatility).
fn generate_financial_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let returns_dist = Normal::new(0.0005, 0.02).unwrap();

    let x: Vec<f64> = (0..size).map(|i| i as f64).collect();
    let mut y = vec![100.0];

    for _ in 1..size {
        let ret = returns_dist.sample(&mut rng);
        let new_price = y.last().unwrap() * (1.0 + ret);
        y.push(new_price);
    }
    (x, y)
}

/// Generate sensor readings with repeated timestamps (vertical ranges).
fn generate_repeated_x_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.5).unwrap();

    let x: Vec<f64> = (0..size).map(|i| (i / 4) as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| 0.5 * xi + noise_dist.sample(&mut rng))
        .collect();
    (x, y)
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(20);

    for size in [100, 250, 500, 1000] {
        group.throughput(Throughput::Elements(size as u64));

        let (x, y) = generate_piecewise_data(size, 50, 42);

        group.bench_with_input(BenchmarkId::new("fit", size), &size, |b, _| {
            b.iter(|| {
                Segmented::new()
                    .segment_cost(5.0)
                    .build()
                    .unwrap()
                    .fit(black_box(&x), black_box(&y))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    group.sample_size(20);

    let size = 500;
    let (x, y) = generate_piecewise_data(size, 50, 42);
    let prefix = PrefixSums::new(&x, &y);
    let table = SegmentFitTable::new(&x, &y, &prefix, DegeneratePolicy::Disqualify);

    group.bench_function("prefix_sums", |b| {
        b.iter(|| PrefixSums::new(black_box(&x), black_box(&y)))
    });

    group.bench_function("fit_table", |b| {
        b.iter(|| {
            SegmentFitTable::new(
                black_box(&x),
                black_box(&y),
                &prefix,
                DegeneratePolicy::Disqualify,
            )
        })
    });

    group.bench_function("partition", |b| {
        b.iter(|| Partition::solve(black_box(&table), 5.0))
    });

    group.finish();
}

fn bench_segment_cost(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment_cost");
    group.sample_size(20);

    let size = 500;
    let (x, y) = generate_sine_data(size, 42);

    for cost in [0.01, 0.1, 1.0, 10.0, 100.0] {
        group.bench_with_input(BenchmarkId::new("fit", cost), &cost, |b, &cost| {
            b.iter(|| {
                Segmented::new()
                    .segment_cost(cost)
                    .build()
                    .unwrap()
                    .fit(black_box(&x), black_box(&y))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_scenarios(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios");
    group.sample_size(20);

    let size = 500;

    let (x_fin, y_fin) = generate_financial_data(size, 42);
    group.bench_function("financial_trend", |b| {
        b.iter(|| {
            Segmented::new()
                .segment_cost(1.0)
                .return_diagnostics()
                .build()
                .unwrap()
                .fit(black_box(&x_fin), black_box(&y_fin))
                .unwrap()
        })
    });

    let (x_rep, y_rep) = generate_repeated_x_data(size, 42);
    for (name, policy) in [
        ("repeated_x_disqualify", Disqualify),
        ("repeated_x_horizontal", Horizontal),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                Segmented::new()
                    .segment_cost(2.0)
                    .degenerate_policy(policy)
                    .build()
                    .unwrap()
                    .fit(black_box(&x_rep), black_box(&y_rep))
                    .unwrap()
            })
        });
    }

    // Reversed input exercises the sorting path
    let (x_fwd, y_fwd) = generate_piecewise_data(size, 50, 7);
    let x_rev: Vec<f64> = x_fwd.iter().rev().copied().collect();
    let y_rev: Vec<f64> = y_fwd.iter().rev().copied().collect();
    group.bench_function("reversed_input", |b| {
        b.iter(|| {
            Segmented::new()
                .segment_cost(5.0)
                .build()
                .unwrap()
                .fit(black_box(&x_rev), black_box(&y_rev))
                .unwrap()
        })
    });

    // Constant y
    let x_const: Vec<f64> = (0..size).map(|i| i as f64).collect();
    let y_const = vec![5.0; size];
    group.bench_function("constant_y", |b| {
        b.iter(|| {
            Segmented::new()
                .build()
                .unwrap()
                .fit(black_box(&x_const), black_box(&y_const))
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_stages,
    bench_segment_cost,
    bench_scenarios,
);
criterion_main!(benches);
