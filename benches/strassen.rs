//! Strassen Multiplication Benchmark Comparison
//!
//! Compares the recursive Strassen implementation (sequential and parallel)
//! against ndarray's built-in product across different matrix sizes.
//!
//! # Usage:
//! ```bash
//! # Run all benchmarks
//! cargo bench --bench strassen
//!
//! # Run a single size group
//! cargo bench --bench strassen -- strassen_64x64
//!
//! # Save results to file
//! cargo bench --bench strassen > strassen_results.txt
//! ```

use criterion::{criterion_group, criterion_main, Criterion};
use ndarray::Array2;
use rand::prelude::*;
use std::hint::black_box;

use strassen::{multiply_strassen, par_multiply_strassen};

/// Create a random test matrix with entries in [0, 1).
fn create_matrix(n: usize, rng: &mut StdRng) -> Array2<f64> {
    Array2::from_shape_fn((n, n), |_| rng.random_range(0.0..1.0))
}

/// Benchmark all implementations for a specific size - creates one group per size.
fn bench_strassen_by_size(c: &mut Criterion) {
    // Powers of two run the recursion directly; 48 and 96 exercise the
    // padding path (they pad to 64 and 128 respectively).
    let sizes = [16usize, 32, 48, 64, 96, 128];

    for n in sizes {
        let group_name = format!("strassen_{}x{}", n, n);
        let mut group = c.benchmark_group(&group_name);
        group.sample_size(20); // Reduce sample size for large matrices

        let mut rng = StdRng::seed_from_u64(42);
        let a = create_matrix(n, &mut rng);
        let b = create_matrix(n, &mut rng);

        group.bench_function("strassen", |bench| {
            bench.iter(|| {
                let result = multiply_strassen(black_box(&a), black_box(&b));
                black_box(result)
            });
        });

        group.bench_function("strassen_parallel", |bench| {
            bench.iter(|| {
                let result = par_multiply_strassen(black_box(&a), black_box(&b));
                black_box(result)
            });
        });

        group.bench_function("ndarray_dot", |bench| {
            bench.iter(|| {
                let result = black_box(&a).dot(black_box(&b));
                black_box(result)
            });
        });

        group.finish();
    }
}

criterion_group!(benches, bench_strassen_by_size);
criterion_main!(benches);
