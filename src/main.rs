//! Empirical scaling report for Strassen multiplication.
//!
//! Times one `multiply_strassen` call per matrix size over a ladder of sizes,
//! prints the `(size, elapsed)` table, and fits the slope of log(time) versus
//! log(size) by least squares so the measured exponent can be compared with
//! the theoretical log2(7) ≈ 2.81.
//!
//! Run with optimizations, otherwise the recursion overhead drowns out the
//! scaling behavior:
//!
//! ```bash
//! cargo run --release
//! ```

use chrono::Local;
use ndarray::Array2;
use rand::prelude::*;
use std::hint::black_box;
use std::time::{Duration, Instant};

use strassen::{multiply_strassen, Result, STRASSEN_EXPONENT};

/// Smallest size included in the exponent fit. Below this the elapsed times
/// are dominated by allocator noise rather than the multiplication itself.
const FIT_THRESHOLD: usize = 16;

/// Builds an `n x n` matrix with entries drawn uniformly from [0, 1).
fn random_matrix(n: usize, rng: &mut StdRng) -> Array2<f64> {
    Array2::from_shape_fn((n, n), |_| rng.random_range(0.0..1.0))
}

/// Measures the wall-clock duration of a single multiplication.
fn time_multiply(a: &Array2<f64>, b: &Array2<f64>) -> Result<Duration> {
    let start = Instant::now();
    let product = multiply_strassen(black_box(a), black_box(b))?;
    let elapsed = start.elapsed();
    black_box(&product);
    Ok(elapsed)
}

/// Least-squares slope of log(time) against log(size).
///
/// Returns `None` when fewer than two usable samples remain (zero-duration
/// measurements cannot be log-transformed and are skipped).
fn fit_exponent(samples: &[(usize, Duration)]) -> Option<f64> {
    let points: Vec<(f64, f64)> = samples
        .iter()
        .filter(|(_, elapsed)| elapsed.as_secs_f64() > 0.0)
        .map(|(n, elapsed)| ((*n as f64).ln(), elapsed.as_secs_f64().ln()))
        .collect();

    if points.len() < 2 {
        return None;
    }

    let count = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / count;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / count;

    let covariance: f64 = points
        .iter()
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();
    let variance: f64 = points.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();

    if variance == 0.0 {
        return None;
    }

    Some(covariance / variance)
}

fn main() -> Result<()> {
    // Powers of two exercise the direct recursion; the others go through the
    // padding path first.
    let sizes = [2usize, 3, 4, 8, 12, 16, 32, 48, 64, 128];
    let mut rng = StdRng::seed_from_u64(42);

    println!(
        "Strassen scaling report ({})",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("{:>6} {:>8} {:>14}", "size", "padded", "elapsed");

    let mut samples = Vec::with_capacity(sizes.len());
    for n in sizes {
        let a = random_matrix(n, &mut rng);
        let b = random_matrix(n, &mut rng);

        let elapsed = time_multiply(&a, &b)?;
        println!(
            "{:>6} {:>8} {:>12.6}ms",
            n,
            n.next_power_of_two(),
            elapsed.as_secs_f64() * 1e3
        );

        if n >= FIT_THRESHOLD {
            samples.push((n, elapsed));
        }
    }

    match fit_exponent(&samples) {
        Some(slope) => {
            println!();
            println!(
                "fitted exponent (n >= {}): {:.3}, theoretical log2(7): {:.3}",
                FIT_THRESHOLD, slope, STRASSEN_EXPONENT
            );
        }
        None => println!("not enough usable samples to fit an exponent"),
    }

    Ok(())
}
