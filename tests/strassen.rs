//! Integration tests for the public Strassen multiplication API.
//!
//! These exercise the facade end to end: shape validation, the power-of-two
//! padding path, agreement with a naive triple-loop reference product, and
//! the algebraic identities the multiplication must satisfy.

use ndarray::{array, s, Array2};
use rand::prelude::*;
use strassen::matmul::{pad_to_power_of_two, strassen};
use strassen::{multiply_strassen, par_multiply_strassen, StrassenError};

/// Naive O(n³) reference product used to verify the recursive result.
fn naive_matmul(a: &Array2<f64>, b: &Array2<f64>) -> Array2<f64> {
    let n = a.nrows();
    let mut c = Array2::zeros((n, n));
    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0;
            for p in 0..n {
                sum += a[[i, p]] * b[[p, j]];
            }
            c[[i, j]] = sum;
        }
    }
    c
}

fn max_abs_diff(a: &Array2<f64>, b: &Array2<f64>) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

fn random_matrix(n: usize, rng: &mut StdRng) -> Array2<f64> {
    Array2::from_shape_fn((n, n), |_| rng.random_range(0.0..1.0))
}

#[test]
fn test_matches_naive_product_across_sizes() {
    let mut rng = StdRng::seed_from_u64(42);

    // Mix of power-of-two sides and sides that must pad first.
    for n in [1usize, 2, 3, 4, 5, 7, 8, 9, 16, 17] {
        let a = random_matrix(n, &mut rng);
        let b = random_matrix(n, &mut rng);

        let c = multiply_strassen(&a, &b).expect("valid shapes");
        let expected = naive_matmul(&a, &b);
        let error = max_abs_diff(&c, &expected);
        assert!(
            error < 1e-9,
            "size {}: max abs error {} exceeds tolerance",
            n,
            error
        );
    }
}

#[test]
fn test_identity_property() {
    let mut rng = StdRng::seed_from_u64(7);

    for n in [1usize, 3, 4, 6, 8] {
        let identity = Array2::<f64>::eye(n);
        let m = random_matrix(n, &mut rng);

        let left = multiply_strassen(&identity, &m).expect("valid shapes");
        assert!(max_abs_diff(&left, &m) < 1e-9, "I * M != M for n = {}", n);

        let right = multiply_strassen(&m, &identity).expect("valid shapes");
        assert!(max_abs_diff(&right, &m) < 1e-9, "M * I != M for n = {}", n);
    }
}

#[test]
fn test_zero_property() {
    let mut rng = StdRng::seed_from_u64(11);

    for n in [1usize, 3, 8] {
        let zero = Array2::<f64>::zeros((n, n));
        let m = random_matrix(n, &mut rng);

        let c = multiply_strassen(&zero, &m).expect("valid shapes");
        assert_eq!(c, zero, "Z * M is not the zero matrix for n = {}", n);
    }
}

#[test]
fn test_known_two_by_two_product() {
    let a = array![[1.0, 2.0], [3.0, 4.0]];
    let b = array![[5.0, 6.0], [7.0, 8.0]];
    let c = multiply_strassen(&a, &b).expect("valid shapes");
    assert_eq!(c, array![[19.0, 22.0], [43.0, 50.0]]);
}

#[test]
fn test_one_by_one_base_case() {
    let a = array![[3.0]];
    let b = array![[4.0]];
    let c = multiply_strassen(&a, &b).expect("valid shapes");
    assert_eq!(c, array![[12.0]]);
}

#[test]
fn test_three_by_three_pads_and_slices_back() {
    let a = array![[2.0, 0.0, 1.0], [1.0, 3.0, 0.0], [0.0, 1.0, 4.0]];
    let b = array![[1.0, 2.0, 0.0], [0.0, 1.0, 2.0], [3.0, 0.0, 1.0]];

    let c = multiply_strassen(&a, &b).expect("valid shapes");
    assert_eq!(c.dim(), (3, 3));
    assert!(max_abs_diff(&c, &naive_matmul(&a, &b)) < 1e-9);
}

#[test]
fn test_padding_round_trip_is_exact() {
    let mut rng = StdRng::seed_from_u64(23);

    for n in [1usize, 3, 5, 6, 7] {
        let m = random_matrix(n, &mut rng);
        let padded = pad_to_power_of_two(&m);

        assert!(padded.nrows().is_power_of_two());
        // Slicing back yields the original exactly, padding adds only zeros.
        assert_eq!(padded.slice(s![..n, ..n]), m);
        let total: f64 = padded.sum();
        assert_eq!(total, m.sum());
    }
}

#[test]
fn test_facade_equals_manual_padding() {
    let mut rng = StdRng::seed_from_u64(31);

    for n in [3usize, 5, 6] {
        let a = random_matrix(n, &mut rng);
        let b = random_matrix(n, &mut rng);

        let via_facade = multiply_strassen(&a, &b).expect("valid shapes");

        let padded_product = strassen(&pad_to_power_of_two(&a), &pad_to_power_of_two(&b));
        let via_manual = padded_product.slice(s![..n, ..n]).to_owned();

        // Same operations in the same order, so the results agree exactly.
        assert_eq!(via_facade, via_manual, "facade diverges for n = {}", n);
    }
}

#[test]
fn test_parallel_facade_agrees_with_sequential() {
    let mut rng = StdRng::seed_from_u64(43);

    for n in [1usize, 5, 8, 12] {
        let a = random_matrix(n, &mut rng);
        let b = random_matrix(n, &mut rng);

        let sequential = multiply_strassen(&a, &b).expect("valid shapes");
        let parallel = par_multiply_strassen(&a, &b).expect("valid shapes");
        assert_eq!(sequential, parallel, "parallel result differs for n = {}", n);
    }
}

#[test]
fn test_rejects_non_square_inputs() {
    let rect = Array2::<f64>::zeros((2, 3));
    let square = Array2::<f64>::zeros((3, 3));

    let err = multiply_strassen(&rect, &square).unwrap_err();
    let StrassenError::ShapeMismatch { left, right, .. } = err;
    assert_eq!(left, (2, 3));
    assert_eq!(right, (3, 3));

    assert!(multiply_strassen(&square, &rect).is_err());
}

#[test]
fn test_rejects_mismatched_sizes() {
    let small = Array2::<f64>::zeros((2, 2));
    let large = Array2::<f64>::zeros((4, 4));

    let err = multiply_strassen(&small, &large).unwrap_err();
    assert!(format!("{}", err).contains("differ in size"));

    let err = par_multiply_strassen(&large, &small).unwrap_err();
    assert!(format!("{}", err).contains("differ in size"));
}
