//! # strassen
//!
//! Strassen divide-and-conquer matrix multiplication for square
//! [`ndarray::Array2`] matrices, plus tooling to measure how the empirical
//! runtime scales against the theoretical O(n^log2(7)) ≈ O(n^2.81) exponent.
//!
//! The public entry points are [`multiply_strassen`] and its Rayon-parallel
//! twin [`par_multiply_strassen`]; both accept square matrices of any side,
//! padding internally to the power-of-two side the recursion requires. The
//! building blocks ([`matmul::split_quadrants`], [`matmul::strassen`],
//! [`matmul::pad_to_power_of_two`]) are exported for callers that want to
//! drive the recursion directly on pre-padded inputs.
//!
//! ```
//! use ndarray::array;
//! use strassen::multiply_strassen;
//!
//! // An odd side pads to 4x4 internally and slices back to 3x3.
//! let a = array![[1.0, 0.0, 2.0], [0.0, 1.0, 0.0], [3.0, 0.0, 1.0]];
//! let b = array![[1.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
//! let c = multiply_strassen(&a, &b).unwrap();
//! assert_eq!(c, array![[1.0, 1.0, 2.0], [0.0, 1.0, 0.0], [3.0, 3.0, 1.0]]);
//! ```

pub mod error;
pub mod matmul;

pub use error::{Result, StrassenError};
pub use matmul::{multiply_strassen, par_multiply_strassen, StrassenScalar};

/// Exponent of Strassen's asymptotic complexity, log2(7).
///
/// Used by the benchmark tooling as the theoretical reference when fitting
/// the empirical scaling curve; it plays no role in the computation itself.
pub const STRASSEN_EXPONENT: f64 = 2.807354922057604;
