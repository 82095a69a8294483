//! Strassen divide-and-conquer matrix multiplication.
//!
//! This module implements matrix multiplication `C = A * B` for square
//! matrices using Strassen's algorithm, which trades the eight recursive
//! sub-products of the classical blocked scheme for seven, lowering the
//! asymptotic cost from O(n³) to O(n^log2(7)) ≈ O(n^2.81).
//!
//! The implementation is organized as a small pipeline:
//! 1. **Padding:** [`pad_to_power_of_two`] grows a square matrix to the next
//!    power-of-two side by filling with zeros, so the recursion can halve the
//!    side evenly at every level down to the 1×1 base case.
//! 2. **Recursion:** [`strassen`] (and its Rayon twin [`par_strassen`]) splits
//!    both operands into quadrants, combines seven recursive sub-products into
//!    the four output quadrants, and reassembles them.
//! 3. **Facade:** [`multiply_strassen`] validates shapes, pads, multiplies and
//!    slices the result back to the original side. The zero rows and columns
//!    introduced by padding never contribute cross terms to the retained
//!    block, so the sliced result equals the unpadded product exactly.
//!
//! Matrices are [`ndarray::Array2`] values with value semantics throughout:
//! every recursive call owns its quadrant copies and no mutable state is
//! shared between branches, which is what makes the parallel variant safe to
//! offer with bit-identical results.

use ndarray::{s, Array2};
use num::Zero;
use std::ops::{Add, Mul, Sub};

use crate::error::{shape_mismatch, Result};

/// Element types the Strassen routines operate on.
///
/// Any numeric type with value semantics, an additive identity (used for
/// padding fill) and the three ring operations qualifies; the blanket
/// implementation below covers `f32`, `f64` and the primitive integers.
pub trait StrassenScalar:
    Clone + Zero + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
}

impl<A> StrassenScalar for A where
    A: Clone + Zero + Add<Output = A> + Sub<Output = A> + Mul<Output = A>
{
}

/// Splits a square matrix of even side `n` into four owned quadrants.
///
/// The quadrants are returned in reading order: top-left, top-right,
/// bottom-left, bottom-right, each of side `n / 2`. Stacking them back in the
/// same order reconstructs the input exactly (see [`join_quadrants`]).
///
/// # Arguments
///
/// * `matrix` - A square matrix whose side is even and at least 2.
///
/// # Panics
///
/// An odd or degenerate side means the padding stage upstream failed; that is
/// a programming error, checked with `debug_assert!` rather than reported as
/// a runtime error.
pub fn split_quadrants<A: StrassenScalar>(
    matrix: &Array2<A>,
) -> (Array2<A>, Array2<A>, Array2<A>, Array2<A>) {
    let n = matrix.nrows();
    debug_assert_eq!(n, matrix.ncols(), "quadrant split requires a square matrix");
    debug_assert!(
        n >= 2 && n % 2 == 0,
        "quadrant split requires an even side >= 2, got {}",
        n
    );

    let mid = n / 2;
    (
        matrix.slice(s![..mid, ..mid]).to_owned(),
        matrix.slice(s![..mid, mid..]).to_owned(),
        matrix.slice(s![mid.., ..mid]).to_owned(),
        matrix.slice(s![mid.., mid..]).to_owned(),
    )
}

/// Reassembles four quadrants of side `mid` into a single matrix of side
/// `2 * mid`, inverse of [`split_quadrants`].
fn join_quadrants<A: StrassenScalar>(
    c11: Array2<A>,
    c12: Array2<A>,
    c21: Array2<A>,
    c22: Array2<A>,
) -> Array2<A> {
    let mid = c11.nrows();
    let n = 2 * mid;

    let mut joined = Array2::zeros((n, n));
    joined.slice_mut(s![..mid, ..mid]).assign(&c11);
    joined.slice_mut(s![..mid, mid..]).assign(&c12);
    joined.slice_mut(s![mid.., ..mid]).assign(&c21);
    joined.slice_mut(s![mid.., mid..]).assign(&c22);

    joined
}

/// Pads a square matrix up to the next power-of-two side with zeros.
///
/// The original values are copied into the top-left block and every other
/// entry is the additive identity, so the padded matrix multiplies exactly
/// like the original on the retained block. A matrix whose side is already a
/// power of two (including the 1×1 case) is returned as a plain clone.
///
/// # Arguments
///
/// * `matrix` - The matrix to pad. Only square matrices reach this function
///   through the facade, but the target side is computed from the larger
///   dimension so the copy is well-defined for any input.
///
/// # Returns
///
/// A freshly allocated matrix of side `2^ceil(log2(n))`; the input is never
/// aliased.
pub fn pad_to_power_of_two<A: StrassenScalar>(matrix: &Array2<A>) -> Array2<A> {
    let (rows, cols) = matrix.dim();
    let target = rows.max(cols).next_power_of_two();

    if rows == target && cols == target {
        return matrix.clone();
    }

    let mut padded = Array2::zeros((target, target));
    padded.slice_mut(s![..rows, ..cols]).assign(matrix);
    padded
}

/// Recursively multiplies two square matrices whose side is a power of two.
///
/// Base case: a 1×1 product is the elementwise scalar product. Recursive
/// case: both operands are split into quadrants and exactly seven
/// sub-products are formed (order and signs are load-bearing; any deviation
/// changes correctness, not just performance):
///
/// ```text
/// M1 = (A11 + A22) * (B11 + B22)
/// M2 = (A21 + A22) *  B11
/// M3 =  A11        * (B12 - B22)
/// M4 =  A22        * (B21 - B11)
/// M5 = (A11 + A12) *  B22
/// M6 = (A21 - A11) * (B11 + B12)
/// M7 = (A12 - A22) * (B21 + B22)
/// ```
///
/// which combine into the output quadrants:
///
/// ```text
/// C11 = M1 + M4 - M5 + M7
/// C12 = M3 + M5
/// C21 = M2 + M4
/// C22 = M1 - M2 + M3 + M6
/// ```
///
/// # Arguments
///
/// * `a`, `b` - Square matrices of identical side `n`, with `n` a power of
///   two. The facade guarantees this; calling with anything else is a
///   programming error caught by `debug_assert!` in development builds.
pub fn strassen<A: StrassenScalar>(a: &Array2<A>, b: &Array2<A>) -> Array2<A> {
    let n = a.nrows();
    debug_assert_eq!(a.dim(), b.dim(), "operands must have identical shapes");
    debug_assert_eq!(n, a.ncols(), "operands must be square");
    debug_assert!(
        n.is_power_of_two(),
        "side must be a power of two, got {} (did the input bypass padding?)",
        n
    );

    if n == 1 {
        return a * b;
    }

    let (a11, a12, a21, a22) = split_quadrants(a);
    let (b11, b12, b21, b22) = split_quadrants(b);

    let m1 = strassen(&(&a11 + &a22), &(&b11 + &b22));
    let m2 = strassen(&(&a21 + &a22), &b11);
    let m3 = strassen(&a11, &(&b12 - &b22));
    let m4 = strassen(&a22, &(&b21 - &b11));
    let m5 = strassen(&(&a11 + &a12), &b22);
    let m6 = strassen(&(&a21 - &a11), &(&b11 + &b12));
    let m7 = strassen(&(&a12 - &a22), &(&b21 + &b22));

    let c11 = &m1 + &m4 - &m5 + &m7;
    let c12 = &m3 + &m5;
    let c21 = &m2 + &m4;
    let c22 = &m1 - &m2 + &m3 + &m6;

    join_quadrants(c11, c12, c21, c22)
}

/// Parallel variant of [`strassen`] that evaluates the seven sub-products on
/// the Rayon thread pool.
///
/// The seven branches are pure functions of immutable inputs and share no
/// state, so the result is bit-identical to the sequential version; only the
/// evaluation order differs. Nested `rayon::join` calls let work stealing
/// balance the 7-way fan-out at every recursion level.
pub fn par_strassen<A>(a: &Array2<A>, b: &Array2<A>) -> Array2<A>
where
    A: StrassenScalar + Send + Sync,
{
    let n = a.nrows();
    debug_assert_eq!(a.dim(), b.dim(), "operands must have identical shapes");
    debug_assert_eq!(n, a.ncols(), "operands must be square");
    debug_assert!(
        n.is_power_of_two(),
        "side must be a power of two, got {} (did the input bypass padding?)",
        n
    );

    if n == 1 {
        return a * b;
    }

    let (a11, a12, a21, a22) = split_quadrants(a);
    let (b11, b12, b21, b22) = split_quadrants(b);

    let ((m1, m2), (m3, m4)) = rayon::join(
        || {
            rayon::join(
                || par_strassen(&(&a11 + &a22), &(&b11 + &b22)),
                || par_strassen(&(&a21 + &a22), &b11),
            )
        },
        || {
            rayon::join(
                || par_strassen(&a11, &(&b12 - &b22)),
                || par_strassen(&a22, &(&b21 - &b11)),
            )
        },
    );
    let ((m5, m6), m7) = rayon::join(
        || {
            rayon::join(
                || par_strassen(&(&a11 + &a12), &b22),
                || par_strassen(&(&a21 - &a11), &(&b11 + &b12)),
            )
        },
        || par_strassen(&(&a12 - &a22), &(&b21 + &b22)),
    );

    let c11 = &m1 + &m4 - &m5 + &m7;
    let c12 = &m3 + &m5;
    let c21 = &m2 + &m4;
    let c22 = &m1 - &m2 + &m3 + &m6;

    join_quadrants(c11, c12, c21, c22)
}

/// Validates that both operands are square matrices of the same side.
fn check_shapes<A: StrassenScalar>(a: &Array2<A>, b: &Array2<A>) -> Result<()> {
    let (a_rows, a_cols) = a.dim();
    let (b_rows, b_cols) = b.dim();

    if a_rows != a_cols {
        return Err(shape_mismatch(
            a.dim(),
            b.dim(),
            "left matrix is not square",
        ));
    }
    if b_rows != b_cols {
        return Err(shape_mismatch(
            a.dim(),
            b.dim(),
            "right matrix is not square",
        ));
    }
    if a_rows != b_rows {
        return Err(shape_mismatch(
            a.dim(),
            b.dim(),
            "matrices differ in size",
        ));
    }

    Ok(())
}

/// Multiplies two square matrices of identical side `n` via Strassen's
/// algorithm, handling sides that are not powers of two.
///
/// Both operands are padded with zeros to the common power-of-two side, the
/// padded pair is multiplied recursively, and the top-left `n × n` block of
/// the result is sliced out as the final product.
///
/// # Arguments
///
/// * `a`, `b` - Square matrices of identical side. The side does not need to
///   be a power of two.
///
/// # Returns
///
/// The exact `n × n` matrix product, or [`StrassenError::ShapeMismatch`] if
/// the operands are not both square or differ in size.
///
/// [`StrassenError::ShapeMismatch`]: crate::error::StrassenError
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use strassen::multiply_strassen;
///
/// let a = array![[1.0, 2.0], [3.0, 4.0]];
/// let b = array![[5.0, 6.0], [7.0, 8.0]];
/// let c = multiply_strassen(&a, &b).unwrap();
/// assert_eq!(c, array![[19.0, 22.0], [43.0, 50.0]]);
/// ```
pub fn multiply_strassen<A: StrassenScalar>(a: &Array2<A>, b: &Array2<A>) -> Result<Array2<A>> {
    check_shapes(a, b)?;

    let n = a.nrows();
    let padded_a = pad_to_power_of_two(a);
    let padded_b = pad_to_power_of_two(b);

    let product = strassen(&padded_a, &padded_b);
    Ok(product.slice(s![..n, ..n]).to_owned())
}

/// Parallel counterpart of [`multiply_strassen`], backed by [`par_strassen`].
///
/// Produces the same result as the sequential facade for any valid input.
pub fn par_multiply_strassen<A>(a: &Array2<A>, b: &Array2<A>) -> Result<Array2<A>>
where
    A: StrassenScalar + Send + Sync,
{
    check_shapes(a, b)?;

    let n = a.nrows();
    let padded_a = pad_to_power_of_two(a);
    let padded_b = pad_to_power_of_two(b);

    let product = par_strassen(&padded_a, &padded_b);
    Ok(product.slice(s![..n, ..n]).to_owned())
}
