//! Error types for strassen operations.
//!
//! This module defines custom error types that provide better error handling
//! than panicking, allowing applications to gracefully handle failures.
//!
//! Only conditions a caller can cause are modelled as errors. Violations of
//! internal invariants (a non-power-of-two side reaching the recursion, an
//! odd side reaching the quadrant splitter) indicate a bug in the padding
//! stage and are enforced with debug assertions instead.

use std::fmt;

/// Errors that can occur during strassen operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrassenError {
    /// Input matrices are not both square, or are not of equal size.
    ShapeMismatch {
        /// Shape of the left-hand matrix as (rows, cols).
        left: (usize, usize),
        /// Shape of the right-hand matrix as (rows, cols).
        right: (usize, usize),
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for StrassenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrassenError::ShapeMismatch {
                left,
                right,
                message,
            } => write!(
                f,
                "Shape mismatch: {} (left: {}x{}, right: {}x{})",
                message, left.0, left.1, right.0, right.1
            ),
        }
    }
}

impl std::error::Error for StrassenError {}

/// Result type alias for strassen operations.
pub type Result<T> = std::result::Result<T, StrassenError>;

/// Creates a shape mismatch error.
pub fn shape_mismatch(
    left: (usize, usize),
    right: (usize, usize),
    message: impl Into<String>,
) -> StrassenError {
    StrassenError::ShapeMismatch {
        left,
        right,
        message: message.into(),
    }
}
