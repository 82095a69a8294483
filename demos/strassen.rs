//! Strassen Multiplication Walkthrough
//!
//! This example demonstrates the public API end to end: a known 2x2 product,
//! the padding path for an odd side, and graceful shape-mismatch handling.

use ndarray::{array, Array2};
use strassen::{multiply_strassen, par_multiply_strassen, StrassenError};

fn main() {
    println!("🔢 Strassen Multiplication Demonstration\n");

    // Example 1: 2x2 product with a known result
    println!("✅ Example 1: 2x2 product");
    let a = array![[1.0, 2.0], [3.0, 4.0]];
    let b = array![[5.0, 6.0], [7.0, 8.0]];
    match multiply_strassen(&a, &b) {
        Ok(c) => println!("   [[1,2],[3,4]] * [[5,6],[7,8]] = {:?}", c),
        Err(e) => println!("   Error: {}", e),
    }
    println!();

    // Example 2: Odd side - pads to 4x4 internally, slices back to 3x3
    println!("✅ Example 2: 3x3 product through the padding path");
    let a = array![[2.0, 0.0, 1.0], [1.0, 3.0, 0.0], [0.0, 1.0, 4.0]];
    let b = array![[1.0, 2.0, 0.0], [0.0, 1.0, 2.0], [3.0, 0.0, 1.0]];
    match multiply_strassen(&a, &b) {
        Ok(c) => {
            println!("   Result shape: {:?}", c.dim());
            println!("   Result: {:?}", c);
        }
        Err(e) => println!("   Error: {}", e),
    }
    println!();

    // Example 3: The parallel facade gives the same result
    println!("✅ Example 3: Parallel facade");
    match par_multiply_strassen(&a, &b) {
        Ok(c) => println!("   Parallel result: {:?}", c),
        Err(e) => println!("   Error: {}", e),
    }
    println!();

    // Example 4: Shape mismatch - handled as an error, not a panic
    println!("❌ Example 4: Shape mismatch handling");
    let rect = Array2::<f64>::zeros((2, 3));
    let square = Array2::<f64>::zeros((3, 3));
    match multiply_strassen(&rect, &square) {
        Ok(c) => println!("   Unexpected success: {:?}", c),
        Err(StrassenError::ShapeMismatch { left, right, message }) => {
            println!("   Error caught: {}", message);
            println!("   Shapes were {:?} and {:?}", left, right);
        }
    }
}
