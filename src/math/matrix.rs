//! 4x4 matrix inversion via Gauss-Jordan elimination.
//!
//! The normal-equations matrix `XᵗX` is always 4x4 in this crate, so the
//! routine works on nalgebra's fixed-size `Matrix4` and never allocates.
//!
//! Numerical notes:
//! - Partial pivoting: before each elimination step the largest-magnitude
//!   candidate pivot is swapped into place. Naive elimination loses
//!   precision when a diagonal entry is near zero, which happens easily
//!   with predictor columns of very different scales.
//! - Singular input is not guarded. A zero pivot divides through and the
//!   Inf/NaN entries propagate to the caller, which checks finiteness
//!   after solving.

use nalgebra::Matrix4;

/// Invert a 4x4 matrix using Gauss-Jordan elimination with partial pivoting.
///
/// The working copy is reduced to the identity while the same row operations
/// accumulate the inverse. Pivot ties break toward the lowest row index
/// (strict `>` scan), so the result is deterministic for a given input.
pub fn invert4x4(matrix: &Matrix4<f64>) -> Matrix4<f64> {
    let mut work = *matrix;
    let mut inverse = Matrix4::<f64>::identity();

    for i in 0..4 {
        // Select the pivot row for column `i`.
        let mut pivot_row = i;
        for k in (i + 1)..4 {
            if work[(k, i)].abs() > work[(pivot_row, i)].abs() {
                pivot_row = k;
            }
        }
        if pivot_row != i {
            work.swap_rows(i, pivot_row);
            inverse.swap_rows(i, pivot_row);
        }

        // Normalize the pivot row.
        let pivot = work[(i, i)];
        for j in 0..4 {
            work[(i, j)] /= pivot;
            inverse[(i, j)] /= pivot;
        }

        // Eliminate column `i` from every other row.
        for k in 0..4 {
            if k == i {
                continue;
            }
            let factor = work[(k, i)];
            for j in 0..4 {
                work[(k, j)] -= factor * work[(i, j)];
                inverse[(k, j)] -= factor * inverse[(i, j)];
            }
        }
    }

    inverse
}
