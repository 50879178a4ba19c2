//! Optimized scalar implementation with loop unrolling.
//!
//! Four independent accumulators break the dependency chain on the
//! running sum so the CPU can overlap the additions.

use super::check_lengths;
use crate::error::DotError;

/// Compute the dot product with 4x loop unrolling.
///
/// Partial sums are combined as `(s0 + s1) + (s2 + s3)`, so the result can
/// differ from the reference in the low bits.
pub fn dot_scalar_opt(a: &[f64], b: &[f64]) -> Result<f64, DotError> {
    check_lengths(a, b)?;

    let mut sum0 = 0.0;
    let mut sum1 = 0.0;
    let mut sum2 = 0.0;
    let mut sum3 = 0.0;

    let a_chunks = a.chunks_exact(4);
    let b_chunks = b.chunks_exact(4);
    let a_rem = a_chunks.remainder();
    let b_rem = b_chunks.remainder();

    for (x, y) in a_chunks.zip(b_chunks) {
        sum0 += x[0] * y[0];
        sum1 += x[1] * y[1];
        sum2 += x[2] * y[2];
        sum3 += x[3] * y[3];
    }

    for (x, y) in a_rem.iter().zip(b_rem) {
        sum0 += x * y;
    }

    Ok((sum0 + sum1) + (sum2 + sum3))
}
