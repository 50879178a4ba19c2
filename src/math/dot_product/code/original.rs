//! Reference implementation of the dot product.
//!
//! Every other variant is verified against this one.

use super::check_lengths;
use crate::error::DotError;

/// Compute the dot product of two vectors.
///
/// The products are added left to right into a single accumulator that
/// starts at `0.0`, with no reassociation and no compensation, so the
/// result carries plain sequential rounding.
///
/// # Errors
/// Returns [`DotError::LengthMismatch`] when the vectors differ in length,
/// whichever one is longer. No element is read in that case.
///
/// # Example
/// ```
/// use dot_bench::math::dot_product::dot;
///
/// assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), Ok(32.0));
/// assert!(dot(&[1.0, 2.0], &[3.0]).is_err());
/// ```
pub fn dot(v1: &[f64], v2: &[f64]) -> Result<f64, DotError> {
    check_lengths(v1, v2)?;

    let mut s = 0.0;
    for (x, y) in v1.iter().zip(v2) {
        s += x * y;
    }
    Ok(s)
}

/// Dot product over already-paired elements.
///
/// The pairing makes a length mismatch impossible, so this cannot fail.
/// Accumulation order is the same as [`dot`].
pub fn dot_pairs(pairs: &[(f64, f64)]) -> f64 {
    let mut s = 0.0;
    for &(x, y) in pairs {
        s += x * y;
    }
    s
}
