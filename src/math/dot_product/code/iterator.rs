//! Iterator-based implementation.

use super::check_lengths;
use crate::error::DotError;

/// Compute the dot product with `zip` and `fold`.
///
/// Same addition order as the reference, so results are bit-identical.
pub fn dot_iterator(a: &[f64], b: &[f64]) -> Result<f64, DotError> {
    check_lengths(a, b)?;

    Ok(a.iter().zip(b).fold(0.0, |acc, (x, y)| acc + x * y))
}
