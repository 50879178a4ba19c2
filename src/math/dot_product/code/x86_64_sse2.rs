//! x86_64 SSE2 SIMD implementation.
//!
//! SSE2 is part of the x86_64 baseline, so no runtime detection is needed.
//! Each 128-bit register holds 2 f64 lanes.

use std::arch::x86_64::*;

use super::check_lengths;
use crate::error::DotError;

/// Compute the dot product using SSE2 SIMD instructions.
///
/// Two lanes accumulate even and odd indices separately and are summed at
/// the end, so the result can differ from the reference in the low bits.
pub fn dot_x86_64_sse2(a: &[f64], b: &[f64]) -> Result<f64, DotError> {
    check_lengths(a, b)?;

    let len = a.len();
    let chunks = len / 2;

    // SAFETY: SSE2 is always available on x86_64 and every load reads
    // indices idx and idx + 1 with idx + 1 < chunks * 2 <= len for both
    // slices, which have equal length.
    let mut result = unsafe {
        let mut sum_vec = _mm_setzero_pd();

        for i in 0..chunks {
            let idx = i * 2;
            let a_vec = _mm_loadu_pd(a.as_ptr().add(idx));
            let b_vec = _mm_loadu_pd(b.as_ptr().add(idx));
            sum_vec = _mm_add_pd(sum_vec, _mm_mul_pd(a_vec, b_vec));
        }

        // [lo, hi] -> lo + hi
        let hi = _mm_unpackhi_pd(sum_vec, sum_vec);
        _mm_cvtsd_f64(_mm_add_sd(sum_vec, hi))
    };

    if len % 2 == 1 {
        result += a[len - 1] * b[len - 1];
    }

    Ok(result)
}
