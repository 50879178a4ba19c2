//! Dot product implementations.
//!
//! All variants share the [`DotProductFn`] signature and reject inputs of
//! different lengths before reading them.

pub mod c_impl;
mod iterator;
mod original;
mod scalar_opt;
#[cfg(target_arch = "x86_64")]
mod x86_64_sse2;

#[cfg(c_implementation_active)]
pub use c_impl::{dot_c_original, dot_c_scalar_opt};
pub use c_impl::C_IMPL_AVAILABLE;
pub use iterator::dot_iterator;
pub use original::{dot, dot_pairs};
pub use scalar_opt::dot_scalar_opt;
#[cfg(target_arch = "x86_64")]
pub use x86_64_sse2::dot_x86_64_sse2;

use crate::error::DotError;
use crate::utils::VariantInfo;

/// Type alias for dot product function signature
pub type DotProductFn = fn(&[f64], &[f64]) -> Result<f64, DotError>;

/// Name of the variant every other one is verified against
pub const REFERENCE_VARIANT: &str = "original";

#[inline]
pub(crate) fn check_lengths(a: &[f64], b: &[f64]) -> Result<(), DotError> {
    if a.len() != b.len() {
        return Err(DotError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Get all available variants for the current build and CPU
pub fn available_variants() -> Vec<VariantInfo<DotProductFn>> {
    #[allow(unused_mut)]
    let mut variants: Vec<VariantInfo<DotProductFn>> = vec![
        VariantInfo {
            name: REFERENCE_VARIANT,
            description: "Sequential single-accumulator reference",
            function: dot,
        },
        VariantInfo {
            name: "iterator",
            description: "zip + fold, same order as the reference",
            function: dot_iterator,
        },
        VariantInfo {
            name: "scalar_opt",
            description: "4x unrolled with four accumulators",
            function: dot_scalar_opt,
        },
    ];

    #[cfg(target_arch = "x86_64")]
    variants.push(VariantInfo {
        name: "x86_64-sse2",
        description: "x86_64 with SSE2 SIMD intrinsics (2 x f64)",
        function: dot_x86_64_sse2,
    });

    #[cfg(c_implementation_active)]
    {
        variants.push(VariantInfo {
            name: "c-original",
            description: "C reference loop",
            function: dot_c_original,
        });
        variants.push(VariantInfo {
            name: "c-scalar_opt",
            description: "C 4x unrolled loop",
            function: dot_c_scalar_opt,
        });
    }

    variants
}
