//! # Dot Product Algorithm
//!
//! The dot product (also known as scalar or inner product) computes the sum
//! of products of corresponding elements in two vectors:
//!
//! `dot(a, b) = Σ(a[i] * b[i])`
//!
//! [`dot`] is the reference: checked lengths, one accumulator, strict index
//! order. The other variants in [`code`] trade that order for speed and are
//! held to the reference by [`DotProductRunner::verify`].
//!
//! ## Optimization Strategies
//!
//! - **Loop unrolling**: independent accumulators to shorten the add chain
//! - **SIMD**: two f64 lanes per SSE2 register
//! - **C**: the same loops compiled by the system C compiler

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::error::{BenchError, DotError, Result};
use crate::registry::AlgorithmRunner;
use crate::utils::timer::Variant;

/// Input length for verification, deliberately not a multiple of 4
const VERIFY_SIZE: usize = 1023;
const VERIFY_SEED: u64 = 0x5EED_D07;
/// Relative tolerance for variants that reassociate the sum
const VERIFY_TOLERANCE: f64 = 1e-9;

/// Runner for the dot product algorithm
pub struct DotProductRunner;

impl DotProductRunner {
    fn verification_error(variant: &str, detail: String) -> BenchError {
        BenchError::Verification {
            algorithm: "dot_product".to_string(),
            variant: variant.to_string(),
            detail,
        }
    }
}

impl AlgorithmRunner for DotProductRunner {
    fn name(&self) -> &'static str {
        "dot_product"
    }

    fn description(&self) -> &'static str {
        "Computes the sum of products of corresponding vector elements"
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn variants<'a>(&'a self, size: usize, seed: u64) -> Vec<Variant<'a>> {
        bench::variant_closures(size, seed)
    }

    fn verify(&self) -> Result<()> {
        let (a, b) = bench::generate_inputs(VERIFY_SIZE, VERIFY_SEED);
        let expected = dot(&a, &b)?;

        for variant in code::available_variants() {
            let result = (variant.function)(&a, &b)?;
            let diff = (result - expected).abs();
            if diff > VERIFY_TOLERANCE * expected.abs().max(1.0) {
                return Err(Self::verification_error(
                    variant.name,
                    format!("expected {}, got {}, diff {}", expected, result, diff),
                ));
            }

            if (variant.function)(&[], &[]) != Ok(0.0) {
                return Err(Self::verification_error(
                    variant.name,
                    "empty vectors must give 0.0".to_string(),
                ));
            }

            for (left, right) in [(3, 2), (2, 3)] {
                let mismatch = (variant.function)(&a[..left], &b[..right]);
                if mismatch != Err(DotError::LengthMismatch { left, right }) {
                    return Err(Self::verification_error(
                        variant.name,
                        format!(
                            "lengths {} and {} must be rejected, got {:?}",
                            left, right, mismatch
                        ),
                    ));
                }
            }
        }

        Ok(())
    }
}
