//! Utility modules for benchmarking and reporting.

pub mod bench;
pub mod runner;
pub mod timer;
pub mod tui;

pub use bench::{format_measurement, random_vector, seeded_rng, time_seed};
pub use timer::{calculate_median, compute_stats, measure_variants, TimingConfig, Variant, VariantResult};

/// C compiler name detected at build time
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");

/// Information about an algorithm implementation variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "original", "x86_64-sse2")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}
