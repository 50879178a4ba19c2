//! Benchmark configuration.

use std::path::PathBuf;

use crate::error::{BenchError, Result};
use crate::utils::timer::TimingConfig;

/// Default input sizes, one result table per size.
pub const DEFAULT_SIZES: [usize; 5] = [64, 256, 1024, 4096, 16384];

/// Vector length used by the one-shot comparison.
pub const DEFAULT_COMPARE_LEN: usize = 1_000_000;

/// Settings for a benchmark run.
#[derive(Clone, Debug)]
pub struct BenchConfig {
    pub sizes: Vec<usize>,
    /// Samples collected per variant and size
    pub runs_per_variant: usize,
    /// Untimed calls per variant before sampling starts
    pub warmup_iterations: usize,
    /// Seed for input generation; `None` picks one from the clock
    pub seed: Option<u64>,
    /// Write raw timings here when set
    pub csv_path: Option<PathBuf>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        let timing = TimingConfig::default();
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            runs_per_variant: timing.runs_per_variant,
            warmup_iterations: timing.warmup_iterations,
            seed: None,
            csv_path: None,
        }
    }
}

impl BenchConfig {
    /// Reject settings that cannot produce a measurement.
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(BenchError::InvalidConfig(
                "at least one input size is required".to_string(),
            ));
        }
        if self.runs_per_variant == 0 {
            return Err(BenchError::InvalidConfig(
                "runs per variant must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn timing(&self) -> TimingConfig {
        TimingConfig {
            runs_per_variant: self.runs_per_variant,
            warmup_iterations: self.warmup_iterations,
        }
    }

    /// The configured seed, or one derived from the current time.
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(crate::utils::bench::time_seed)
    }
}
