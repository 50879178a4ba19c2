//! Timing system for micro-benchmarks.
//!
//! - Warm-up calls before any sample is taken
//! - Randomized variant execution to avoid ordering bias
//! - Per-variant statistics over the raw samples

use std::hint::black_box;
use std::time::Duration;

use rand::seq::SliceRandom;
use tracing::debug;

use super::bench::seeded_rng;

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of samples to collect per variant (default: 30)
    pub runs_per_variant: usize,
    /// Number of warmup iterations before measurement (default: 10)
    pub warmup_iterations: usize,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
        }
    }
}

/// A variant to be measured
pub struct Variant<'a> {
    pub name: &'static str,
    pub description: &'static str,
    /// Runs one call and returns (elapsed, optional result value).
    /// Timing happens inside the closure so dispatch cost is not measured.
    pub run: Box<dyn FnMut() -> (Duration, Option<f64>) + 'a>,
}

/// Result from measuring a single variant
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    pub avg_time: Duration,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    pub std_dev: Duration,
    /// Number of samples the statistics were computed from
    pub samples: usize,
    /// Last value the variant returned
    pub result_sample: Option<f64>,
}

/// Measure multiple variants with randomized execution order.
///
/// Every variant is warmed up, then `runs_per_variant` samples of each are
/// taken in a shuffled order driven by `schedule_seed`.
pub fn measure_variants(
    mut variants: Vec<Variant>,
    config: &TimingConfig,
    schedule_seed: u64,
) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant;

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    let mut tasks: Vec<usize> = (0..variants.len())
        .flat_map(|v| std::iter::repeat(v).take(samples))
        .collect();
    tasks.shuffle(&mut seeded_rng(schedule_seed));
    debug!(tasks = tasks.len(), variants = variants.len(), "running sample schedule");

    let mut measurements: Vec<Vec<Duration>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    for variant_idx in tasks {
        let (elapsed, result) = (variants[variant_idx].run)();
        measurements[variant_idx].push(elapsed);
        result_samples[variant_idx] = result;
    }

    variants
        .into_iter()
        .zip(measurements)
        .zip(result_samples)
        .map(|((variant, times), result_sample)| {
            compute_variant_result(variant.name, variant.description, &times, result_sample)
        })
        .collect()
}

/// Compute statistics from raw measurements
fn compute_variant_result(
    name: &str,
    description: &str,
    times: &[Duration],
    result_sample: Option<f64>,
) -> VariantResult {
    let (avg, min, max, std_dev) = compute_stats(times);
    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time: avg,
        median_time: calculate_median(times),
        min_time: min,
        max_time: max,
        std_dev,
        samples: times.len(),
        result_sample,
    }
}

/// (average, min, max, sample standard deviation)
pub fn compute_stats(times: &[Duration]) -> (Duration, Duration, Duration, Duration) {
    let (Some(&min), Some(&max)) = (times.iter().min(), times.iter().max()) else {
        return (Duration::ZERO, Duration::ZERO, Duration::ZERO, Duration::ZERO);
    };

    let total: Duration = times.iter().sum();
    let avg = total / times.len() as u32;
    (avg, min, max, calculate_std_dev(times, avg))
}

/// Calculate standard deviation from a list of durations
pub fn calculate_std_dev(times: &[Duration], mean: Duration) -> Duration {
    if times.len() < 2 {
        return Duration::ZERO;
    }

    let mean_ns = mean.as_nanos() as f64;
    let variance: f64 = times
        .iter()
        .map(|t| {
            let diff = t.as_nanos() as f64 - mean_ns;
            diff * diff
        })
        .sum::<f64>()
        / (times.len() - 1) as f64;

    Duration::from_nanos(variance.sqrt() as u64)
}

/// Calculate median from a slice of durations.
pub fn calculate_median(times: &[Duration]) -> Duration {
    if times.is_empty() {
        return Duration::ZERO;
    }
    let mut sorted = times.to_vec();
    sorted.sort();
    sorted[sorted.len() / 2]
}
