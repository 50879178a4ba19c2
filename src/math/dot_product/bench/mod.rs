//! Benchmark utilities for dot product.

use std::hint::black_box;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use super::code::available_variants;
use crate::error::DotError;
use crate::utils::bench::{random_unit_vector, random_vector, seeded_rng};
use crate::utils::timer::Variant;

/// Two input vectors of `size` values in [-1.0, 1.0), reproducible from `seed`
pub fn generate_inputs(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = seeded_rng(seed);
    let a = random_vector(&mut rng, size);
    let b = random_vector(&mut rng, size);
    (a, b)
}

/// One timed-call closure per available variant, all sharing the same inputs
pub fn variant_closures<'a>(size: usize, seed: u64) -> Vec<Variant<'a>> {
    let (a, b) = generate_inputs(size, seed);
    let a = Arc::new(a);
    let b = Arc::new(b);

    available_variants()
        .into_iter()
        .map(|v| {
            let a = Arc::clone(&a);
            let b = Arc::clone(&b);
            let func = v.function;

            Variant {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let start = Instant::now();
                    let result = func(black_box(a.as_slice()), black_box(b.as_slice()));
                    let elapsed = start.elapsed();
                    (elapsed, black_box(result).ok())
                }),
            }
        })
        .collect()
}

/// Outcome of a single untimed-warmup call in [`compare`]
#[derive(Debug, Clone)]
pub struct CompareResult {
    pub name: &'static str,
    pub answer: Result<f64, DotError>,
    pub elapsed: Duration,
}

/// Call every variant once over `n` values in [0.0, 1.0) and time each call.
///
/// No warmup and no repetition: this is the quick side-by-side view, not a
/// measurement to draw conclusions from.
pub fn compare(n: usize, seed: u64) -> Vec<CompareResult> {
    let mut rng = seeded_rng(seed);
    let v1 = random_unit_vector(&mut rng, n);
    let v2 = random_unit_vector(&mut rng, n);
    debug!(n, seed, "generated comparison inputs");

    available_variants()
        .into_iter()
        .map(|v| {
            let start = Instant::now();
            let answer = (v.function)(black_box(v1.as_slice()), black_box(v2.as_slice()));
            CompareResult {
                name: v.name,
                answer,
                elapsed: start.elapsed(),
            }
        })
        .collect()
}
