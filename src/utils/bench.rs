//! Shared benchmark utilities.
//!
//! Seeded input generation and measurement formatting used by every
//! algorithm runner.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Reproducible RNG for input generation and scheduling
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Vector of `len` values uniformly drawn from [-1.0, 1.0)
pub fn random_vector(rng: &mut impl Rng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.random_range(-1.0..1.0)).collect()
}

/// Vector of `len` values uniformly drawn from [0.0, 1.0)
pub fn random_unit_vector(rng: &mut impl Rng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.random::<f64>()).collect()
}

/// Human-readable duration with an adaptive unit
pub fn format_measurement(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos < 1_000 {
        format!("{} ns", nanos)
    } else if nanos < 1_000_000 {
        format!("{:.2} µs", nanos as f64 / 1e3)
    } else if nanos < 1_000_000_000 {
        format!("{:.2} ms", nanos as f64 / 1e6)
    } else {
        format!("{:.3} s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_vectors() {
        let a = random_vector(&mut seeded_rng(42), 100);
        let b = random_vector(&mut seeded_rng(42), 100);
        assert_eq!(a, b);
    }

    #[test]
    fn test_vector_ranges() {
        let mut rng = seeded_rng(1);
        assert!(random_vector(&mut rng, 1000)
            .iter()
            .all(|x| (-1.0..1.0).contains(x)));
        assert!(random_unit_vector(&mut rng, 1000)
            .iter()
            .all(|x| (0.0..1.0).contains(x)));
    }

    #[test]
    fn test_format_measurement_units() {
        assert_eq!(format_measurement(Duration::from_nanos(512)), "512 ns");
        assert_eq!(format_measurement(Duration::from_nanos(1_500)), "1.50 µs");
        assert_eq!(format_measurement(Duration::from_micros(2_250)), "2.25 ms");
        assert_eq!(format_measurement(Duration::from_secs(3)), "3.000 s");
    }
}
