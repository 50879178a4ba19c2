//! Algorithm registry for dynamic algorithm discovery and execution.
//!
//! The CLI enumerates the registry instead of knowing about each algorithm.

use crate::error::Result;
use crate::utils::timer::Variant;

/// Result from running a variant benchmark
pub use crate::utils::timer::VariantResult as BenchmarkResult;

/// Trait that all algorithm benchmarkers must implement
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the algorithm (e.g., "dot_product")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "math")
    fn category(&self) -> &'static str;

    /// Variant names available on this build and CPU
    fn available_variants(&self) -> Vec<&'static str>;

    /// One closure per variant over inputs of `size` generated from `seed`.
    /// Each closure does ONE timed execution; the timer handles warmup
    /// and repetition.
    fn variants<'a>(&'a self, size: usize, seed: u64) -> Vec<Variant<'a>>;

    /// Check every variant against the reference implementation
    fn verify(&self) -> Result<()>;
}

/// Registry of all algorithms
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    pub fn by_category(&self, category: &str) -> Vec<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .filter(|a| a.category() == category)
            .map(|a| a.as_ref())
            .collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();
    registry.register(crate::math::dot_product::DotProductRunner);
    registry
}
