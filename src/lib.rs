//! # dot-bench
//!
//! A checked `f64` dot product, plus a set of alternative implementations
//! (unrolled Rust, SSE2, C) that are verified against it and benchmarked.
//!
//! ```
//! let v1 = [1.0, 2.0, 3.0];
//! let v2 = [4.0, 5.0, 6.0];
//! assert_eq!(dot_bench::dot(&v1, &v2), Ok(32.0));
//! ```

pub mod config;
pub mod error;
pub mod math;
pub mod registry;
pub mod utils;

pub use error::{BenchError, DotError};
pub use math::dot_product::{dot, dot_pairs};

/// Re-export tui from utils
pub use utils::tui;

/// Re-export the benchmark entry points from utils::runner
pub use utils::runner::{run_algorithm, run_compare, verify_all};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::BenchConfig;
    pub use crate::error::{BenchError, DotError};
    pub use crate::math::dot_product::{self, dot, dot_pairs};
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
}
