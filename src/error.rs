//! Error types for dot products and the benchmark harness.

use thiserror::Error;

/// Failure of a dot product call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DotError {
    /// The two input vectors do not have the same number of elements.
    #[error("length mismatch: left vector has {left} elements, right vector has {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// Errors raised while verifying or benchmarking algorithms.
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),

    #[error("variant '{variant}' of '{algorithm}' failed verification: {detail}")]
    Verification {
        algorithm: String,
        variant: String,
        detail: String,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Dot(#[from] DotError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T, E = BenchError> = std::result::Result<T, E>;
