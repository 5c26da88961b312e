//! Error types.
//!
//! Every error is raised before the first generation is produced: catalog
//! loading and engine construction validate everything up front, and a
//! running engine has no recoverable failure modes.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration or the catalog it is paired with is unusable.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// The mutation operator cannot be applied to chromosomes of this length.
    #[error(
        "invalid operator: mutations_count {mutations_count} exceeds chromosome length {chromosome_len}"
    )]
    InvalidOperator {
        mutations_count: usize,
        chromosome_len: usize,
    },

    /// A catalog record carries a negative or non-finite number.
    #[error("invalid item at index {index}: {reason}")]
    InvalidItem { index: usize, reason: String },

    /// The catalog document could not be parsed.
    #[error("failed to parse item catalog: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("item catalog must contain at least one item")]
    EmptyCatalog,
    #[error("weight_limit must be a finite non-negative number, got {0}")]
    InvalidWeightLimit(f64),
    #[error("parents_count must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("{name} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },
    #[error("potential_fitness must not be NaN")]
    InvalidPotentialFitness,
}
