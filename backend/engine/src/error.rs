use thiserror::Error;

use crate::algorithm::Algorithm;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Ways a window descriptor can fail to describe a window of the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundsViolation {
    #[error("Invalid parameters: window start {start} is negative")]
    NegativeStart { start: i64 },

    #[error("Invalid parameters: window size {size} must be positive")]
    NonPositiveSize { size: i64 },

    #[error("Window extends beyond array bounds: {start} + {size} > {len}")]
    Exceeded { start: usize, size: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("Sequence cannot be empty")]
    EmptyInput,

    #[error(transparent)]
    InvalidWindowBounds(#[from] BoundsViolation),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Algorithm {algorithm} requires numeric elements")]
    NonNumericSequence { algorithm: Algorithm },

    #[error("Algorithm {algorithm} requires a {parameter} parameter")]
    MissingParameter {
        algorithm: Algorithm,
        parameter: &'static str,
    },

    #[error("Algorithm {0} has no full-slide form")]
    NotSlidable(Algorithm),

    #[error("Integer overflow while evaluating {algorithm}")]
    Overflow { algorithm: Algorithm },
}
