use thiserror::Error;

/// Errors returned by the sampling and trend operations.
///
/// Every variant is a violated precondition. They are raised before any
/// output is built, so a failed call never yields a partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SynthError {
    #[error("iteration count must be at least 1")]
    ZeroIterations,
    #[error("at least one point required")]
    NoPoints,
    #[error("dimension mismatch: point {index} has {found} coordinates, direction has {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },
}

impl SynthError {
    /// Whether the error is caused by an invalid argument.
    ///
    /// All current variants are, but matching on this keeps callers working
    /// if other kinds of failure are ever added.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            SynthError::ZeroIterations | SynthError::NoPoints | SynthError::DimensionMismatch { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SynthError>;
