use thiserror::Error;

/// Errors produced at the estimator's input boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The sample count must be a positive integer.
    #[error("sample count must be at least 1, got {0}")]
    InvalidSampleCount(usize),
}

/// A specialized `Result` type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
