//! Error types for layerpix-sample

use thiserror::Error;

/// Errors that can occur in the sampling engine
#[derive(Debug, Error)]
pub enum SampleError {
    /// Unrecognized sample mode string
    ///
    /// This is a caller contract violation, not a recoverable condition;
    /// it must not be caught and defaulted.
    #[error("invalid sample mode: {0:?}")]
    InvalidMode(String),
}

/// Result type for sampling operations
pub type SampleResult<T> = Result<T, SampleError>;
