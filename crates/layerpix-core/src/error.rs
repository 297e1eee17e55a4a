//! Error types for layerpix-core
//!
//! Provides a unified error type for the core data structures. Each variant
//! captures enough context for diagnostics without exposing internal
//! implementation details.

use thiserror::Error;

/// Layerpix core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid buffer dimensions
    #[error("invalid buffer dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Buffer length does not match its dimensions
    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Coordinates out of bounds for a checked write
    #[error("coordinates out of bounds: ({x}, {y})")]
    CoordOutOfBounds { x: u32, y: u32 },
}

/// Result type alias for layerpix core operations
pub type Result<T> = std::result::Result<T, Error>;
