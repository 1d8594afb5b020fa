//! Error types for the mesh layer.

use thiserror::Error;

/// Errors raised when strip parameters violate their constraints.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ParameterError {
    /// Radius must be strictly positive.
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    /// Width must be strictly positive.
    #[error("width must be positive, got {0}")]
    NonPositiveWidth(f64),

    /// At least two samples per parameter axis are required.
    #[error("resolution must be at least 2, got {0}")]
    ResolutionTooSmall(usize),
}

/// Result type for mesh-layer operations.
pub type Result<T> = std::result::Result<T, ParameterError>;
