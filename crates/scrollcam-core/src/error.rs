//! Error types for the choreography core.

use thiserror::Error;

/// Errors raised while assembling a choreography.
///
/// Only construction-time validation produces these. Once a [`Director`]
/// exists every runtime failure (missing model, missing anchor, late
/// callbacks) degrades to a static camera and is logged instead.
///
/// [`Director`]: crate::Director
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChoreographyError {
    /// A trigger string such as `"top center"` could not be parsed
    #[error("invalid anchor point {0:?}: expected \"<anchor-edge> <viewport-edge>\"")]
    InvalidAnchorPoint(String),

    /// The shot catalog is malformed
    #[error("invalid shot catalog: {0}")]
    InvalidCatalog(String),

    /// A tuning value is out of range
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The asset source reported a terminal failure
    #[error("model load failed: {0}")]
    ModelLoad(String),
}

/// Result type alias using the core's error type.
pub type Result<T> = std::result::Result<T, ChoreographyError>;
