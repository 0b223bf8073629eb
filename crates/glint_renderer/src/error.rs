//! Render errors.

use thiserror::Error;

/// Structural problems that prevent a scene from being rendered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Scene has no camera")]
    MissingCamera,

    #[error("Invalid image size {width}x{height}: width and height must be positive")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
