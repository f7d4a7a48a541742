//! Error types for grid transformations.

use thiserror::Error;

/// Errors that can occur while reshaping grid arrays.
#[derive(Error, Debug)]
pub enum GridError {
    /// Input arrays disagree on grid dimensions.
    #[error("{name} shape {actual:?} does not match grid shape {expected:?}")]
    ShapeMismatch {
        name: String,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Grid dimensions the transformation cannot handle.
    #[error("unsupported resolution: {0}")]
    UnsupportedResolution(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl GridError {
    /// Create a ShapeMismatch error. Shapes are (width, height).
    pub fn shape_mismatch(
        name: impl Into<String>,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> Self {
        Self::ShapeMismatch {
            name: name.into(),
            expected,
            actual,
        }
    }

    /// Create an UnsupportedResolution error.
    pub fn unsupported_resolution(msg: impl Into<String>) -> Self {
        Self::UnsupportedResolution(msg.into())
    }

    /// Create a ConfigError.
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

/// Result type for grid transformations.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_display() {
        let err = GridError::shape_mismatch("field", (320, 384), (320, 383));
        let msg = err.to_string();
        assert!(msg.contains("field"));
        assert!(msg.contains("(320, 384)"));
        assert!(msg.contains("(320, 383)"));
    }

    #[test]
    fn test_unsupported_resolution_display() {
        let err = GridError::unsupported_resolution("321 columns");
        assert!(err.to_string().contains("unsupported resolution"));
    }
}
