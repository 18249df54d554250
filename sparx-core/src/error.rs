//! Error types for sparx-core.

use thiserror::Error;

/// Result type alias for sparx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for sparx operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid detector geometry.
    #[error("invalid frame geometry {width}x{height}: dimensions must be positive")]
    InvalidGeometry {
        /// Requested frame width.
        width: u32,
        /// Requested frame height.
        height: u32,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}
