//! Rigaku-specific error types.

use thiserror::Error;

/// Result type for Rigaku format operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Rigaku-specific error types.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration parse error.
    #[error("configuration parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Core library error.
    #[error("core error: {0}")]
    Core(#[from] sparx_core::Error),
}
