//! Error types for the host-facing side of the renderer.

use thiserror::Error;

/// Errors from configuration and output handling. Ray tracing itself does
/// not fail.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON for [`crate::config::RenderConfig`].
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Encoding the output image failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Configuration parsed but holds unusable values.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for host-facing operations.
pub type Result<T> = std::result::Result<T, Error>;
