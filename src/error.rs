use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while editing, loading or saving a drawing
#[derive(Debug, Error)]
pub enum StudioError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image codec error on {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid configuration in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type used throughout the studio
pub type StudioResult<T> = Result<T, StudioError>;
