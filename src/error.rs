use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the quantizer and its image collaborators.
#[derive(Debug, Error)]
pub enum QuantizeError {
    /// Seeding needs at least one pixel to draw from.
    #[error("cannot cluster an empty image")]
    EmptyImage,

    #[error("invalid cluster count: {0} (must be at least 1)")]
    InvalidClusterCount(usize),

    /// Only reachable with visible-only seeding.
    #[error("image has no visible pixels to seed from")]
    NoVisiblePixels,

    #[error("buffer size mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("invalid cluster range {min}..={max}")]
    InvalidRange { min: usize, max: usize },

    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("sweep worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, QuantizeError>;
