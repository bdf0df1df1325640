//! Error types for clock overlay rendering

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for overlay operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while composing or writing the overlay
#[derive(Error, Debug)]
pub enum Error {
    /// The font resource is missing, unreadable, or not a usable font
    #[error("Failed to load font {source_name}: {reason}")]
    FontLoad { source_name: String, reason: String },

    /// Canvas width or height is zero
    #[error("Invalid canvas dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: u32, height: u32 },

    /// The output file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    /// Encoded bytes could not be decoded back into pixels
    #[error("PNG decoding failed: {0}")]
    Decode(String),

    /// A user-supplied timestamp did not match `YYYY-MM-DD HH:MM:SS`
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
