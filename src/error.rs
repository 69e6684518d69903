//! Error type shared by the tracer's collaborator layers.
//!
//! The tracing core never fails; every variant here belongs to a boundary
//! (decoding, configuration, scaling) around it.

use std::path::PathBuf;

/// Errors raised around the tracing core.
#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    /// The traced polyline set was empty.
    #[error("No traceable black pixels were found in the image.")]
    NoForeground,

    /// Every traced point shares one X coordinate, so there is no width to scale.
    #[error("Cannot scale image because traced width is zero.")]
    ZeroWidth,

    /// Pixel buffer with a channel count other than 1, 3 or 4.
    #[error("unsupported channel count: {0} (expected 1, 3 or 4)")]
    UnsupportedChannels(usize),

    /// Malformed ASCII grid.
    #[error("grid parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Image decoding error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Invalid configuration value or document.
    #[error("config error: {message}")]
    Config { message: String },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TraceError>;

impl TraceError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create a parse error for the given 1-based line.
    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: msg.into(),
        }
    }

    /// Wrap an I/O error with the path it happened at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
