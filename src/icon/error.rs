//! Icon generation error types.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// IconError
// ============================================================================

/// Errors raised while decoding, fitting, encoding or writing icons
#[derive(Debug, Error)]
pub enum IconError {
    #[error("cannot decode `{}`", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error at `{}`", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot encode `{}`", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("source image has no pixels ({width}x{height})")]
    InvalidImage { width: u32, height: u32 },

    #[error("target canvas has no pixels ({width}x{height})")]
    InvalidTarget { width: u32, height: u32 },
}

impl IconError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn encode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Encode {
            path: path.into(),
            source,
        }
    }
}
