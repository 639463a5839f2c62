use std::path::PathBuf;

use thiserror::Error;

use crate::raster::Backend;

/// Errors produced while generating logo assets
#[derive(Debug, Error)]
pub enum LogoError {
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode PNG: {0}")]
    Encode(#[from] image::ImageError),

    /// The SVG renderer rejected the markup
    #[error("failed to render SVG markup: {0}")]
    Markup(String),

    #[error("invalid image size {0}, must be at least 1px")]
    InvalidSize(u32),

    /// A backend was asked to render but was compiled out
    #[error("{0} backend is not available in this build")]
    Unsupported(Backend),

    #[error(
        "no raster backend available; rebuild with `--features draw` (or `svg-render`) to produce PNG files"
    )]
    NoRasterizer,
}

impl LogoError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LogoError::Io {
            path: path.into(),
            source,
        }
    }

    /// Capability problems are reported per artifact instead of aborting the run
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LogoError::NoRasterizer | LogoError::Unsupported(_) | LogoError::Markup(_)
        )
    }
}
