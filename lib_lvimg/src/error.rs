use std::io;
use std::path::PathBuf;

use image::ImageError;
use thiserror::Error;

use crate::source::ParseError;

#[derive(Error, Debug)]
pub enum LvImgError {
    #[error("Failed to parse LVGL image source")]
    Parse(#[from] ParseError),

    #[error("Failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Image processing error")]
    Image(#[from] ImageError),

    #[error("Pixel buffer does not match {width}x{height}")]
    BufferMismatch { width: u32, height: u32 },
}

impl LvImgError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Like `From<ImageError>`, but file access failures become [`LvImgError::Io`].
    pub(crate) fn image(path: impl Into<PathBuf>, err: ImageError) -> Self {
        match err {
            ImageError::IoError(source) => Self::io(path, source),
            other => Self::Image(other),
        }
    }
}
