pub mod canvas;
pub mod emit;

use std::fmt;
use std::io;

/// Output canvas width in pixels
pub const MAX_WIDTH: u32 = 64;
/// Output canvas height in pixels
pub const MAX_HEIGHT: u32 = 64;
/// Pixels with alpha below this value (0-255 scale) become fully transparent
pub const ALPHA_THRESHOLD: u8 = 10;

/// Errors from cursor conversion.
#[derive(Debug)]
pub enum CursorError {
    /// Source image exceeds the canvas in at least one dimension
    TooLarge { width: u32, height: u32 },
    /// Failed to open or decode the source image
    Decode(image::ImageError),
    /// Failed to write the generated array
    Write(io::Error),
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorError::TooLarge { width, height } => {
                write!(
                    f,
                    "image too large ({}x{}), max is {}x{}",
                    width, height, MAX_WIDTH, MAX_HEIGHT
                )
            }
            CursorError::Decode(e) => write!(f, "failed to decode image: {}", e),
            CursorError::Write(e) => write!(f, "failed to write output: {}", e),
        }
    }
}

impl std::error::Error for CursorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CursorError::TooLarge { .. } => None,
            CursorError::Decode(e) => Some(e),
            CursorError::Write(e) => Some(e),
        }
    }
}

impl From<image::ImageError> for CursorError {
    fn from(e: image::ImageError) -> Self {
        CursorError::Decode(e)
    }
}

impl From<io::Error> for CursorError {
    fn from(e: io::Error) -> Self {
        CursorError::Write(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_large_names_both_dimensions() {
        let err = CursorError::TooLarge { width: 65, height: 10 };
        let msg = err.to_string();
        assert!(msg.contains("65x10"));
        assert!(msg.contains("64x64"));
    }
}
