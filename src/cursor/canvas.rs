use image::RgbaImage;

use super::{ALPHA_THRESHOLD, CursorError, MAX_HEIGHT, MAX_WIDTH};

/// Fixed 64x64 grid of packed ARGB words, row-major (y outer, x inner).
///
/// Cells outside the source image's bounds are padding and stay fully
/// transparent (`0x00000000`).
pub struct Canvas {
    words: Vec<u32>,
}

impl Canvas {
    /// Build a canvas from a decoded RGBA image.
    ///
    /// Rejects images wider or taller than the canvas before touching any
    /// pixel data, so a caller can rely on no output having been produced
    /// when this fails.
    pub fn from_rgba(img: &RgbaImage) -> Result<Canvas, CursorError> {
        let (width, height) = img.dimensions();
        if width > MAX_WIDTH || height > MAX_HEIGHT {
            return Err(CursorError::TooLarge { width, height });
        }

        let mut words = vec![0u32; (MAX_WIDTH * MAX_HEIGHT) as usize];
        for y in 0..height {
            for x in 0..width {
                let px = img.get_pixel(x, y);
                words[(y * MAX_WIDTH + x) as usize] = pack_argb(px.0);
            }
        }
        Ok(Canvas { words })
    }

    /// Packed word at canvas cell (x, y).
    pub fn word(&self, x: u32, y: u32) -> u32 {
        self.words[(y * MAX_WIDTH + x) as usize]
    }

    /// Canvas rows, top to bottom, each `MAX_WIDTH` words long.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.words.chunks(MAX_WIDTH as usize)
    }
}

/// Pack one RGBA pixel into a 32-bit ARGB word.
///
/// Pixels below the alpha threshold are forced fully transparent; their
/// color channels are discarded, not blended.
fn pack_argb([r, g, b, a]: [u8; 4]) -> u32 {
    if a < ALPHA_THRESHOLD {
        return 0x00000000;
    }
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}
