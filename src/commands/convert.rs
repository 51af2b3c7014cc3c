use std::io::Write;
use std::path::Path;

use crate::cursor::CursorError;
use crate::cursor::canvas::Canvas;
use crate::cursor::emit::write_c_array;

/// Decode the image at `path` and write the cursor array to `out`.
///
/// Decoding normalizes to RGBA8; images without an alpha channel get a
/// fully opaque one. The size check happens before anything is written, so
/// a failing run produces no output at all.
pub fn run<W: Write>(path: &Path, out: &mut W) -> Result<(), CursorError> {
    let img = image::open(path)?.to_rgba8();
    let canvas = Canvas::from_rgba(&img)?;
    write_c_array(out, &canvas)?;
    Ok(())
}
