use std::io::{self, Write};

use super::canvas::Canvas;
use super::{MAX_HEIGHT, MAX_WIDTH};

/// Write the canvas as a C source fragment declaring `cursor_data`.
///
/// The output shape is a compatibility surface for code that includes the
/// generated file verbatim: array name, length, word formatting, and the
/// row/comma layout must stay bit-exact.
pub fn write_c_array<W: Write>(out: &mut W, canvas: &Canvas) -> io::Result<()> {
    writeln!(out, "/* Auto-generated cursor data */")?;
    writeln!(out, "#include <stdint.h>")?;
    writeln!(out)?;
    writeln!(
        out,
        "static uint32_t cursor_data[{}] = {{",
        MAX_WIDTH * MAX_HEIGHT
    )?;
    for row in canvas.rows() {
        let words: Vec<String> = row.iter().map(|w| format!("0x{:08X}", w)).collect();
        writeln!(out, "    {},", words.join(", "))?;
    }
    writeln!(out, "}};")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn emit(img: &RgbaImage) -> String {
        let canvas = Canvas::from_rgba(img).unwrap();
        let mut out = Vec::new();
        write_c_array(&mut out, &canvas).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn header_and_declaration_are_exact() {
        let text = emit(&RgbaImage::new(1, 1));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "/* Auto-generated cursor data */");
        assert_eq!(lines[1], "#include <stdint.h>");
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], "static uint32_t cursor_data[4096] = {");
        assert_eq!(*lines.last().unwrap(), "};");
    }

    #[test]
    fn emits_64_rows_of_64_words() {
        let text = emit(&RgbaImage::new(4, 4));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3 + 1 + 64 + 1);
        for row in &lines[4..68] {
            assert!(row.starts_with("    0x"));
            assert!(row.ends_with(','));
            assert_eq!(row.matches("0x").count(), 64);
        }
    }

    #[test]
    fn words_are_zero_padded_uppercase_hex() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 255]));
        let text = emit(&img);
        let first_row = text.lines().nth(4).unwrap();

        assert!(first_row.starts_with("    0xFFFF0000, 0x00000000, "));
        for word in first_row.trim().trim_end_matches(',').split(", ") {
            assert_eq!(word.len(), 10);
            assert!(word.starts_with("0x"));
            assert!(word[2..].chars().all(|c| c.is_ascii_hexdigit()));
            assert!(!word[2..].chars().any(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn output_holds_exactly_4096_words() {
        let text = emit(&RgbaImage::new(0, 0));
        assert_eq!(text.matches("0x").count(), 4096);
    }
}
