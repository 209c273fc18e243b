//! PNG export of a filled crossword
//!
//! Letters are drawn from a built-in 5x7 bitmap font scaled up to fill the
//! cell, so no font file is needed at runtime.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::algorithm::assignment::Assignment;
use crate::io::configuration::{
    BACKGROUND_RGBA, CELL_BORDER, CELL_RGBA, CELL_SIZE, GLYPH_SCALE, LETTER_RGBA,
};
use crate::io::error::{CrosswordError, Result, file_system_error};
use crate::io::render::letter_grid;
use crate::spatial::Crossword;

const GLYPH_WIDTH: u32 = 5;
const GLYPH_HEIGHT: u32 = 7;

// Rows top to bottom, bit 4 is the leftmost column
const LETTER_GLYPHS: [[u8; 7]; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
];

const DIGIT_GLYPHS: [[u8; 7]; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
];

/// Bitmap rows for a letter or digit; other characters have no glyph
pub fn glyph_rows(letter: char) -> Option<[u8; 7]> {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        LETTER_GLYPHS.get((upper as u8 - b'A') as usize).copied()
    } else if upper.is_ascii_digit() {
        DIGIT_GLYPHS.get((upper as u8 - b'0') as usize).copied()
    } else {
        None
    }
}

fn fill_rect(img: &mut RgbaImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba<u8>) {
    for y in y0..y1.min(img.height()) {
        for x in x0..x1.min(img.width()) {
            img.put_pixel(x, y, color);
        }
    }
}

fn draw_glyph(img: &mut RgbaImage, rows: [u8; 7], cell_x: u32, cell_y: u32) {
    let color = Rgba(LETTER_RGBA);
    let offset_x = cell_x + (CELL_SIZE - GLYPH_WIDTH * GLYPH_SCALE) / 2;
    let offset_y = cell_y + (CELL_SIZE - GLYPH_HEIGHT * GLYPH_SCALE) / 2;

    for (dy, bits) in rows.iter().enumerate() {
        for dx in 0..GLYPH_WIDTH {
            if bits & (1 << (GLYPH_WIDTH - 1 - dx)) == 0 {
                continue;
            }
            let x = offset_x + dx * GLYPH_SCALE;
            let y = offset_y + dy as u32 * GLYPH_SCALE;
            fill_rect(img, x, y, x + GLYPH_SCALE, y + GLYPH_SCALE, color);
        }
    }
}

/// Draw the crossword: white bordered cells on black, letters in black
pub fn render_image(crossword: &Crossword, assignment: &Assignment) -> RgbaImage {
    let width = crossword.width() as u32 * CELL_SIZE;
    let height = crossword.height() as u32 * CELL_SIZE;
    let mut img = ImageBuffer::from_pixel(width, height, Rgba(BACKGROUND_RGBA));
    let letters = letter_grid(crossword, assignment);
    let structure = crossword.structure();

    for row in 0..structure.height() {
        for col in 0..structure.width() {
            if !structure.is_fillable(row, col) {
                continue;
            }
            let cell_x = col as u32 * CELL_SIZE;
            let cell_y = row as u32 * CELL_SIZE;
            fill_rect(
                &mut img,
                cell_x + CELL_BORDER,
                cell_y + CELL_BORDER,
                cell_x + CELL_SIZE - CELL_BORDER,
                cell_y + CELL_SIZE - CELL_BORDER,
                Rgba(CELL_RGBA),
            );

            let letter = letters.get([row, col]).copied().flatten();
            if let Some(rows) = letter.and_then(glyph_rows) {
                draw_glyph(&mut img, rows, cell_x, cell_y);
            }
        }
    }

    img
}

/// Export the filled crossword as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_assignment_as_png(
    crossword: &Crossword,
    assignment: &Assignment,
    output_path: &Path,
) -> Result<()> {
    let img = render_image(crossword, assignment);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(file_system_error(parent, "create directory"))?;
    }

    img.save(output_path)
        .map_err(|source| CrosswordError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })?;

    log::debug!("Saved crossword image to {}", output_path.display());
    Ok(())
}
