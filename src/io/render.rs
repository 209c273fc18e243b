//! Text rendering of a filled crossword

use ndarray::Array2;

use crate::algorithm::assignment::Assignment;
use crate::io::configuration::{BLOCKED_GLYPH, EMPTY_GLYPH};
use crate::spatial::Crossword;

/// Letters placed in each cell (indexed by `row`, `col`)
///
/// Cells not covered by an assigned slot are `None`.
pub fn letter_grid(crossword: &Crossword, assignment: &Assignment) -> Array2<Option<char>> {
    let mut letters = Array2::from_elem((crossword.height(), crossword.width()), None);
    for (variable, word) in assignment.iter() {
        for (index, letter) in word.chars().enumerate() {
            let position: [usize; 2] = variable.cell(index).into();
            if let Some(cell) = letters.get_mut(position) {
                *cell = Some(letter);
            }
        }
    }
    letters
}

/// Render the grid as text, one line per row
///
/// Blocked cells show as `█`, fillable cells show their letter or a space.
pub fn render_text(crossword: &Crossword, assignment: &Assignment) -> String {
    let letters = letter_grid(crossword, assignment);
    let structure = crossword.structure();
    let mut output = String::with_capacity((structure.width() + 1) * structure.height() * 3);

    for row in 0..structure.height() {
        for col in 0..structure.width() {
            let glyph = if structure.is_fillable(row, col) {
                letters
                    .get([row, col])
                    .copied()
                    .flatten()
                    .unwrap_or(EMPTY_GLYPH)
            } else {
                BLOCKED_GLYPH
            };
            output.push(glyph);
        }
        output.push('\n');
    }

    output
}
