//! Crossword structure as a grid of fillable and blocked cells
//!
//! Structures are described line by line, with `_` marking a fillable cell and
//! any other character marking a blocked one. Short lines are padded with
//! blocked cells so every row has the width of the longest line.

use ndarray::Array2;

use crate::io::configuration::FILLABLE_MARKER;
use crate::io::error::{Result, invalid_structure};

/// Fillable/blocked cell layout of a crossword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Structure {
    /// `true` for cells that receive a letter (indexed by `row`, `col`)
    cells: Array2<bool>,
}

impl Structure {
    /// Parse a textual structure description
    ///
    /// # Errors
    ///
    /// Returns an error if the description has no rows or no columns
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();
        let height = lines.len();
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        if height == 0 || width == 0 {
            return Err(invalid_structure(&"structure has no cells"));
        }

        let mut cells = Array2::from_elem((height, width), false);
        for (row, line) in lines.iter().enumerate() {
            for (col, marker) in line.chars().enumerate() {
                if let Some(cell) = cells.get_mut([row, col]) {
                    *cell = marker == FILLABLE_MARKER;
                }
            }
        }

        Ok(Self { cells })
    }

    /// Build a structure from an existing fillable-cell grid
    ///
    /// # Errors
    ///
    /// Returns an error if the grid has no rows or no columns
    pub fn from_cells(cells: Array2<bool>) -> Result<Self> {
        let (height, width) = cells.dim();
        if height == 0 || width == 0 {
            return Err(invalid_structure(&format!(
                "structure dimensions {height}x{width} are empty"
            )));
        }
        Ok(Self { cells })
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Whether the cell receives a letter; cells outside the grid are blocked
    pub fn is_fillable(&self, row: usize, col: usize) -> bool {
        self.cells.get([row, col]).copied().unwrap_or(false)
    }

    /// Count of fillable cells
    pub fn fillable_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Underlying cell grid
    pub const fn cells(&self) -> &Array2<bool> {
        &self.cells
    }
}
