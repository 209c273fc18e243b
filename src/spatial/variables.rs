//! Crossword slots and their derivation from a structure

use std::fmt;

use crate::io::configuration::MIN_SLOT_LENGTH;
use crate::spatial::grid::Structure;

/// Orientation of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Left to right along a row
    Across,
    /// Top to bottom along a column
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Across => write!(f, "across"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// One slot of the crossword
///
/// Equality, hashing and ordering use all four fields. The derived ordering
/// (row, col, direction, length) doubles as the deterministic tie-break used
/// by variable selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    /// Row of the first cell
    pub row: usize,
    /// Column of the first cell
    pub col: usize,
    /// Orientation of the slot
    pub direction: Direction,
    /// Number of cells covered
    pub length: usize,
}

impl Variable {
    /// Create a slot starting at (`row`, `col`)
    pub const fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Self {
            row,
            col,
            direction,
            length,
        }
    }

    /// Cell covered by character index `index` of this slot's word
    pub const fn cell(&self, index: usize) -> (usize, usize) {
        match self.direction {
            Direction::Across => (self.row, self.col + index),
            Direction::Down => (self.row + index, self.col),
        }
    }

    /// Cells covered by the slot, in word order
    pub fn cells(&self) -> Vec<(usize, usize)> {
        (0..self.length).map(|index| self.cell(index)).collect()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} : {}",
            self.row, self.col, self.direction, self.length
        )
    }
}

/// Find every slot in the structure
///
/// A slot starts at a fillable cell whose predecessor in the slot's direction
/// is blocked or off the grid, and runs through consecutive fillable cells.
/// Runs shorter than [`MIN_SLOT_LENGTH`] are not slots. The result is sorted.
pub fn derive_variables(structure: &Structure) -> Vec<Variable> {
    let mut variables = Vec::new();

    for row in 0..structure.height() {
        for col in 0..structure.width() {
            if !structure.is_fillable(row, col) {
                continue;
            }

            let starts_down = row == 0 || !structure.is_fillable(row - 1, col);
            if starts_down {
                let length = (row..structure.height())
                    .take_while(|&r| structure.is_fillable(r, col))
                    .count();
                if length >= MIN_SLOT_LENGTH {
                    variables.push(Variable::new(row, col, Direction::Down, length));
                }
            }

            let starts_across = col == 0 || !structure.is_fillable(row, col - 1);
            if starts_across {
                let length = (col..structure.width())
                    .take_while(|&c| structure.is_fillable(row, c))
                    .count();
                if length >= MIN_SLOT_LENGTH {
                    variables.push(Variable::new(row, col, Direction::Across, length));
                }
            }
        }
    }

    variables.sort_unstable();
    variables
}
