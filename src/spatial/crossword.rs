//! Puzzle geometry bundle handed to the solver

use crate::spatial::grid::Structure;
use crate::spatial::overlaps::{Overlap, OverlapTable};
use crate::spatial::variables::{Variable, derive_variables};

/// Structure, slots and crossings of one puzzle
///
/// Built once from a structure and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Crossword {
    structure: Structure,
    variables: Vec<Variable>,
    overlaps: OverlapTable,
}

impl Crossword {
    /// Derive slots and crossings from a structure
    pub fn new(structure: Structure) -> Self {
        let variables = derive_variables(&structure);
        let overlaps = OverlapTable::from_variables(&variables);
        Self {
            structure,
            variables,
            overlaps,
        }
    }

    /// Assemble a puzzle from explicit slots and crossings
    ///
    /// The structure is only used for rendering; the solver reads the slots
    /// and the overlap table as given.
    pub fn from_parts(
        structure: Structure,
        mut variables: Vec<Variable>,
        overlaps: OverlapTable,
    ) -> Self {
        variables.sort_unstable();
        variables.dedup();
        Self {
            structure,
            variables,
            overlaps,
        }
    }

    /// Fillable-cell layout
    pub const fn structure(&self) -> &Structure {
        &self.structure
    }

    /// All slots, sorted
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Crossing table
    pub const fn overlaps(&self) -> &OverlapTable {
        &self.overlaps
    }

    /// Shared character indices of two slots, if they cross
    pub fn overlap(&self, x: &Variable, y: &Variable) -> Option<Overlap> {
        self.overlaps.get(x, y)
    }

    /// Slots crossing `x`
    pub fn neighbors(&self, x: &Variable) -> &[Variable] {
        self.overlaps.neighbors(x)
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.structure.width()
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.structure.height()
    }
}
