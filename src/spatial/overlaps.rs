//! Shared-cell table between crossing slots
//!
//! Only intersecting pairs are stored. Looking up any other pair of variables
//! yields `None`, which the solver reads as "these slots impose no constraint
//! on each other".

use std::collections::{BTreeMap, HashMap};

use crate::spatial::variables::Variable;

/// Character indices `(i, j)` where word `i` of the first slot meets word `j`
/// of the second
pub type Overlap = (usize, usize);

/// Symmetric overlap lookup plus per-variable neighbor lists
#[derive(Debug, Clone, Default)]
pub struct OverlapTable {
    entries: HashMap<(Variable, Variable), Overlap>,
    neighbors: BTreeMap<Variable, Vec<Variable>>,
}

impl OverlapTable {
    /// Create a table with no crossings
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute all crossings between the given slots
    pub fn from_variables(variables: &[Variable]) -> Self {
        let mut table = Self::new();
        let cells: Vec<Vec<(usize, usize)>> = variables.iter().map(Variable::cells).collect();

        for (a, (x, x_cells)) in variables.iter().zip(&cells).enumerate() {
            for (y, y_cells) in variables.iter().zip(&cells).skip(a + 1) {
                if x == y {
                    continue;
                }
                let shared = x_cells.iter().enumerate().find_map(|(i, cell)| {
                    y_cells
                        .iter()
                        .position(|other| other == cell)
                        .map(|j| (i, j))
                });
                if let Some(overlap) = shared {
                    table.insert(*x, *y, overlap);
                }
            }
        }

        table
    }

    /// Record that index `overlap.0` of `x` shares a cell with index
    /// `overlap.1` of `y`; the mirrored entry is recorded as well
    pub fn insert(&mut self, x: Variable, y: Variable, overlap: Overlap) {
        debug_assert!(x != y, "a slot cannot overlap itself");
        debug_assert!(
            overlap.0 < x.length && overlap.1 < y.length,
            "overlap {overlap:?} outside {x} / {y}"
        );

        let (i, j) = overlap;
        let first = self.entries.insert((x, y), (i, j)).is_none();
        self.entries.insert((y, x), (j, i));

        if first {
            Self::link(&mut self.neighbors, x, y);
            Self::link(&mut self.neighbors, y, x);
        }
    }

    fn link(neighbors: &mut BTreeMap<Variable, Vec<Variable>>, from: Variable, to: Variable) {
        let list = neighbors.entry(from).or_default();
        if let Err(position) = list.binary_search(&to) {
            list.insert(position, to);
        }
    }

    /// Shared character indices of `x` and `y`, or `None` if they never meet
    pub fn get(&self, x: &Variable, y: &Variable) -> Option<Overlap> {
        self.entries.get(&(*x, *y)).copied()
    }

    /// Sorted list of slots crossing `x`
    pub fn neighbors(&self, x: &Variable) -> &[Variable] {
        self.neighbors.get(x).map_or(&[], Vec::as_slice)
    }

    /// Number of slots crossing `x`
    pub fn degree(&self, x: &Variable) -> usize {
        self.neighbors(x).len()
    }

    /// Number of unordered crossing pairs
    pub fn crossing_count(&self) -> usize {
        self.entries.len() / 2
    }
}
