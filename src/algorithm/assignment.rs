//! Partial and complete variable-to-word assignments

use std::collections::BTreeMap;

use crate::spatial::overlaps::OverlapTable;
use crate::spatial::variables::Variable;

/// Mapping from variables to chosen words, built up one slot at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    entries: BTreeMap<Variable, String>,
}

impl Assignment {
    /// Create an empty assignment
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Assign a word, returning the word it replaced
    pub fn insert(&mut self, variable: Variable, word: impl Into<String>) -> Option<String> {
        self.entries.insert(variable, word.into())
    }

    /// Unassign a variable, returning its word
    pub fn remove(&mut self, variable: &Variable) -> Option<String> {
        self.entries.remove(variable)
    }

    /// Word assigned to a variable
    pub fn get(&self, variable: &Variable) -> Option<&str> {
        self.entries.get(variable).map(String::as_str)
    }

    /// Whether a variable has a word
    pub fn contains(&self, variable: &Variable) -> bool {
        self.entries.contains_key(variable)
    }

    /// Number of assigned variables
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is assigned
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(variable, word)` pairs in variable order
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &str)> + '_ {
        self.entries
            .iter()
            .map(|(variable, word)| (variable, word.as_str()))
    }

    /// Whether exactly the given variables are assigned, each to a non-empty
    /// word
    pub fn is_complete(&self, variables: &[Variable]) -> bool {
        self.entries.len() == variables.len()
            && variables.iter().all(|variable| {
                self.entries
                    .get(variable)
                    .is_some_and(|word| !word.is_empty())
            })
    }

    /// Whether every pair of assigned, crossing variables agrees on the
    /// shared letter
    ///
    /// Unassigned variables impose nothing.
    pub fn is_consistent(&self, overlaps: &OverlapTable) -> bool {
        self.entries
            .iter()
            .all(|(variable, word)| self.agrees_with_neighbors(variable, word, overlaps))
    }

    /// Whether `word` placed in `variable` agrees with every assigned
    /// neighbor
    ///
    /// On an assignment that is already consistent this decides whether
    /// assigning `word` keeps it consistent.
    pub fn is_consistent_with(
        &self,
        variable: &Variable,
        word: &str,
        overlaps: &OverlapTable,
    ) -> bool {
        self.agrees_with_neighbors(variable, word, overlaps)
    }

    fn agrees_with_neighbors(
        &self,
        variable: &Variable,
        word: &str,
        overlaps: &OverlapTable,
    ) -> bool {
        overlaps.neighbors(variable).iter().all(|neighbor| {
            let Some(other) = self.entries.get(neighbor) else {
                return true;
            };
            let Some((i, j)) = overlaps.get(variable, neighbor) else {
                return true;
            };
            letters_match(word, i, other, j)
        })
    }
}

/// Whether `a[i] == b[j]`; a missing index never matches
pub fn letters_match(a: &str, i: usize, b: &str, j: usize) -> bool {
    match (a.chars().nth(i), b.chars().nth(j)) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}
