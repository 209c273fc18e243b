//! Candidate-word sets per variable and the unary length constraint

use std::collections::BTreeMap;

use crate::algorithm::bitset::WordSet;
use crate::algorithm::vocabulary::{Vocabulary, WordId};
use crate::spatial::variables::Variable;

/// Mapping from every variable to the words it may still take
///
/// Shrinks only through node consistency, arc revision, or explicit
/// restriction. An empty domain means the puzzle is unsatisfiable from here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Domains {
    sets: BTreeMap<Variable, WordSet>,
}

impl Domains {
    /// Give every variable the full vocabulary
    pub fn seeded(variables: &[Variable], vocabulary: &Vocabulary) -> Self {
        let sets = variables
            .iter()
            .map(|&variable| (variable, WordSet::full(vocabulary.len())))
            .collect();
        Self { sets }
    }

    /// Current domain of a variable
    pub fn get(&self, variable: &Variable) -> Option<&WordSet> {
        self.sets.get(variable)
    }

    /// Mutable domain of a variable
    pub fn get_mut(&mut self, variable: &Variable) -> Option<&mut WordSet> {
        self.sets.get_mut(variable)
    }

    /// Number of candidates left for a variable; unknown variables have none
    pub fn size(&self, variable: &Variable) -> usize {
        self.sets.get(variable).map_or(0, WordSet::count)
    }

    /// Candidate ids of a variable in vocabulary order
    pub fn ids(&self, variable: &Variable) -> Vec<WordId> {
        self.sets
            .get(variable)
            .map(WordSet::to_vec)
            .unwrap_or_default()
    }

    /// Candidate words of a variable in vocabulary order
    pub fn words<'a>(&'a self, variable: &Variable, vocabulary: &'a Vocabulary) -> Vec<&'a str> {
        self.sets
            .get(variable)
            .into_iter()
            .flat_map(WordSet::iter)
            .filter_map(|id| vocabulary.word(id))
            .collect()
    }

    /// Replace a variable's domain with the given words
    ///
    /// Words missing from the vocabulary are skipped.
    pub fn restrict<S: AsRef<str>>(
        &mut self,
        variable: Variable,
        words: &[S],
        vocabulary: &Vocabulary,
    ) {
        let mut set = WordSet::new(vocabulary.len());
        for word in words {
            if let Some(id) = vocabulary.id_of(word.as_ref()) {
                set.insert(id);
            }
        }
        self.sets.insert(variable, set);
    }

    /// First variable whose domain is empty, if any
    pub fn find_empty(&self) -> Option<Variable> {
        self.sets
            .iter()
            .find_map(|(variable, set)| set.is_empty().then_some(*variable))
    }

    /// Whether some variable has no candidates left
    pub fn has_empty(&self) -> bool {
        self.find_empty().is_some()
    }

    /// Iterate over `(variable, domain)` pairs in variable order
    pub fn iter(&self) -> impl Iterator<Item = (&Variable, &WordSet)> + '_ {
        self.sets.iter()
    }

    /// Number of variables tracked
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Whether no variables are tracked
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Drop every word whose length differs from its variable's length
    ///
    /// Single pass, no interaction between variables. Returns the number of
    /// words removed across all domains.
    pub fn enforce_node_consistency(&mut self, vocabulary: &Vocabulary) -> usize {
        let mut removed = 0;
        for (variable, set) in &mut self.sets {
            removed += set.retain(|id| vocabulary.word_len(id) == variable.length);
        }
        log::debug!("Node consistency removed {removed} candidate words");
        removed
    }
}
