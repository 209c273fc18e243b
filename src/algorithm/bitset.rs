use bitvec::prelude::*;
use std::fmt;

use crate::algorithm::vocabulary::WordId;

/// Fixed-capacity set of word ids backing one variable's domain
///
/// Ids are dense indices into the vocabulary, so membership tests and
/// removals are O(1) and iteration follows vocabulary order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordSet {
    bits: BitVec,
}

impl WordSet {
    /// Create a set with room for `capacity` ids and no members
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
        }
    }

    /// Create a set containing every id below `capacity`
    pub fn full(capacity: usize) -> Self {
        Self {
            bits: bitvec![1; capacity],
        }
    }

    /// Insert an id; ids beyond the capacity are ignored
    pub fn insert(&mut self, word: WordId) {
        if word < self.bits.len() {
            self.bits.set(word, true);
        }
    }

    /// Remove an id, returning whether it was present
    pub fn remove(&mut self, word: WordId) -> bool {
        let present = self.contains(word);
        if present {
            self.bits.set(word, false);
        }
        present
    }

    /// Test membership
    pub fn contains(&self, word: WordId) -> bool {
        self.bits.get(word).as_deref() == Some(&true)
    }

    /// Test if no ids are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count ids in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Largest id the set can hold plus one
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Iterate over member ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = WordId> + '_ {
        self.bits.iter_ones()
    }

    /// Keep only ids for which `keep` returns true; returns how many were dropped
    pub fn retain(&mut self, mut keep: impl FnMut(WordId) -> bool) -> usize {
        let doomed: Vec<WordId> = self.iter().filter(|&word| !keep(word)).collect();
        for &word in &doomed {
            self.bits.set(word, false);
        }
        doomed.len()
    }

    /// Extract all member ids as a vector
    pub fn to_vec(&self) -> Vec<WordId> {
        self.iter().collect()
    }
}

impl fmt::Display for WordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordSet({} words: {:?})", self.count(), self.to_vec())
    }
}
