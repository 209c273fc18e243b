//! Interned candidate words
//!
//! The solver never compares strings directly. Every word gets a dense id and
//! its characters are stored once, so checking a letter at a crossing is a
//! slice lookup.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::{BTreeSet, HashMap};

/// Dense index of a word inside a [`Vocabulary`]
pub type WordId = usize;

/// Deduplicated word list with per-word character storage
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    words: Vec<String>,
    glyphs: Vec<Vec<char>>,
    ids: HashMap<String, WordId>,
}

impl Vocabulary {
    /// Intern words in lexicographic order, dropping duplicates and empty
    /// strings
    ///
    /// Words are kept verbatim; case folding is the loader's job.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: BTreeSet<String> = words
            .into_iter()
            .map(|word| word.as_ref().to_string())
            .filter(|word| !word.is_empty())
            .collect();
        Self::from_ordered(unique.into_iter().collect())
    }

    fn from_ordered(words: Vec<String>) -> Self {
        let glyphs = words.iter().map(|word| word.chars().collect()).collect();
        let ids = words
            .iter()
            .enumerate()
            .map(|(id, word)| (word.clone(), id))
            .collect();
        Self { words, glyphs, ids }
    }

    /// Reassign ids in a seeded random order
    ///
    /// Ids drive candidate order wherever the heuristics tie, so a seed picks
    /// one of possibly many fills reproducibly.
    #[must_use]
    pub fn shuffled(self, seed: u64) -> Self {
        let mut words = self.words;
        let mut rng = StdRng::seed_from_u64(seed);
        words.shuffle(&mut rng);
        Self::from_ordered(words)
    }

    /// Number of distinct words
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether there are no words
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word text by id
    pub fn word(&self, id: WordId) -> Option<&str> {
        self.words.get(id).map(String::as_str)
    }

    /// Id of a word, if present
    pub fn id_of(&self, word: &str) -> Option<WordId> {
        self.ids.get(word).copied()
    }

    /// Character count of a word; unknown ids have length zero
    pub fn word_len(&self, id: WordId) -> usize {
        self.glyphs.get(id).map_or(0, Vec::len)
    }

    /// Character at `index` of word `id`
    pub fn glyph(&self, id: WordId, index: usize) -> Option<char> {
        self.glyphs
            .get(id)
            .and_then(|chars| chars.get(index))
            .copied()
    }

    /// Iterate over `(id, word)` pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &str)> + '_ {
        self.words.iter().map(String::as_str).enumerate()
    }
}
