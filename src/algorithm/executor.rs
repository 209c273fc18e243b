use crate::{
    algorithm::assignment::Assignment,
    algorithm::domains::Domains,
    algorithm::propagation::{self, Arc, PropagationReport},
    algorithm::selection::{order_domain_values, select_unassigned_variable},
    algorithm::vocabulary::{Vocabulary, WordId},
    io::configuration::PROGRESS_UPDATE_INTERVAL,
    io::error::{CrosswordError, Result},
    io::progress::SearchProgress,
    spatial::{Crossword, Variable},
};
use std::time::{Duration, Instant};

/// Runtime parameters for one solve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Seed for reordering the vocabulary; `None` keeps lexicographic order
    pub seed: Option<u64>,
    /// Wall-clock budget for the backtracking search
    pub timeout: Option<Duration>,
    /// Explored nodes between progress updates
    pub progress_interval: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            seed: None,
            timeout: None,
            progress_interval: PROGRESS_UPDATE_INTERVAL,
        }
    }
}

/// Counters collected during one solve
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Recursive search entries
    pub nodes: usize,
    /// Candidate words rejected as inconsistent or undone after a failed branch
    pub backtracks: usize,
    /// Arc revisions that removed at least one word
    pub revisions: usize,
    /// Words removed by node consistency and AC-3
    pub values_pruned: usize,
}

/// Crossword filler: node consistency, AC-3, then backtracking search
///
/// Owns the puzzle, the vocabulary, and the domain store for the duration of
/// a solve. Nothing here is shared across threads.
pub struct CrosswordSolver {
    crossword: Crossword,
    vocabulary: Vocabulary,
    domains: Domains,
    config: SolverConfig,
    statistics: SearchStatistics,
    progress: Option<SearchProgress>,
    started: Option<Instant>,
}

impl CrosswordSolver {
    /// Seed every variable's domain with the whole vocabulary
    pub fn new(crossword: Crossword, vocabulary: Vocabulary, config: SolverConfig) -> Self {
        let vocabulary = match config.seed {
            Some(seed) => vocabulary.shuffled(seed),
            None => vocabulary,
        };
        let domains = Domains::seeded(crossword.variables(), &vocabulary);

        Self {
            crossword,
            vocabulary,
            domains,
            config,
            statistics: SearchStatistics::default(),
            progress: None,
            started: None,
        }
    }

    /// Report search progress through a spinner
    #[must_use]
    pub fn with_progress(mut self, progress: SearchProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Puzzle geometry
    pub const fn crossword(&self) -> &Crossword {
        &self.crossword
    }

    /// Interned words, in the order used for tie-breaking
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Current domain store
    pub const fn domains(&self) -> &Domains {
        &self.domains
    }

    /// Counters from the latest solve
    pub const fn statistics(&self) -> SearchStatistics {
        self.statistics
    }

    /// Candidate words currently left for a variable
    pub fn domain_words(&self, variable: &Variable) -> Vec<&str> {
        self.domains.words(variable, &self.vocabulary)
    }

    /// Restrict a variable's domain to the given words
    pub fn restrict_domain<S: AsRef<str>>(&mut self, variable: Variable, words: &[S]) {
        self.domains.restrict(variable, words, &self.vocabulary);
    }

    /// Enforce node consistency, run AC-3, then search from an empty
    /// assignment
    ///
    /// Returns `Ok(None)` when no complete, consistent assignment exists.
    ///
    /// # Errors
    ///
    /// Returns [`CrosswordError::SearchTimeout`] if the configured deadline
    /// passes during the search
    pub fn solve(&mut self) -> Result<Option<Assignment>> {
        self.statistics = SearchStatistics::default();
        self.started = Some(Instant::now());

        self.enforce_node_consistency();
        let report = self.ac3(None);

        let result = if report.is_consistent() {
            let mut assignment = Assignment::new();
            self.backtrack(&mut assignment)
                .map(|solved| solved.then_some(assignment))
        } else {
            Ok(None)
        };

        let statistics = self.statistics;
        log::debug!(
            "Search finished: {} nodes, {} backtracks, {} revisions, {} words pruned",
            statistics.nodes,
            statistics.backtracks,
            statistics.revisions,
            statistics.values_pruned
        );
        if let Some(progress) = &self.progress {
            progress.finish(matches!(result, Ok(Some(_))));
        }

        result
    }

    /// Drop every candidate whose length differs from its slot's length
    pub fn enforce_node_consistency(&mut self) {
        let removed = self.domains.enforce_node_consistency(&self.vocabulary);
        self.statistics.values_pruned += removed;
    }

    /// Make `x` arc consistent with `y`; returns whether `x` lost any words
    pub fn revise(&mut self, x: &Variable, y: &Variable) -> bool {
        let revised = propagation::revise(
            &mut self.domains,
            self.crossword.overlaps(),
            &self.vocabulary,
            x,
            y,
        );
        if revised {
            self.statistics.revisions += 1;
        }
        revised
    }

    /// Run AC-3 from `arcs`, or from every arc when `None`
    ///
    /// The report names the emptied variable if propagation proved the puzzle
    /// unsatisfiable.
    pub fn ac3(&mut self, arcs: Option<Vec<Arc>>) -> PropagationReport {
        let report = propagation::ac3(
            &mut self.domains,
            self.crossword.overlaps(),
            &self.vocabulary,
            self.crossword.variables(),
            arcs,
        );
        self.statistics.revisions += report.revisions;
        self.statistics.values_pruned += report.values_pruned;
        report
    }

    /// Whether every slot has a non-empty word
    pub fn assignment_complete(&self, assignment: &Assignment) -> bool {
        assignment.is_complete(self.crossword.variables())
    }

    /// Whether all assigned, crossing slots agree on shared letters
    pub fn consistent(&self, assignment: &Assignment) -> bool {
        assignment.is_consistent(self.crossword.overlaps())
    }

    /// Candidates of `variable`, least constraining first
    pub fn order_domain_values(&self, variable: &Variable, assignment: &Assignment) -> Vec<&str> {
        self.ordered_ids(variable, assignment)
            .into_iter()
            .filter_map(|id| self.vocabulary.word(id))
            .collect()
    }

    fn ordered_ids(&self, variable: &Variable, assignment: &Assignment) -> Vec<WordId> {
        order_domain_values(
            variable,
            assignment,
            &self.domains,
            self.crossword.overlaps(),
            &self.vocabulary,
        )
    }

    /// Unassigned slot with the fewest candidates, then the most crossings
    pub fn select_unassigned_variable(&self, assignment: &Assignment) -> Option<Variable> {
        select_unassigned_variable(
            self.crossword.variables(),
            assignment,
            &self.domains,
            self.crossword.overlaps(),
        )
    }

    /// Extend `assignment` to a complete, consistent one
    ///
    /// Returns `Ok(true)` with `assignment` complete on success. On failure the
    /// assignment is left exactly as it was passed in.
    ///
    /// # Errors
    ///
    /// Returns [`CrosswordError::SearchTimeout`] if the configured deadline
    /// passes
    pub fn backtrack(&mut self, assignment: &mut Assignment) -> Result<bool> {
        self.statistics.nodes += 1;
        self.check_deadline()?;
        self.report_progress(assignment.len());

        if self.assignment_complete(assignment) {
            return Ok(true);
        }
        let Some(variable) = self.select_unassigned_variable(assignment) else {
            return Ok(false);
        };

        for id in self.ordered_ids(&variable, assignment) {
            let Some(word) = self.vocabulary.word(id) else {
                continue;
            };
            if !assignment.is_consistent_with(&variable, word, self.crossword.overlaps()) {
                self.statistics.backtracks += 1;
                continue;
            }

            assignment.insert(variable, word);
            match self.backtrack(assignment) {
                Ok(true) => return Ok(true),
                Ok(false) => {
                    assignment.remove(&variable);
                    self.statistics.backtracks += 1;
                }
                Err(error) => {
                    assignment.remove(&variable);
                    return Err(error);
                }
            }
        }

        Ok(false)
    }

    fn check_deadline(&self) -> Result<()> {
        let (Some(timeout), Some(started)) = (self.config.timeout, self.started) else {
            return Ok(());
        };
        let elapsed = started.elapsed();
        if elapsed > timeout {
            return Err(CrosswordError::SearchTimeout {
                elapsed,
                nodes: self.statistics.nodes,
            });
        }
        Ok(())
    }

    fn report_progress(&self, depth: usize) {
        let Some(progress) = &self.progress else {
            return;
        };
        let interval = self.config.progress_interval.max(1);
        if self.statistics.nodes % interval == 1 || interval == 1 {
            progress.update(self.statistics.nodes, depth);
        }
    }
}
