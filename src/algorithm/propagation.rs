//! Arc revision and the AC-3 worklist algorithm
//!
//! An arc `(x, y)` asks that every word left for `x` has at least one word
//! left for `y` with the same letter in the shared cell. Slots that never
//! cross are unconstrained, so their arcs never remove anything.

use std::collections::{BTreeSet, HashSet, VecDeque};

use crate::algorithm::bitset::WordSet;
use crate::algorithm::domains::Domains;
use crate::algorithm::vocabulary::Vocabulary;
use crate::spatial::overlaps::OverlapTable;
use crate::spatial::variables::Variable;

/// Directed constraint check from `x` towards `y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Arc {
    /// Variable whose domain may shrink
    pub x: Variable,
    /// Variable providing support
    pub y: Variable,
}

impl Arc {
    /// Create the arc `(x, y)`
    pub const fn new(x: Variable, y: Variable) -> Self {
        Self { x, y }
    }
}

/// Result of an AC-3 run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropagationReport {
    /// Arcs popped from the queue
    pub arcs_processed: usize,
    /// Revisions that removed at least one word
    pub revisions: usize,
    /// Words removed across all domains
    pub values_pruned: usize,
    /// Variable whose domain was emptied, if propagation failed
    pub wiped_out: Option<Variable>,
}

impl PropagationReport {
    /// Whether every domain still has at least one word
    pub const fn is_consistent(&self) -> bool {
        self.wiped_out.is_none()
    }
}

/// Every ordered pair of distinct variables
pub fn all_arcs(variables: &[Variable]) -> Vec<Arc> {
    variables
        .iter()
        .flat_map(|&x| {
            variables
                .iter()
                .filter(move |&&y| y != x)
                .map(move |&y| Arc::new(x, y))
        })
        .collect()
}

/// Make `x` arc consistent with `y`, returning how many words left `x`
///
/// Only the domain of `x` changes. Without an overlap nothing is removed.
pub fn revise_count(
    domains: &mut Domains,
    overlaps: &OverlapTable,
    vocabulary: &Vocabulary,
    x: &Variable,
    y: &Variable,
) -> usize {
    let Some((i, j)) = overlaps.get(x, y) else {
        return 0;
    };

    // Letters y can still show at the shared cell
    let supported: BTreeSet<char> = domains
        .get(y)
        .into_iter()
        .flat_map(WordSet::iter)
        .filter_map(|word| vocabulary.glyph(word, j))
        .collect();

    domains.get_mut(x).map_or(0, |set| {
        set.retain(|word| {
            vocabulary
                .glyph(word, i)
                .is_some_and(|letter| supported.contains(&letter))
        })
    })
}

/// Make `x` arc consistent with `y`, returning whether anything was removed
pub fn revise(
    domains: &mut Domains,
    overlaps: &OverlapTable,
    vocabulary: &Vocabulary,
    x: &Variable,
    y: &Variable,
) -> bool {
    revise_count(domains, overlaps, vocabulary, x, y) > 0
}

/// Run AC-3 to a fixed point
///
/// Starts from `arcs`, or from every ordered pair of distinct variables when
/// `arcs` is `None`. Whenever revising `(x, y)` shrinks `x`, each arc `(z, x)`
/// for a neighbor `z` of `x` other than `y` is queued again. Stops when the
/// queue drains or as soon as a domain becomes empty; an empty domain at the
/// end is reported as failure either way.
pub fn ac3(
    domains: &mut Domains,
    overlaps: &OverlapTable,
    vocabulary: &Vocabulary,
    variables: &[Variable],
    arcs: Option<Vec<Arc>>,
) -> PropagationReport {
    let mut queued: HashSet<Arc> = HashSet::new();
    let mut queue: VecDeque<Arc> = VecDeque::new();
    for arc in arcs.unwrap_or_else(|| all_arcs(variables)) {
        if queued.insert(arc) {
            queue.push_back(arc);
        }
    }
    let mut report = PropagationReport::default();

    while let Some(arc) = queue.pop_front() {
        queued.remove(&arc);
        report.arcs_processed += 1;

        let removed = revise_count(domains, overlaps, vocabulary, &arc.x, &arc.y);
        if removed == 0 {
            continue;
        }
        report.revisions += 1;
        report.values_pruned += removed;

        if domains.size(&arc.x) == 0 {
            report.wiped_out = Some(arc.x);
            break;
        }

        for &z in overlaps.neighbors(&arc.x) {
            if z == arc.y {
                continue;
            }
            let requeue = Arc::new(z, arc.x);
            if queued.insert(requeue) {
                queue.push_back(requeue);
            }
        }
    }

    // Domains emptied before this run (e.g. by node consistency) fail too
    if report.wiped_out.is_none() {
        report.wiped_out = domains.find_empty();
    }

    match report.wiped_out {
        Some(variable) => log::debug!(
            "AC-3 emptied the domain of {variable} after {} arcs",
            report.arcs_processed
        ),
        None => log::debug!(
            "AC-3 reached a fixed point after {} arcs, pruning {} words",
            report.arcs_processed,
            report.values_pruned
        ),
    }

    report
}
