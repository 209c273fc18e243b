use crate::{
    algorithm::{
        assignment::Assignment,
        domains::Domains,
        vocabulary::{Vocabulary, WordId},
    },
    spatial::{overlaps::OverlapTable, variables::Variable},
};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Pick the next variable to assign
///
/// Minimum remaining values first, then the highest degree in the crossing
/// graph, then the smallest variable in (row, col, direction, length) order.
/// Returns `None` once every variable is assigned.
pub fn select_unassigned_variable(
    variables: &[Variable],
    assignment: &Assignment,
    domains: &Domains,
    overlaps: &OverlapTable,
) -> Option<Variable> {
    variables
        .iter()
        .filter(|variable| !assignment.contains(variable))
        .min_by_key(|&variable| {
            (
                domains.size(variable),
                Reverse(overlaps.degree(variable)),
                *variable,
            )
        })
        .copied()
}

/// Words of neighbor domains each candidate of `variable` would rule out
///
/// For every unassigned neighbor, a candidate eliminates each neighbor word
/// with a different letter in the shared cell. Returned in domain order.
pub fn elimination_counts(
    variable: &Variable,
    assignment: &Assignment,
    domains: &Domains,
    overlaps: &OverlapTable,
    vocabulary: &Vocabulary,
) -> Vec<(WordId, usize)> {
    // Per unassigned neighbor: shared index in `variable`, neighbor domain
    // size, and how often each letter shows up in the neighbor's shared cell
    let neighbor_letters: Vec<(usize, usize, HashMap<char, usize>)> = overlaps
        .neighbors(variable)
        .iter()
        .filter(|neighbor| !assignment.contains(neighbor))
        .filter_map(|neighbor| {
            let (i, j) = overlaps.get(variable, neighbor)?;
            let mut letters: HashMap<char, usize> = HashMap::new();
            let mut size = 0;
            for word in domains.get(neighbor)?.iter() {
                size += 1;
                if let Some(letter) = vocabulary.glyph(word, j) {
                    *letters.entry(letter).or_insert(0) += 1;
                }
            }
            Some((i, size, letters))
        })
        .collect();

    domains
        .ids(variable)
        .into_iter()
        .map(|word| {
            let eliminated = neighbor_letters
                .iter()
                .map(|(i, size, letters)| {
                    let compatible = vocabulary
                        .glyph(word, *i)
                        .and_then(|letter| letters.get(&letter))
                        .copied()
                        .unwrap_or(0);
                    size - compatible
                })
                .sum();
            (word, eliminated)
        })
        .collect()
}

/// Order a variable's candidates, least constraining first
///
/// The sort is stable, so ties keep vocabulary order.
pub fn order_domain_values(
    variable: &Variable,
    assignment: &Assignment,
    domains: &Domains,
    overlaps: &OverlapTable,
    vocabulary: &Vocabulary,
) -> Vec<WordId> {
    let mut counts = elimination_counts(variable, assignment, domains, overlaps, vocabulary);
    counts.sort_by_key(|&(_, eliminated)| eliminated);
    counts.into_iter().map(|(word, _)| word).collect()
}
