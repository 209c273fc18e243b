//! Crossword generation as a constraint satisfaction problem
//!
//! Slots of a crossword structure are variables, words of a vocabulary are
//! their values, and crossing slots must agree on the shared letter. The
//! solver enforces node consistency, runs AC-3 to a fixed point, then
//! backtracks with minimum-remaining-values / degree variable selection and
//! least-constraining-value ordering.

#![forbid(unsafe_code)]

/// Domains, propagation, heuristics, and backtracking search
pub mod algorithm;
/// Input/output, configuration, logging, and error handling
pub mod io;
/// Puzzle geometry: structure, slots, and crossings
pub mod spatial;

pub use algorithm::assignment::Assignment;
pub use algorithm::executor::{CrosswordSolver, SolverConfig};
pub use algorithm::vocabulary::Vocabulary;
pub use io::error::{CrosswordError, Result};
pub use spatial::{Crossword, Direction, Variable};
