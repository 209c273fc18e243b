//! Puzzle geometry
//!
//! This module contains everything derived from the structure description:
//! - The fillable/blocked cell grid
//! - Slots (variables) and their orientation
//! - The crossing table between slots

/// Structure and geometry bundle consumed by the solver
pub mod crossword;
/// Fillable/blocked cell grid
pub mod grid;
/// Crossing table between slots
pub mod overlaps;
/// Slots and slot derivation
pub mod variables;

pub use crossword::Crossword;
pub use grid::Structure;
pub use overlaps::{Overlap, OverlapTable};
pub use variables::{Direction, Variable};
