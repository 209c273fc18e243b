/// Variable-to-word assignments and their consistency checks
pub mod assignment;
/// Word-id bitsets backing the domains
pub mod bitset;
/// Domain store and node consistency
pub mod domains;
/// Solver orchestration and backtracking search
pub mod executor;
/// Arc revision and AC-3
pub mod propagation;
/// Variable and value ordering heuristics
pub mod selection;
/// Interned word list
pub mod vocabulary;
