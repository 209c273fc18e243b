//! Tests for the crossword solver and its backtracking search

#[cfg(test)]
mod tests {
    use crossfill::algorithm::assignment::Assignment;
    use crossfill::algorithm::executor::{CrosswordSolver, SearchStatistics, SolverConfig};
    use crossfill::algorithm::propagation::Arc;
    use crossfill::algorithm::vocabulary::Vocabulary;
    use crossfill::io::error::CrosswordError;
    use crossfill::io::progress::SearchProgress;
    use crossfill::spatial::{Crossword, Direction, Structure, Variable};
    use std::time::Duration;

    const ACROSS: Variable = Variable::new(0, 0, Direction::Across, 3);
    const DOWN: Variable = Variable::new(0, 2, Direction::Down, 3);

    fn solver(text: &str, words: &[&str], config: SolverConfig) -> CrosswordSolver {
        let crossword = Crossword::new(Structure::parse(text).unwrap());
        CrosswordSolver::new(crossword, Vocabulary::new(words), config)
    }

    fn corner(words: &[&str]) -> CrosswordSolver {
        solver("___\n##_\n##_", words, SolverConfig::default())
    }

    // Tests a solvable corner crossing
    #[test]
    fn test_solve_corner() {
        let mut solver = corner(&["CAT", "DOG", "NET", "TEN"]);
        let assignment = solver.solve().unwrap().unwrap();

        assert_eq!(assignment.get(&ACROSS), Some("CAT"));
        assert_eq!(assignment.get(&DOWN), Some("TEN"));
        assert!(solver.assignment_complete(&assignment));
        assert!(solver.consistent(&assignment));
    }

    // Tests propagation settles the corner crossing without backtracking
    #[test]
    fn test_solve_statistics() {
        let mut solver = corner(&["CAT", "DOG", "NET", "TEN"]);
        solver.solve().unwrap();

        let statistics = solver.statistics();
        assert_eq!(statistics.nodes, 3);
        assert_eq!(statistics.backtracks, 0);
        assert_eq!(statistics.revisions, 2);
        assert_eq!(statistics.values_pruned, 3);
    }

    // Tests an unsatisfiable puzzle yields no assignment
    #[test]
    fn test_solve_unsatisfiable() {
        let config = SolverConfig::default();
        let mut solver = solver("___\n#_#\n#_#", &["CAT", "DOG", "NET", "TEN"], config);
        assert_eq!(solver.solve().unwrap(), None);

        let mut solver = corner(&["CAT", "DOG"]);
        assert_eq!(solver.solve().unwrap(), None);
        // Propagation alone proved it, so search never started
        assert_eq!(solver.statistics().nodes, 0);
    }

    // Tests a missing word length makes the puzzle unsatisfiable
    #[test]
    fn test_solve_without_words_of_slot_length() {
        let config = SolverConfig::default();
        let mut solver = solver("____\n###_\n###_\n###_", &["CAT", "TEN"], config);
        assert_eq!(solver.solve().unwrap(), None);
    }

    // Tests a structure with no slots is filled by the empty assignment
    #[test]
    fn test_solve_without_slots() {
        let mut solver = solver("_#\n#_", &["CAT"], SolverConfig::default());
        let assignment = solver.solve().unwrap().unwrap();
        assert!(assignment.is_empty());
    }

    // Tests unrelated slots may reuse a word
    #[test]
    fn test_solve_independent_slots() {
        let mut solver = solver("___\n###\n___", &["CAT"], SolverConfig::default());
        let assignment = solver.solve().unwrap().unwrap();

        assert_eq!(assignment.len(), 2);
        assert!(assignment.iter().all(|(_, word)| word == "CAT"));
    }

    // Tests backtracking alone finds a fill and undoes rejected words
    #[test]
    fn test_backtrack_without_propagation() {
        let mut solver = corner(&["CAT", "DOG", "NET", "TEN"]);
        solver.enforce_node_consistency();
        let mut assignment = Assignment::new();

        assert!(solver.backtrack(&mut assignment).unwrap());
        assert_eq!(assignment.get(&ACROSS), Some("CAT"));
        assert_eq!(assignment.get(&DOWN), Some("TEN"));
        assert_eq!(solver.statistics().nodes, 3);
        assert_eq!(solver.statistics().backtracks, 3);
    }

    // Tests a failed search leaves the assignment as it was
    #[test]
    fn test_backtrack_failure_restores_assignment() {
        let mut solver = corner(&["CAT", "DOG"]);
        solver.enforce_node_consistency();
        let mut assignment = Assignment::new();

        assert!(!solver.backtrack(&mut assignment).unwrap());
        assert!(assignment.is_empty());
    }

    // Tests a complete assignment is accepted as is
    #[test]
    fn test_backtrack_on_complete_assignment() {
        let mut solver = corner(&["CAT", "TEN"]);
        let mut assignment = Assignment::new();
        assignment.insert(ACROSS, "CAT");
        assignment.insert(DOWN, "TEN");

        assert!(solver.backtrack(&mut assignment).unwrap());
        assert_eq!(solver.statistics().nodes, 1);
    }

    // Tests the solver step by step through its public operations
    #[test]
    fn test_individual_steps() {
        let mut solver = corner(&["CAT", "DOG", "NET", "TEN", "HOUSE"]);
        assert_eq!(solver.domain_words(&ACROSS).len(), 5);

        solver.enforce_node_consistency();
        assert_eq!(
            solver.domain_words(&ACROSS),
            vec!["CAT", "DOG", "NET", "TEN"]
        );

        assert!(solver.revise(&ACROSS, &DOWN));
        assert!(!solver.revise(&ACROSS, &DOWN));
        assert_eq!(solver.domain_words(&ACROSS), vec!["CAT", "NET", "TEN"]);

        let report = solver.ac3(Some(vec![Arc::new(DOWN, ACROSS)]));
        assert!(report.is_consistent());
        assert_eq!(solver.domain_words(&DOWN), vec!["NET", "TEN"]);

        let assignment = Assignment::new();
        assert_eq!(solver.select_unassigned_variable(&assignment), Some(DOWN));
        assert_eq!(
            solver.order_domain_values(&DOWN, &assignment),
            vec!["TEN", "NET"]
        );
    }

    // Tests custom domains seeded before solving
    #[test]
    fn test_restricted_domain() {
        let mut solver = corner(&["CAT", "DOG", "NET", "TEN", "TOT"]);
        solver.restrict_domain(ACROSS, &["TOT"]);

        let assignment = solver.solve().unwrap().unwrap();
        assert_eq!(assignment.get(&ACROSS), Some("TOT"));
        assert_eq!(assignment.get(&DOWN), Some("TEN"));
    }

    // Tests an expired deadline aborts the search with an error
    #[test]
    fn test_timeout() {
        let config = SolverConfig {
            timeout: Some(Duration::ZERO),
            ..SolverConfig::default()
        };
        let mut solver = solver("___\n##_\n##_", &["CAT", "DOG", "NET", "TEN"], config);

        match solver.solve() {
            Err(CrosswordError::SearchTimeout { nodes, .. }) => assert_eq!(nodes, 1),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    // Tests a generous deadline does not interfere
    #[test]
    fn test_generous_timeout() {
        let config = SolverConfig {
            timeout: Some(Duration::from_secs(60)),
            ..SolverConfig::default()
        };
        let mut solver = solver("___\n##_\n##_", &["CAT", "DOG", "NET", "TEN"], config);
        assert!(solver.solve().unwrap().is_some());
    }

    // Tests the same seed gives the same fill
    #[test]
    fn test_seeded_solve_is_reproducible() {
        let words = [
            "CAT", "CAR", "COT", "TEN", "TAR", "RAT", "ROT", "TOT", "NET", "ART",
        ];
        let config = SolverConfig {
            seed: Some(42),
            ..SolverConfig::default()
        };

        let first = solver("___\n##_\n##_", &words, config).solve().unwrap();
        let second = solver("___\n##_\n##_", &words, config).solve().unwrap();

        assert!(first.is_some());
        assert_eq!(first, second);
    }

    // Tests statistics reset between solves
    #[test]
    fn test_statistics_reset() {
        let mut solver = corner(&["CAT", "DOG", "NET", "TEN"]);
        assert_eq!(solver.statistics(), SearchStatistics::default());

        solver.solve().unwrap();
        let first = solver.statistics();
        solver.solve().unwrap();
        assert_eq!(solver.statistics().nodes, first.nodes);
    }

    // Tests a hidden progress spinner is updated and finished
    #[test]
    fn test_progress_reporting() {
        let config = SolverConfig {
            progress_interval: 1,
            ..SolverConfig::default()
        };
        let mut solver = solver("___\n##_\n##_", &["CAT", "DOG", "NET", "TEN"], config)
            .with_progress(SearchProgress::hidden(2));

        assert!(solver.solve().unwrap().is_some());
        assert_eq!(solver.crossword().variables().len(), 2);
        assert_eq!(solver.vocabulary().len(), 4);
        assert!(!solver.domains().has_empty());
    }
}
