//! Tests for text rendering

#[cfg(test)]
mod tests {
    use crossfill::algorithm::assignment::Assignment;
    use crossfill::io::render::{letter_grid, render_text};
    use crossfill::spatial::{Crossword, Direction, Structure, Variable};

    fn corner() -> Crossword {
        Crossword::new(Structure::parse("___\n##_\n##_").unwrap())
    }

    fn filled() -> Assignment {
        let mut assignment = Assignment::new();
        assignment.insert(Variable::new(0, 0, Direction::Across, 3), "CAT");
        assignment.insert(Variable::new(0, 2, Direction::Down, 3), "TEN");
        assignment
    }

    // Tests letters land in their cells
    #[test]
    fn test_letter_grid() {
        let letters = letter_grid(&corner(), &filled());

        assert_eq!(letters[[0, 0]], Some('C'));
        assert_eq!(letters[[0, 2]], Some('T'));
        assert_eq!(letters[[2, 2]], Some('N'));
        assert_eq!(letters[[1, 0]], None);
    }

    // Tests a filled grid renders row by row
    #[test]
    fn test_render_filled() {
        assert_eq!(render_text(&corner(), &filled()), "CAT\n██E\n██N\n");
    }

    // Tests unfilled cells render as spaces
    #[test]
    fn test_render_partial() {
        let mut assignment = Assignment::new();
        assignment.insert(Variable::new(0, 0, Direction::Across, 3), "CAT");

        assert_eq!(render_text(&corner(), &assignment), "CAT\n██ \n██ \n");
        let empty = Assignment::new();
        assert_eq!(render_text(&corner(), &empty), "   \n██ \n██ \n");
    }
}
