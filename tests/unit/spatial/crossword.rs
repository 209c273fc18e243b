//! Tests for the puzzle geometry bundle

#[cfg(test)]
mod tests {
    use crossfill::spatial::{Crossword, Direction, OverlapTable, Structure, Variable};

    // Tests slots and crossings are derived from the structure
    #[test]
    fn test_new() {
        let crossword = Crossword::new(Structure::parse("___\n#_#\n#_#").unwrap());
        let across = Variable::new(0, 0, Direction::Across, 3);
        let down = Variable::new(0, 1, Direction::Down, 3);

        assert_eq!(crossword.width(), 3);
        assert_eq!(crossword.height(), 3);
        assert_eq!(crossword.variables(), &[across, down]);
        assert_eq!(crossword.overlap(&across, &down), Some((1, 0)));
        assert_eq!(crossword.neighbors(&down), &[across]);
        assert_eq!(crossword.structure().fillable_count(), 5);
    }

    // Tests explicit slots are sorted and deduplicated
    #[test]
    fn test_from_parts() {
        let structure = Structure::parse("___\n___").unwrap();
        let top = Variable::new(0, 0, Direction::Across, 3);
        let bottom = Variable::new(1, 0, Direction::Across, 3);

        let slots = vec![bottom, top, bottom];

        let crossword = Crossword::from_parts(structure, slots, OverlapTable::new());

        assert_eq!(crossword.variables(), &[top, bottom]);
        assert_eq!(crossword.overlaps().crossing_count(), 0);
        assert_eq!(crossword.overlap(&top, &bottom), None);
    }
}
