//! Tests for the word-id bitset backing variable domains

#[cfg(test)]
mod tests {
    use crossfill::algorithm::bitset::WordSet;

    // Tests a fresh set is empty and a full set holds every id
    #[test]
    fn test_new_and_full() {
        let empty = WordSet::new(8);
        assert!(empty.is_empty());
        assert_eq!(empty.count(), 0);
        assert_eq!(empty.capacity(), 8);

        let full = WordSet::full(8);
        assert_eq!(full.count(), 8);
        assert_eq!(full.to_vec(), (0..8).collect::<Vec<_>>());
    }

    // Tests insert ignores ids beyond the capacity
    #[test]
    fn test_insert_out_of_range_is_ignored() {
        let mut set = WordSet::new(4);
        set.insert(1);
        set.insert(3);
        set.insert(4);
        set.insert(100);

        assert_eq!(set.to_vec(), vec![1, 3]);
        assert!(!set.contains(4));
        assert!(!set.contains(100));
    }

    // Tests remove reports whether the id was present
    #[test]
    fn test_remove_reports_presence() {
        let mut set = WordSet::full(3);
        assert!(set.remove(1));
        assert!(!set.remove(1));
        assert!(!set.remove(7));
        assert_eq!(set.to_vec(), vec![0, 2]);
    }

    // Tests retain drops rejected ids and counts them
    #[test]
    fn test_retain_counts_removed() {
        let mut set = WordSet::full(10);
        let removed = set.retain(|id| id % 3 == 0);

        assert_eq!(removed, 6);
        assert_eq!(set.to_vec(), vec![0, 3, 6, 9]);

        let removed_again = set.retain(|id| id % 3 == 0);
        assert_eq!(removed_again, 0);
    }

    // Tests iteration is ascending regardless of insertion order
    #[test]
    fn test_iter_is_ascending() {
        let mut set = WordSet::new(16);
        for id in [12, 2, 7, 0] {
            set.insert(id);
        }
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 2, 7, 12]);
    }

    // Tests display shows count and members
    #[test]
    fn test_display() {
        let mut set = WordSet::new(5);
        set.insert(2);
        set.insert(4);
        assert_eq!(set.to_string(), "WordSet(2 words: [2, 4])");
    }
}
