//! Tests for word list loading

#[cfg(test)]
mod tests {
    use crossfill::CrosswordError;
    use crossfill::io::words::{load_vocabulary, parse_vocabulary};
    use tempfile::TempDir;

    // Tests lines are trimmed, upper-cased, and deduplicated
    #[test]
    fn test_parse_vocabulary() {
        let vocabulary = parse_vocabulary("  cat\nDog\r\n\n   \ncat\nCAT\n");
        let words: Vec<&str> = vocabulary.iter().map(|(_, word)| word).collect();

        assert_eq!(words, vec!["CAT", "DOG"]);
    }

    // Tests the bundled sample word list
    #[test]
    fn test_load_sample() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/words0.txt");
        let vocabulary = load_vocabulary(&path).unwrap();

        assert_eq!(vocabulary.len(), 10);
        assert!(vocabulary.id_of("SEVEN").is_some());
    }

    // Tests read failures carry the operation name
    #[test]
    fn test_load_missing_words() {
        let temp_dir = TempDir::new().unwrap();

        match load_vocabulary(&temp_dir.path().join("missing.txt")) {
            Err(CrosswordError::FileSystem { operation, .. }) => {
                assert_eq!(operation, "read word list");
            }
            other => panic!("expected file system error, got {other:?}"),
        }
    }
}
