//! Word list loading and normalization

use std::path::Path;

use crate::algorithm::vocabulary::Vocabulary;
use crate::io::error::{Result, file_system_error};

/// Normalize word-list text into a vocabulary
///
/// One word per line. Lines are trimmed and upper-cased; blank lines and
/// duplicates are dropped.
pub fn parse_vocabulary(text: &str) -> Vocabulary {
    Vocabulary::new(
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_uppercase),
    )
}

/// Read a word list file
///
/// # Errors
///
/// Returns an error if the file cannot be read
pub fn load_vocabulary(path: &Path) -> Result<Vocabulary> {
    let text = std::fs::read_to_string(path).map_err(file_system_error(path, "read word list"))?;
    let vocabulary = parse_vocabulary(&text);
    log::debug!(
        "Loaded {} distinct words from {}",
        vocabulary.len(),
        path.display()
    );
    Ok(vocabulary)
}
