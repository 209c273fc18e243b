//! Error types for loading, solving, and exporting crosswords
//!
//! An unsatisfiable puzzle is not an error: the solver reports it as `Ok(None)`.
//! Everything here is a genuine fault the caller has to handle.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Main error type for all crossword operations
#[derive(Debug)]
pub enum CrosswordError {
    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Structure description cannot be turned into a grid
    InvalidStructure {
        /// Description of what's wrong with the structure
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the rendered crossword to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Backtracking search exceeded its configured deadline
    SearchTimeout {
        /// Time spent searching before the deadline check fired
        elapsed: Duration,
        /// Search nodes explored before giving up
        nodes: usize,
    },
}

impl fmt::Display for CrosswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidStructure { reason } => {
                write!(f, "Invalid crossword structure: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::SearchTimeout { elapsed, nodes } => {
                write!(
                    f,
                    "Search timed out after {:.3}s ({nodes} nodes explored)",
                    elapsed.as_secs_f64()
                )
            }
        }
    }
}

impl std::error::Error for CrosswordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crossword results
pub type Result<T> = std::result::Result<T, CrosswordError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CrosswordError {
    CrosswordError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid structure error
pub fn invalid_structure(reason: &impl ToString) -> CrosswordError {
    CrosswordError::InvalidStructure {
        reason: reason.to_string(),
    }
}

/// Attach a path and operation name to a raw I/O failure
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> CrosswordError {
    let path = path.into();
    move |source| CrosswordError::FileSystem {
        path,
        operation,
        source,
    }
}
