/// Command-line parsing and run orchestration
pub mod cli;
/// Solver constants and rendering defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export of a filled grid
pub mod image;
/// Logger initialization
pub mod logging;
/// Search progress spinner
pub mod progress;
/// Text rendering of a filled grid
pub mod render;
/// Structure file loading
pub mod structure;
/// Word list loading
pub mod words;
