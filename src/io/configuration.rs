//! Solver constants and rendering defaults

// Structure file format
/// Character marking a fillable cell in a structure file
pub const FILLABLE_MARKER: char = '_';

/// Shortest run of fillable cells that forms a slot
pub const MIN_SLOT_LENGTH: usize = 2;

// Text rendering
/// Glyph printed for blocked cells
pub const BLOCKED_GLYPH: char = '█';
/// Glyph printed for fillable cells without a letter
pub const EMPTY_GLYPH: char = ' ';
/// Message printed when the puzzle cannot be filled
pub const NO_SOLUTION_MESSAGE: &str = "No solution.";

// Image export
/// Side length of one grid cell in pixels
pub const CELL_SIZE: u32 = 100;
/// Width of the dark border drawn around each cell
pub const CELL_BORDER: u32 = 2;
/// Pixel size of one bitmap-font dot
pub const GLYPH_SCALE: u32 = 8;
/// Canvas and blocked cell color
pub const BACKGROUND_RGBA: [u8; 4] = [0, 0, 0, 255];
/// Fillable cell color
pub const CELL_RGBA: [u8; 4] = [255, 255, 255, 255];
/// Letter color
pub const LETTER_RGBA: [u8; 4] = [0, 0, 0, 255];

// Progress display settings
/// Number of explored search nodes between spinner refreshes
pub const PROGRESS_UPDATE_INTERVAL: usize = 256;
/// Spinner redraw period in milliseconds
pub const SPINNER_TICK_MS: u64 = 120;
