//! Structure file loading

use std::path::Path;

use crate::io::error::{Result, file_system_error};
use crate::spatial::grid::Structure;

/// Read and parse a structure file
///
/// # Errors
///
/// Returns an error if the file cannot be read or describes no cells
pub fn load_structure(path: &Path) -> Result<Structure> {
    let text = std::fs::read_to_string(path).map_err(file_system_error(path, "read structure"))?;
    let structure = Structure::parse(&text)?;
    log::debug!(
        "Loaded {}x{} structure with {} fillable cells from {}",
        structure.width(),
        structure.height(),
        structure.fillable_count(),
        path.display()
    );
    Ok(structure)
}
