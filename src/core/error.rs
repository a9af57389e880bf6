//! Domain errors for canvas construction and startup resources.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("cell width must be between {min} and {max} columns (got {got})")]
    CellWidth { got: u16, min: u16, max: u16 },
    #[error("failed to read credit text from {path}: {source}")]
    Credits {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
