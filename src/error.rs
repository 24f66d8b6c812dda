//! Error type for malformed grids and invalid search requests.
use grid_util::Point;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,

    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognised cell {ch:?} at ({x}, {y})")]
    UnknownCell { ch: char, x: usize, y: usize },

    #[error("marker {0:?} not found in grid")]
    MissingMarker(char),

    #[error("marker {marker:?} appears more than once, at {first} and {second}")]
    DuplicateMarker {
        marker: char,
        first: Point,
        second: Point,
    },

    #[error("position {0} lies outside the grid")]
    OutOfBounds(Point),
}

pub type Result<T> = std::result::Result<T, GridError>;
