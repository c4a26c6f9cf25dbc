use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid size must be positive, got {grid_size}")]
    InvalidDimension { grid_size: usize },

    #[error("a {rows}x{cols} footprint does not fit in a {grid_size}x{grid_size} grid")]
    OutOfBounds {
        grid_size: usize,
        rows: usize,
        cols: usize,
    },

    #[error("cell at row {row}, column {col} is outside a {grid_size}x{grid_size} grid")]
    CellOutOfBounds {
        grid_size: usize,
        row: usize,
        col: usize,
    },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseGridError {
    #[error("grid text has no rows")]
    Empty,

    #[error("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("unexpected character {found:?} at row {row}, column {col}")]
    InvalidChar { row: usize, col: usize, found: char },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "interval_ms in config file {} must be between 1 and 3600000, got {interval_ms}",
        .path.display()
    )]
    InvalidInterval { path: PathBuf, interval_ms: u64 },
}
