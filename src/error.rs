//! Error types. Game-rule outcomes (bumping a wall, stepping on a trap)
//! are not errors; these cover loading data and talking to the terminal.

use std::io;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Maze error: {0}")]
    Maze(#[from] MazeError),
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze has no rows")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged { row: usize, expected: usize, found: usize },

    #[error("unknown tile {found:?} at row {row}, col {col}")]
    UnknownTile { row: usize, col: usize, found: char },

    #[error("border cell at row {row}, col {col} is not a blocking wall")]
    OpenBorder { row: usize, col: usize },

    #[error("level has no start line (`@ row,col heading`)")]
    MissingStart,

    #[error("level has no goal line (`* row,col`)")]
    MissingGoal,

    #[error("malformed metadata on line {line}")]
    BadMetadata { line: usize },

    #[error("row {row}, col {col} is outside the maze")]
    OutOfBounds { row: usize, col: usize },

    #[error("row {row}, col {col} is a blocking wall")]
    NotOpen { row: usize, col: usize },
}
