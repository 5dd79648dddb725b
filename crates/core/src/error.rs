use std::path::PathBuf;

use crate::types::Coord;

/// Errors produced by the rule engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Coordinate outside the board. Always a caller defect.
    #[error("coordinate ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// The two cells of a swap do not share an edge. No mutation happened.
    #[error("cells {a} and {b} are not adjacent")]
    InvalidSwap { a: Coord, b: Coord },

    /// Nonsensical session configuration. The session is never created.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// `swap_with` was called before any tile was selected.
    #[error("no tile is selected")]
    NoSelection,
}

impl GameError {
    /// True for errors the caller can recover from by trying another move
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InvalidSwap { .. } | GameError::NoSelection)
    }
}

/// Errors that can occur when loading configuration from disk.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error(transparent)]
    Invalid(#[from] GameError),
}
