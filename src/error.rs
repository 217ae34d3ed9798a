//! Error types for board construction and solver configuration

use thiserror::Error;

use crate::core::Vec2;

/// A level that cannot be turned into a searchable board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidBoardError {
    #[error("board has no rows")]
    Empty,

    #[error("board has no player cell")]
    MissingPlayer,

    #[error("board has more than one player cell, found at {first} and {second}")]
    MultiplePlayers { first: Vec2, second: Vec2 },

    #[error("unknown symbol {symbol:?} at row {row}, column {column}")]
    UnknownSymbol {
        row: usize,
        column: usize,
        symbol: char,
    },
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
