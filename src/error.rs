//! Centralized error types for the simulation.
//!
//! The simulation has no I/O of its own, so every variant here is either a
//! malformed layout caught at startup or a violated invariant.

use glam::IVec2;

/// Main error type for the simulation.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Map parsing error: {0}")]
    MapParse(#[from] ParseError),
}

/// Error type for layout parsing operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown character in board: {0}")]
    UnknownCharacter(char),
    #[error("Board has no rows")]
    Empty,
    #[error("Board row {row} has {found} columns, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("Board is missing marker '{0}'")]
    MissingMarker(char),
    #[error("Board marker '{0}' appears more than once")]
    DuplicateMarker(char),
    #[error("Board has no pickups")]
    NoPickups,
}

/// Errors from converting raw vectors into entity values.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EntityError {
    #[error("Velocity {0} is not a cardinal unit vector")]
    InvalidDirection(IVec2),
}

/// Result type for simulation operations.
pub type GameResult<T> = Result<T, GameError>;
