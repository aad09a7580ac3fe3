use schema::{Ball, Move, Species};
use thiserror::Error;

/// Main error type for the battle core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleEngineError {
    /// Error related to loading or reading the catalog
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    /// Error related to move data lookup or processing
    #[error("Move data error: {0}")]
    MoveData(#[from] MoveDataError),
    /// Error related to species data lookup or processing
    #[error("Species data error: {0}")]
    SpeciesData(#[from] SpeciesDataError),
    /// Error related to invalid battle state
    #[error("Battle state error: {0}")]
    BattleState(#[from] BattleStateError),
}

/// Errors raised while loading the catalog documents
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A catalog document could not be read from disk
    #[error("Could not read {path}: {reason}")]
    Io { path: String, reason: String },
    /// A catalog document is not valid RON for its table
    #[error("Malformed {document}: {reason}")]
    Parse { document: String, reason: String },
    /// The ball is not in the ball table
    #[error("Ball not found: {0:?}")]
    BallNotFound(Ball),
}

/// Errors related to move data operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveDataError {
    /// The specified move was not found in the catalog
    #[error("Move not found: {0:?}")]
    MoveNotFound(Move),
    /// A move name did not resolve to any known move
    #[error("Unknown move name: {0}")]
    UnknownMoveName(String),
}

/// Errors related to species data operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeciesDataError {
    /// The specified species was not found in the catalog
    #[error("Species not found: {0:?}")]
    SpeciesNotFound(Species),
}

/// Errors related to battle state validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleStateError {
    /// No active Pokemon found when one was expected
    #[error("No active Pokemon found")]
    NoActivePokemon,
    /// The active Pokemon knows no moves to choose from
    #[error("{0} has no moves to choose from")]
    NoMovesKnown(String),
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Type alias for Results using MoveDataError
pub type MoveDataResult<T> = Result<T, MoveDataError>;

/// Type alias for Results using SpeciesDataError
pub type SpeciesDataResult<T> = Result<T, SpeciesDataError>;
