//! Error types for the simulation engine.

use thiserror::Error;

use crate::game::types::GameStatus;

/// Errors returned by game creation and `GameState::advance`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// No empty cell left for a placement or respawn. The grid is too small
    /// for the configured entity counts.
    #[error("No empty cell left on the {width}x{height} grid")]
    GridFull { width: usize, height: usize },

    /// Configuration values the engine cannot run with.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A step was requested after the game ended.
    #[error("Game is over ({0:?})")]
    GameOver(GameStatus),
}
