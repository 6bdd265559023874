use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// One player action as decoded by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    Move(Direction),
    /// Ends the session. Handled by the shell; the engine ignores it.
    Quit,
    /// Any key that maps to nothing. Ignored by the engine.
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    LostToDog,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}

/// Something that happened during a step, in the order it happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The cat ate a fish.
    Fed,
    CaughtMouse,
    /// Too many moves without food. `happiness_lost` is 0 when happiness was already at 0.
    HungerDecay { happiness_lost: u32 },
    Won,
    CaughtByDog,
}

/// Read-only view of the game handed to the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    pub player: Position,
    pub dog: Position,
    pub fish: Vec<Position>,
    pub mice: Vec<Position>,
    pub happiness: u32,
    pub goal: u32,
    pub status: GameStatus,
    pub turn: u64,
}

/// Result of a single call to `GameState::advance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub snapshot: GameSnapshot,
    pub events: Vec<GameEvent>,
}
