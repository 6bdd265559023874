//! Simulation engine: a cat chasing fish and mice while a dog chases the cat.

pub mod types;
pub mod error;
pub mod state;

pub mod entities;
pub mod grid;
pub mod systems;


pub use error::GameError;
pub use state::GameState;
pub use types::*;
