/// Main configuration module.
/// 
/// Re-exports submodules for game and shell configuration.
pub mod game;
pub mod shell;

pub use game::GameConfig;
