//! Main entry point for the terminal game.
//!
//! Initializes logging, reads the game configuration from the environment and
//! runs the interactive loop. Logs go to stderr; redirect it (`2>cat.log`) when
//! raising `RUST_LOG` so they don't scribble over the board.

use anyhow::Result;
use cat_feeder::config::GameConfig;

mod shell;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger from environment variable (default to error level).
    env_logger::init();

    let config = GameConfig::from_env();
    config.validate()?;

    shell::game_loop::run_game_loop(config).await
}
