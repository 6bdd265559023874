//! Interactive game loop.
//!
//! Reads keys, feeds them to the engine and redraws after every step.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{info, trace};

use cat_feeder::config::GameConfig;
use cat_feeder::config::shell::STEP_DELAY_MS;
use cat_feeder::game::{GameState, GameStatus, Input};

use super::input::decode_key;
use super::render::{FAREWELL, draw, event_message, frame_lines, welcome_lines};

/// Raw mode and the alternate screen, restored on drop.
struct TerminalGuard {
    stdout: Stdout,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide).context("failed to enter alternate screen")?;
        Ok(Self { stdout })
    }

    fn draw(&mut self, lines: &[String]) -> Result<()> {
        draw(&mut self.stdout, lines).context("failed to draw frame")
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Block until a key is pressed and decode it.
fn read_key() -> io::Result<Input> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(decode_key(key));
            }
        }
    }
}

async fn next_input() -> Result<Input> {
    let input = tokio::task::spawn_blocking(read_key)
        .await
        .context("key reader task failed")?
        .context("failed to read terminal event")?;
    Ok(input)
}

/// Run one game until it is won, lost, or the player quits.
pub async fn run_game_loop(config: GameConfig) -> Result<()> {
    let mut game_state = GameState::from_config(config).context("failed to create game")?;
    info!("Starting game with {:?}", game_state.config());
    let mut terminal = TerminalGuard::enter()?;

    terminal.draw(&welcome_lines(&game_state.snapshot()))?;
    if next_input().await? == Input::Quit {
        drop(terminal);
        println!("{FAREWELL}");
        return Ok(());
    }

    let mut message: Option<&'static str> = None;
    loop {
        let mut lines = frame_lines(&game_state.snapshot(), message.take());
        lines.push("Move (Arrow keys), or Q to quit: ".to_string());
        terminal.draw(&lines)?;

        let input = next_input().await?;
        if input == Input::Quit {
            info!("Player quit on turn {}", game_state.snapshot().turn);
            break;
        }

        let outcome = game_state.advance(input)?;
        trace!("{}", serde_json::to_string(&outcome)?);
        for event in &outcome.events {
            if let Some(text) = event_message(*event) {
                message = Some(text);
            }
        }

        if outcome.snapshot.status != GameStatus::Playing {
            info!("Game ended on turn {}: {:?}", outcome.snapshot.turn, outcome.snapshot.status);
            let mut lines = frame_lines(&outcome.snapshot, message.take());
            lines.push("Press any key to exit.".to_string());
            terminal.draw(&lines)?;
            next_input().await?;
            break;
        }

        if matches!(input, Input::Move(_)) {
            tokio::time::sleep(Duration::from_millis(STEP_DELAY_MS)).await;
        }
    }

    drop(terminal);
    println!("{FAREWELL}");
    Ok(())
}
