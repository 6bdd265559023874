//! Game rendering (terminal).
//!
//! Frames are built as plain lines first so they can be tested, then written
//! to the terminal in one batch.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use cat_feeder::game::{GameEvent, GameSnapshot, Position};

pub const CAT_ICON: &str = "😺";
pub const DOG_ICON: &str = "🐶";
pub const FISH_ICON: &str = "🐟";
pub const MOUSE_ICON: &str = "🐭";
/// Ideographic space, as wide as the emoji glyphs.
pub const EMPTY_ICON: &str = "\u{3000}";

pub const WIN_MESSAGE: &str = "Congratulations! Your cat is happy and full 😺🎉";
pub const LOSE_MESSAGE: &str = "Game Over! The dog caught your cat! 🐶😺";
pub const FAREWELL: &str = "Thanks for playing!";

/// Intro screen shown before the first frame.
pub fn welcome_lines(snapshot: &GameSnapshot) -> Vec<String> {
    vec![
        "Welcome to Cat Feeder!".to_string(),
        format!("Move the cat ({CAT_ICON}) with Arrow keys. Collect fish ({FISH_ICON}) to feed your cat!"),
        format!("Catch mice ({MOUSE_ICON}) for double points!"),
        format!("Avoid the dog ({DOG_ICON}) chasing you!"),
        format!("Grid size: {} x {}  |  Fishes and mice move now!", snapshot.width, snapshot.height),
        "If you wander too long without feeding, happiness drops!".to_string(),
        format!("Reach happiness {} to win. Press Q to quit.", snapshot.goal),
        "Press any key to start...".to_string(),
    ]
}

/// One string per grid row. Cat wins over dog, dog over mouse, mouse over fish.
pub fn grid_lines(snapshot: &GameSnapshot) -> Vec<String> {
    let fish: HashSet<Position> = snapshot.fish.iter().copied().collect();
    let mice: HashSet<Position> = snapshot.mice.iter().copied().collect();

    (0..snapshot.height)
        .map(|y| {
            (0..snapshot.width)
                .map(|x| {
                    let pos = Position::new(x, y);
                    if pos == snapshot.player {
                        CAT_ICON
                    } else if pos == snapshot.dog {
                        DOG_ICON
                    } else if mice.contains(&pos) {
                        MOUSE_ICON
                    } else if fish.contains(&pos) {
                        FISH_ICON
                    } else {
                        EMPTY_ICON
                    }
                })
                .collect()
        })
        .collect()
}

/// Score line, grid, then an optional message line.
pub fn frame_lines(snapshot: &GameSnapshot, message: Option<&str>) -> Vec<String> {
    let mut lines = vec![format!("Happiness: {} / {}", snapshot.happiness, snapshot.goal)];
    lines.extend(grid_lines(snapshot));
    if let Some(message) = message {
        lines.push(message.to_string());
    }
    lines
}

/// Text the shell shows for an event, if any.
pub fn event_message(event: GameEvent) -> Option<&'static str> {
    match event {
        GameEvent::HungerDecay { happiness_lost: 0 } => Some("Your cat is too hungry! (min happiness)"),
        GameEvent::HungerDecay { .. } => Some("Your cat is sad from hunger! (-1 happiness)"),
        GameEvent::Won => Some(WIN_MESSAGE),
        GameEvent::CaughtByDog => Some(LOSE_MESSAGE),
        GameEvent::Fed | GameEvent::CaughtMouse => None,
    }
}

/// Clear the screen and write `lines`. Raw mode needs explicit carriage returns.
pub fn draw<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    for line in lines {
        queue!(out, Print(line), Print("\r\n"))?;
    }
    out.flush()
}
