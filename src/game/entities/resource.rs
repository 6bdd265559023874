//! Resource entity logic.
//!
//! Fish and mice are interchangeable positions that wander the grid and
//! respawn elsewhere when the cat eats them.

use std::collections::HashSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::error::GameError;
use crate::game::grid::Grid;
use crate::game::types::{GameEvent, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Fish,
    Mouse,
}

impl ResourceKind {
    /// Happiness gained by eating one.
    pub fn worth(self) -> u32 {
        match self {
            ResourceKind::Fish => 1,
            ResourceKind::Mouse => 2,
        }
    }

    /// Event emitted when the cat eats one.
    pub fn eaten_event(self) -> GameEvent {
        match self {
            ResourceKind::Fish => GameEvent::Fed,
            ResourceKind::Mouse => GameEvent::CaughtMouse,
        }
    }
}

/// Spawn `count` resources on free cells.
/// Every new position is added to `occupied` so later spawns avoid it.
pub fn spawn_resources<R: Rng + ?Sized>(
    grid: &Grid,
    rng: &mut R,
    occupied: &mut HashSet<Position>,
    count: usize,
) -> Result<Vec<Position>, GameError> {
    let mut spawned = Vec::with_capacity(count);
    for _ in 0..count {
        let pos = grid.pick_empty_cell(rng, occupied)?;
        occupied.insert(pos);
        spawned.push(pos);
    }
    Ok(spawned)
}

/// Candidate cells for one random-walk step: stay or move to a free neighbour.
/// `occupied` must not contain `pos` itself. Staying is always possible.
pub fn wander_candidates(grid: &Grid, pos: Position, occupied: &HashSet<Position>) -> Vec<Position> {
    let mut candidates: Vec<Position> = grid
        .stay_or_neighbors(pos)
        .into_iter()
        .filter(|cell| !occupied.contains(cell))
        .collect();
    if !candidates.contains(&pos) {
        candidates.push(pos);
    }
    candidates
}
