//! Movement systems.
//!
//! This module moves the cat, the wandering resources and the dog on the grid.

use std::collections::HashSet;

use rand::seq::IndexedRandom;

use crate::game::entities::{chase_step, wander_candidates, ResourceKind};
use crate::game::state::GameState;
use crate::game::types::{Direction, Position};

/// Move the cat one cell in `direction`, clamped to the grid.
/// Returns whether its position changed.
pub fn move_player(game_state: &mut GameState, direction: Direction) -> bool {
    let new_pos = game_state.grid.step(game_state.player, direction);
    let moved = new_pos != game_state.player;
    game_state.player = new_pos;
    moved
}

/// Random-walk every resource of `kind`, one at a time in index order.
///
/// Each mover sees the cells of peers already moved this step at their new
/// position and the others at their old one, so no two resources can meet.
pub fn move_resources(game_state: &mut GameState, kind: ResourceKind) {
    let mut occupied = game_state.occupied();
    let grid = game_state.grid;
    let positions = match kind {
        ResourceKind::Fish => &mut game_state.fish,
        ResourceKind::Mouse => &mut game_state.mice,
    };

    for pos in positions.iter_mut() {
        occupied.remove(&*pos);
        let candidates = wander_candidates(&grid, *pos, &occupied);
        *pos = candidates.choose(&mut game_state.rng).copied().unwrap_or(*pos);
        occupied.insert(*pos);
    }
}

/// Advance the turn counter and move the dog toward the cat on even turns.
pub fn move_dog(game_state: &mut GameState) {
    game_state.turn += 1;
    if game_state.turn % 2 != 0 {
        return;
    }

    let blocked: HashSet<Position> = game_state
        .fish
        .iter()
        .chain(game_state.mice.iter())
        .copied()
        .collect();
    game_state.dog = chase_step(&game_state.grid, game_state.dog, game_state.player, &blocked);
}
