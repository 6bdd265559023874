//! Game rules: feeding, hunger and the end-of-game checks.

use crate::game::entities::ResourceKind;
use crate::game::error::GameError;
use crate::game::state::GameState;
use crate::game::types::{GameEvent, GameStatus};

/// Resolve the cat's new cell: dog collision, eating, or hunger.
/// `moved` is false when the cat bumped into an edge.
pub fn apply_player_rules(
    game_state: &mut GameState,
    moved: bool,
    events: &mut Vec<GameEvent>,
) -> Result<(), GameError> {
    let player = game_state.player;

    if player == game_state.dog {
        game_state.status = GameStatus::LostToDog;
        events.push(GameEvent::CaughtByDog);
        return Ok(());
    }

    // Mice take priority; a cell never holds both.
    for kind in [ResourceKind::Mouse, ResourceKind::Fish] {
        if let Some(index) = game_state.resources(kind).iter().position(|&pos| pos == player) {
            return eat_resource(game_state, kind, index, events);
        }
    }

    if moved {
        apply_hunger(game_state, events);
    }
    Ok(())
}

/// Eat the resource at `index`, then either win or respawn it on a free cell.
fn eat_resource(
    game_state: &mut GameState,
    kind: ResourceKind,
    index: usize,
    events: &mut Vec<GameEvent>,
) -> Result<(), GameError> {
    game_state.happiness += kind.worth();
    game_state.moves_since_last_feed = 0;
    events.push(kind.eaten_event());

    let goal = game_state.config.happiness_goal;
    if game_state.happiness >= goal {
        game_state.happiness = goal;
        game_state.status = GameStatus::Won;
        match kind {
            ResourceKind::Fish => game_state.fish.remove(index),
            ResourceKind::Mouse => game_state.mice.remove(index),
        };
        events.push(GameEvent::Won);
        return Ok(());
    }

    // The eaten cell is the cat's, so it is excluded along with everything else.
    let excluded = game_state.occupied();
    let respawn = game_state.grid.pick_empty_cell(&mut game_state.rng, &excluded)?;
    match kind {
        ResourceKind::Fish => game_state.fish[index] = respawn,
        ResourceKind::Mouse => game_state.mice[index] = respawn,
    }
    Ok(())
}

fn apply_hunger(game_state: &mut GameState, events: &mut Vec<GameEvent>) {
    game_state.moves_since_last_feed += 1;
    if game_state.moves_since_last_feed <= game_state.config.max_moves_without_fish {
        return;
    }

    let happiness_lost = game_state.happiness.min(1);
    game_state.happiness -= happiness_lost;
    game_state.moves_since_last_feed = 0;
    events.push(GameEvent::HungerDecay { happiness_lost });
}

/// End the game if the dog reached the cat.
pub fn apply_dog_rules(game_state: &mut GameState, events: &mut Vec<GameEvent>) {
    if game_state.dog == game_state.player {
        game_state.status = GameStatus::LostToDog;
        events.push(GameEvent::CaughtByDog);
    }
}
