use std::collections::HashSet;

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::GameConfig;
use crate::game::entities::{spawn_resources, ResourceKind};
use crate::game::error::GameError;
use crate::game::grid::Grid;
use crate::game::systems::{apply_dog_rules, apply_player_rules, move_dog, move_player, move_resources};
use crate::game::types::{GameEvent, GameSnapshot, GameStatus, Input, Position, StepOutcome};

/// Full simulation state. Owns its configuration and random source.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) grid: Grid,
    pub(crate) player: Position,
    pub(crate) dog: Position,
    pub(crate) fish: Vec<Position>,
    pub(crate) mice: Vec<Position>,
    pub(crate) happiness: u32,
    pub(crate) moves_since_last_feed: u32,
    pub(crate) turn: u64,
    pub(crate) status: GameStatus,
    pub(crate) rng: SmallRng,
}

impl GameState {
    /// Create a game, seeding the random source from `config.rng_seed` or the OS.
    pub fn from_config(config: GameConfig) -> Result<Self, GameError> {
        let rng = match config.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::new(config, rng)
    }

    /// Create a game: the cat starts in the centre, then fish, mice and the dog
    /// are placed on distinct free cells, in that order.
    pub fn new(config: GameConfig, mut rng: SmallRng) -> Result<Self, GameError> {
        config.validate()?;
        let grid = Grid::new(config.grid_width, config.grid_height);
        let player = grid.center();

        let mut occupied = HashSet::from([player]);
        let fish = spawn_resources(&grid, &mut rng, &mut occupied, config.fish_count)?;
        let mice = spawn_resources(&grid, &mut rng, &mut occupied, config.mouse_count)?;
        let dog = grid.pick_empty_cell(&mut rng, &occupied)?;

        info!(
            "New game on {}x{} grid: {} fish, {} mice, goal {}",
            grid.width, grid.height, fish.len(), mice.len(), config.happiness_goal
        );

        Ok(GameState {
            config,
            grid,
            player,
            dog,
            fish,
            mice,
            happiness: 0,
            moves_since_last_feed: 0,
            turn: 0,
            status: GameStatus::Playing,
            rng,
        })
    }

    /// Run one turn for `input`.
    ///
    /// Order: cat move and feeding, fish, mice, then the dog. Each phase runs only
    /// while the game is still playing. `Quit` and `Unrecognized` leave the state
    /// untouched. If the step fails the state is left as it was.
    pub fn advance(&mut self, input: Input) -> Result<StepOutcome, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver(self.status));
        }

        let direction = match input {
            Input::Move(direction) => direction,
            Input::Quit | Input::Unrecognized => {
                debug!("Ignoring input {:?}", input);
                return Ok(self.outcome(Vec::new()));
            }
        };

        let mut next = self.clone();
        let mut events = Vec::new();

        let moved = move_player(&mut next, direction);
        apply_player_rules(&mut next, moved, &mut events)?;

        if next.status == GameStatus::Playing {
            move_resources(&mut next, ResourceKind::Fish);
            move_resources(&mut next, ResourceKind::Mouse);
            move_dog(&mut next);
            apply_dog_rules(&mut next, &mut events);
        }

        *self = next;
        for event in &events {
            debug!("Turn {}: {:?} (happiness {})", self.turn, event, self.happiness);
        }
        Ok(self.outcome(events))
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            width: self.grid.width,
            height: self.grid.height,
            player: self.player,
            dog: self.dog,
            fish: self.fish.clone(),
            mice: self.mice.clone(),
            happiness: self.happiness,
            goal: self.config.happiness_goal,
            status: self.status,
            turn: self.turn,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn happiness(&self) -> u32 {
        self.happiness
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Cells held by the cat, the dog and every resource.
    pub(crate) fn occupied(&self) -> HashSet<Position> {
        self.fish
            .iter()
            .chain(self.mice.iter())
            .copied()
            .chain([self.player, self.dog])
            .collect()
    }

    pub(crate) fn resources(&self, kind: ResourceKind) -> &Vec<Position> {
        match kind {
            ResourceKind::Fish => &self.fish,
            ResourceKind::Mouse => &self.mice,
        }
    }

    fn outcome(&self, events: Vec<GameEvent>) -> StepOutcome {
        StepOutcome { snapshot: self.snapshot(), events }
    }
}
