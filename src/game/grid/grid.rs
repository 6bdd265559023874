use std::collections::HashSet;

use rand::Rng;
use rand::seq::IteratorRandom;
use serde::{Deserialize, Serialize};

use crate::game::error::GameError;
use crate::game::types::{Direction, Position};

/// Rectangular board with its origin in the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }

    /// One step in `direction`, staying put at the edge.
    pub fn step(&self, pos: Position, direction: Direction) -> Position {
        let mut new_pos = pos;
        match direction {
            Direction::Up => {
                if new_pos.y > 0 { new_pos.y -= 1; }
            }
            Direction::Down => {
                if new_pos.y + 1 < self.height { new_pos.y += 1; }
            }
            Direction::Left => {
                if new_pos.x > 0 { new_pos.x -= 1; }
            }
            Direction::Right => {
                if new_pos.x + 1 < self.width { new_pos.x += 1; }
            }
        }
        new_pos
    }

    /// `pos` itself followed by its in-bounds 4-neighbours.
    pub fn stay_or_neighbors(&self, pos: Position) -> Vec<Position> {
        let mut cells = vec![pos];
        for direction in [Direction::Left, Direction::Right, Direction::Up, Direction::Down] {
            let next = self.step(pos, direction);
            if next != pos {
                cells.push(next);
            }
        }
        cells
    }

    /// Pick a cell uniformly among those not in `excluded`.
    pub fn pick_empty_cell<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        excluded: &HashSet<Position>,
    ) -> Result<Position, GameError> {
        self.cells()
            .filter(|pos| !excluded.contains(pos))
            .choose(rng)
            .ok_or(GameError::GridFull { width: self.width, height: self.height })
    }
}
