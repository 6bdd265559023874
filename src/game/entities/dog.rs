//! Dog entity logic.
//!
//! The dog walks one cell toward the cat along the axis with the larger gap,
//! sidestepping fish and mice when it can.

use std::collections::HashSet;

use crate::game::grid::Grid;
use crate::game::types::Position;

/// One unit toward `to` from `from` on a single axis (-1, 0 or 1).
fn toward(from: usize, to: usize) -> isize {
    match to.cmp(&from) {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
    }
}

fn offset(pos: Position, dx: isize, dy: isize) -> Position {
    Position {
        x: pos.x.saturating_add_signed(dx),
        y: pos.y.saturating_add_signed(dy),
    }
}

/// Next dog position when chasing `target`.
///
/// Ties between the axes go to x. A step onto a cell in `blocked` falls back to
/// the other axis, then to staying put.
pub fn chase_step(grid: &Grid, dog: Position, target: Position, blocked: &HashSet<Position>) -> Position {
    let sx = toward(dog.x, target.x);
    let sy = toward(dog.y, target.y);
    let prefer_x = dog.x.abs_diff(target.x) >= dog.y.abs_diff(target.y);

    let x_step = (sx != 0).then(|| offset(dog, sx, 0));
    let y_step = (sy != 0).then(|| offset(dog, 0, sy));
    let (primary, secondary) = if prefer_x { (x_step, y_step) } else { (y_step, x_step) };

    let next = [primary, secondary]
        .into_iter()
        .flatten()
        .find(|cell| !blocked.contains(cell))
        .unwrap_or(dog);

    Position {
        x: next.x.min(grid.width - 1),
        y: next.y.min(grid.height - 1),
    }
}
