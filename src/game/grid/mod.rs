//! Grid bounds and free-cell placement.

pub mod grid;

pub use grid::*;
