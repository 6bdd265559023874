//! Cat Feeder game engine.
//!
//! `game` holds the turn-based simulation, `config` its parameters. The terminal
//! front end lives in the binary.

pub mod config;
pub mod game;
