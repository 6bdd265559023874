//! Terminal front end. Provides key decoding, frame rendering and the
//! interactive loop that drives the engine.
pub mod game_loop;
pub mod input;
pub mod render;
