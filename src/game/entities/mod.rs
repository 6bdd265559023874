//! Game entities module.
//!
//! This module organizes resource (fish, mouse) and dog entity logic.
//! The cat has no module of its own: it is a single position moved by the systems.

pub mod resource;
pub mod dog;

pub use resource::*;
pub use dog::*;
