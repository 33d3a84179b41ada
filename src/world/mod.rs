//! World module
//!
//! Level layout, terrain spawning and movement: the host around the vision
//! core.

pub mod level;
pub mod movement;

pub use level::{Level, Room};
pub use movement::{Direction, MovementSystem};
