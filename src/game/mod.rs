//! Game module - turn loop and state

mod state;

pub use state::{Game, GameState};
