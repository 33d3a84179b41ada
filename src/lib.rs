//! Gloomcrawl - a terminal dungeon crawler
//!
//! The interesting part lives in [`vision`]: recursive octant shadow casting
//! that decides which tiles are bright, remembered or hidden each turn.

pub mod config;
pub mod ecs;
pub mod error;
pub mod game;
pub mod ui;
pub mod vision;
pub mod world;

// Re-export commonly used types
pub use config::Config;
pub use ecs::components::*;
pub use error::ConfigError;
pub use game::{Game, GameState};
pub use vision::{ViewStrategy, VisionSystem};
