//! Game state
//!
//! Owns the world and runs one turn at a time: movement first, then exactly
//! one visibility pass.

use hecs::{Entity, World};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::ecs::Position;
use crate::vision::{PassReport, ScreenBounds, ViewStrategy, VisionSystem};
use crate::world::level::spawn_player;
use crate::world::{Direction, Level, MovementSystem};

/// Top-level mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Quit,
}

/// The main game struct that holds all game data
pub struct Game {
    state: GameState,
    world: World,
    level: Level,
    vision: VisionSystem,
    movement: MovementSystem,
    bounds: ScreenBounds,
    player_entity: Entity,
    /// Radius used when toggling to the square viewshed
    square_radius: i32,
    turn: u32,
    last_pass: PassReport,
}

impl Game {
    /// Build a level of the given size and run the first visibility pass
    pub fn new(config: &Config, width: i32, height: i32) -> Self {
        let mut rng = match config.map.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut world = World::new();
        let level = Level::standard(width, height);
        level.spawn_terrain(&mut world);
        level.spawn_occupants(&mut world, config.map.occupants, &mut rng);
        let player_entity = spawn_player(&mut world, level.start_position());

        let mut movement = MovementSystem::new(width, height);
        movement.cache_impassable(&world);

        let mut game = Self {
            state: GameState::Playing,
            world,
            level,
            vision: VisionSystem::new(config.vision.strategy, config.vision.limits()),
            movement,
            bounds: ScreenBounds::new(width, height),
            player_entity,
            square_radius: config.vision.square_radius,
            turn: 0,
            last_pass: PassReport::default(),
        };
        game.update_vision();
        game
    }

    /// Resolve the player's move (if any) then recompute what is visible
    pub fn tick(&mut self, direction: Option<Direction>) {
        if let Some(direction) = direction {
            if !self.movement.try_move(&mut self.world, direction) {
                log::debug!("Move {:?} blocked", direction);
            }
        }
        self.turn += 1;
        self.update_vision();
    }

    fn update_vision(&mut self) {
        self.last_pass = self.vision.run(&mut self.world, &self.bounds);
    }

    /// Swap between shadow casting and the square viewshed, then repaint
    pub fn toggle_strategy(&mut self) {
        let next = match self.vision.strategy() {
            ViewStrategy::ShadowCast => ViewStrategy::Square {
                radius: self.square_radius,
            },
            ViewStrategy::Square { .. } => ViewStrategy::ShadowCast,
        };
        self.vision.set_strategy(next);
        self.update_vision();
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn quit(&mut self) {
        self.state = GameState::Quit;
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn vision(&self) -> &VisionSystem {
        &self.vision
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn last_pass(&self) -> PassReport {
        self.last_pass
    }

    pub fn player_position(&self) -> Option<Position> {
        self.world.get::<&Position>(self.player_entity).ok().map(|p| *p)
    }
}
