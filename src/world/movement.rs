//! Player movement
//!
//! Moves are clamped to the grid and refused when the target cell holds
//! anything impassable.

use hecs::World;

use crate::ecs::{Impassable, Player, Position};

/// A single orthogonal step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Moves the player around a cached impassability grid
#[derive(Debug, Clone)]
pub struct MovementSystem {
    width: i32,
    height: i32,
    impassable: Vec<bool>,
}

impl MovementSystem {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            impassable: vec![false; (width.max(0) * height.max(0)) as usize],
        }
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        (x >= 0 && y >= 0 && x < self.width && y < self.height)
            .then(|| (y * self.width + x) as usize)
    }

    /// Rebuild the cache from every `(Impassable, Position)` entity
    pub fn cache_impassable(&mut self, world: &World) {
        self.impassable.fill(false);
        for (_, (pos, _)) in world.query::<(&Position, &Impassable)>().iter() {
            if let Some(i) = self.idx(pos.x, pos.y) {
                self.impassable[i] = true;
            }
        }
    }

    pub fn passable(&self, x: i32, y: i32) -> bool {
        self.idx(x, y).map_or(false, |i| !self.impassable[i])
    }

    /// Try to step the player; returns whether anyone moved
    pub fn try_move(&self, world: &mut World, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        let mut moved = false;
        for (_, (pos, _)) in world.query_mut::<(&mut Position, &Player)>() {
            let x = (pos.x + dx).clamp(0, self.width - 1);
            let y = (pos.y + dy).clamp(0, self.height - 1);
            if (x, y) != (pos.x, pos.y) && self.passable(x, y) {
                pos.x = x;
                pos.y = y;
                moved = true;
            }
        }
        moved
    }
}
