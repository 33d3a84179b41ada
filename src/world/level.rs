//! Level generation
//!
//! Carves rooms and a corridor out of a solid grid, then spawns one terrain
//! entity per cell plus a few wandering occupants.

use hecs::{Entity, World};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::ecs::{Impassable, Player, Position, Renderable, Viewable};

const WALL_COLOR: (u8, u8, u8) = (150, 140, 130);
const FLOOR_COLOR: (u8, u8, u8) = (90, 90, 100);
const PLAYER_COLOR: (u8, u8, u8) = (80, 220, 80);
const RAT_COLOR: (u8, u8, u8) = (200, 160, 90);

/// A rectangular room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Room {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Position {
        Position::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.x
            && pos.x < self.x + self.width
            && pos.y >= self.y
            && pos.y < self.y + self.height
    }
}

/// What was generated, for placing the player and for tests
#[derive(Debug, Clone)]
pub struct Level {
    pub width: i32,
    pub height: i32,
    pub rooms: Vec<Room>,
    /// Row-major; `true` where a wall stands
    solid: Vec<bool>,
}

impl Level {
    /// Solid grid with the given rooms and an L-shaped corridor between
    /// consecutive room centres carved out
    pub fn carve(width: i32, height: i32, rooms: Vec<Room>) -> Self {
        let mut level = Self {
            width,
            height,
            rooms: Vec::new(),
            solid: vec![true; (width.max(0) * height.max(0)) as usize],
        };
        for room in &rooms {
            for y in room.y..room.y + room.height {
                for x in room.x..room.x + room.width {
                    level.set_open(x, y);
                }
            }
        }
        for pair in rooms.windows(2) {
            let (from, to) = (pair[0].center(), pair[1].center());
            for x in from.x.min(to.x)..=from.x.max(to.x) {
                level.set_open(x, from.y);
            }
            for y in from.y.min(to.y)..=from.y.max(to.y) {
                level.set_open(to.x, y);
            }
        }
        level.rooms = rooms;
        level
    }

    /// The classic layout: a room in the top-left quarter and a long room on
    /// the right, joined by a corridor
    pub fn standard(width: i32, height: i32) -> Self {
        let mut rooms = vec![Room::new(1, 1, width / 2 - 1, 2 * height / 3 - 1)];
        let right = Room::new(width / 2 + 2, height / 3, width / 2 - 4, height / 3);
        if right.width > 0 && right.height > 0 {
            rooms.push(right);
        }
        Self::carve(width, height, rooms)
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        (x >= 0 && y >= 0 && x < self.width && y < self.height)
            .then(|| (y * self.width + x) as usize)
    }

    fn set_open(&mut self, x: i32, y: i32) {
        if let Some(i) = self.idx(x, y) {
            self.solid[i] = false;
        }
    }

    /// Off-grid cells count as solid
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        self.idx(x, y).map_or(true, |i| self.solid[i])
    }

    pub fn floor_positions(&self) -> Vec<Position> {
        (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Position::new(x, y)))
            .filter(|p| !self.is_solid(p.x, p.y))
            .collect()
    }

    /// Spawn one terrain entity per cell
    pub fn spawn_terrain(&self, world: &mut World) {
        for y in 0..self.height {
            for x in 0..self.width {
                if self.is_solid(x, y) {
                    spawn_wall(world, Position::new(x, y));
                } else {
                    spawn_floor(world, Position::new(x, y));
                }
            }
        }
        log::info!(
            "Generated {}x{} level with {} rooms",
            self.width,
            self.height,
            self.rooms.len()
        );
    }

    /// Where the player starts
    pub fn start_position(&self) -> Position {
        self.rooms
            .first()
            .map(Room::center)
            .unwrap_or_else(|| Position::new(self.width / 2, self.height / 2))
    }

    /// Scatter `count` occupants over distinct free floor cells
    pub fn spawn_occupants(&self, world: &mut World, count: usize, rng: &mut impl Rng) -> Vec<Entity> {
        let start = self.start_position();
        let mut free: Vec<Position> = self
            .floor_positions()
            .into_iter()
            .filter(|p| *p != start)
            .collect();
        free.shuffle(rng);
        free.into_iter()
            .take(count)
            .map(|pos| spawn_rat(world, pos))
            .collect()
    }
}

pub fn spawn_wall(world: &mut World, pos: Position) -> Entity {
    world.spawn((pos, Renderable::new('#', WALL_COLOR), Viewable::wall(), Impassable))
}

pub fn spawn_floor(world: &mut World, pos: Position) -> Entity {
    world.spawn((pos, Renderable::new('.', FLOOR_COLOR), Viewable::terrain()))
}

pub fn spawn_player(world: &mut World, pos: Position) -> Entity {
    world.spawn((
        pos,
        Player,
        Renderable::new('@', PLAYER_COLOR).with_order(2),
        Viewable::occupant(),
    ))
}

pub fn spawn_rat(world: &mut World, pos: Position) -> Entity {
    world.spawn((pos, Renderable::new('r', RAT_COLOR).with_order(1), Viewable::occupant()))
}
