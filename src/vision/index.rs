//! Sparse per-cell lookup of viewables
//!
//! Rebuilt from the world at the start of every visibility pass and dropped
//! at the end of it.

use std::collections::HashMap;

use hecs::{Entity, World};

use crate::ecs::{Position, Viewable};

/// A viewable as seen by the index: its entity and whether it blocks sight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexedViewable {
    pub entity: Entity,
    pub opaque: bool,
}

/// Coordinate → viewables in that cell, in insertion order
#[derive(Debug, Clone, Default)]
pub struct ViewableIndex {
    cells: HashMap<(i32, i32), Vec<IndexedViewable>>,
}

impl ViewableIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every entity that has both a `Position` and a `Viewable`
    pub fn from_world(world: &World) -> Self {
        let mut index = Self::new();
        for (entity, (pos, viewable)) in world.query::<(&Position, &Viewable)>().iter() {
            index.insert(pos.x, pos.y, entity, viewable.opaque);
        }
        index
    }

    /// Build from hand-placed `(x, y, entity, opaque)` entries
    pub fn from_entries(entries: impl IntoIterator<Item = (i32, i32, Entity, bool)>) -> Self {
        let mut index = Self::new();
        for (x, y, entity, opaque) in entries {
            index.insert(x, y, entity, opaque);
        }
        index
    }

    /// Append a viewable to a cell
    pub fn insert(&mut self, x: i32, y: i32, entity: Entity, opaque: bool) {
        self.cells
            .entry((x, y))
            .or_default()
            .push(IndexedViewable { entity, opaque });
    }

    /// Viewables in a cell; empty when nothing is there
    pub fn get(&self, x: i32, y: i32) -> &[IndexedViewable] {
        self.cells.get(&(x, y)).map(Vec::as_slice).unwrap_or(&[])
    }

    /// A cell is a wall if anything in it is opaque
    pub fn is_opaque(&self, x: i32, y: i32) -> bool {
        self.get(x, y).iter().any(|v| v.opaque)
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewables_lookup_table() {
        let mut world = World::new();
        let floor = world.spawn((Position::new(1, 0), Viewable::terrain()));
        let rat = world.spawn((Position::new(1, 0), Viewable::occupant()));

        let index = ViewableIndex::from_world(&world);
        let entities: Vec<Entity> = index.get(1, 0).iter().map(|v| v.entity).collect();
        assert_eq!(entities, vec![floor, rat]);
        assert!(index.get(0, 0).is_empty());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_entities_without_viewable_skipped() {
        let mut world = World::new();
        world.spawn((Position::new(2, 2),));
        world.spawn((Viewable::wall(),));

        let index = ViewableIndex::from_world(&world);
        assert!(index.is_empty());
        assert!(index.get(2, 2).is_empty());
    }

    #[test]
    fn test_opacity() {
        let mut world = World::new();
        let floor = world.spawn(());
        let door = world.spawn(());
        let index = ViewableIndex::from_entries([(3, 4, floor, false), (3, 4, door, true)]);
        assert!(index.is_opaque(3, 4));
        assert!(!index.is_opaque(4, 4));
        assert_eq!(index.get(3, 4).len(), 2);
    }
}
