//! Visibility system
//!
//! One pass per game tick: locate the viewer, dim what was bright, rebuild
//! the viewable index, scan all eight octants and relight whatever was found.
//! This is the only code that writes `Viewable::luminosity`.

use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::index::ViewableIndex;
use super::octant::Octant;
use super::scan::{ScanLimits, Scanner};
use crate::ecs::{Luminosity, Player, Position, Viewable};

/// How a pass decides what is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewStrategy {
    /// Recursive octant shadow casting
    #[default]
    ShadowCast,
    /// Everything within a Chebyshev radius, walls ignored
    Square { radius: i32 },
}

impl ViewStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            ViewStrategy::ShadowCast => "shadow casting",
            ViewStrategy::Square { .. } => "square",
        }
    }
}

/// Summary of a single pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassReport {
    /// Where the viewer stood, if there was one
    pub origin: Option<Position>,
    /// Length of the new seen set (duplicates included)
    pub seen: usize,
    /// Viewables that dropped from bright to dim or hidden
    pub dimmed: usize,
}

/// Owns the seen set carried from one pass to the next
#[derive(Debug, Clone, Default)]
pub struct VisionSystem {
    seen: Vec<Entity>,
    strategy: ViewStrategy,
    scanner: Scanner,
}

impl VisionSystem {
    pub fn new(strategy: ViewStrategy, limits: ScanLimits) -> Self {
        Self {
            seen: Vec::new(),
            strategy,
            scanner: Scanner::new(limits),
        }
    }

    pub fn strategy(&self) -> ViewStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: ViewStrategy) {
        log::info!("Vision strategy: {}", strategy.name());
        self.strategy = strategy;
    }

    /// Viewables found by the most recent pass, in discovery order
    pub fn seen(&self) -> &[Entity] {
        &self.seen
    }

    /// Position of the first entity with `Player`, `Position` and `Viewable`
    pub fn viewer_position(world: &World) -> Option<Position> {
        world
            .query::<(&Position, &Player, &Viewable)>()
            .iter()
            .next()
            .map(|(_, (pos, _, _))| *pos)
    }

    /// Run one full pass, updating luminosity in place
    pub fn run<B: Bounds + ?Sized>(&mut self, world: &mut World, bounds: &B) -> PassReport {
        let origin = Self::viewer_position(world);
        let dimmed = self.dim_seen(world);

        self.seen = match origin {
            Some(origin) => match self.strategy {
                ViewStrategy::ShadowCast => self.shadow_cast(world, origin, bounds),
                ViewStrategy::Square { radius } => Self::square_viewshed(world, origin, radius),
            },
            None => {
                log::warn!("No viewer found; visibility pass skipped");
                Vec::new()
            }
        };

        self.relight(world);

        let report = PassReport {
            origin,
            seen: self.seen.len(),
            dimmed,
        };
        log::debug!(
            "Visibility pass ({}) from {:?}: {} seen, {} dimmed",
            self.strategy.name(),
            report.origin,
            report.seen,
            report.dimmed
        );
        report
    }

    /// Bright viewables from the last pass fall back to dim (terrain) or hidden
    fn dim_seen(&self, world: &mut World) -> usize {
        let mut dimmed = 0;
        for &entity in &self.seen {
            // Entities despawned since the last pass are simply gone
            if let Ok(mut viewable) = world.get::<&mut Viewable>(entity) {
                if viewable.luminosity == Luminosity::Bright {
                    let terrain = viewable.terrain;
                    viewable.luminosity = viewable.luminosity.dimmed(terrain);
                    dimmed += 1;
                }
            }
        }
        dimmed
    }

    fn relight(&self, world: &mut World) {
        for &entity in &self.seen {
            if let Ok(mut viewable) = world.get::<&mut Viewable>(entity) {
                viewable.luminosity = Luminosity::Bright;
            }
        }
    }

    fn shadow_cast<B: Bounds + ?Sized>(
        &self,
        world: &World,
        origin: Position,
        bounds: &B,
    ) -> Vec<Entity> {
        let index = ViewableIndex::from_world(world);

        // The viewer's own cell is always lit
        let mut seen: Vec<Entity> = index
            .get(origin.x, origin.y)
            .iter()
            .map(|v| v.entity)
            .collect();
        for octant in Octant::ALL {
            seen.extend(self.scanner.scan(octant, origin, &index, None, bounds));
        }
        seen
    }

    /// Lights everything within `radius`; anything else loses its light here
    /// rather than in the dim step.
    fn square_viewshed(world: &mut World, origin: Position, radius: i32) -> Vec<Entity> {
        let mut seen = Vec::new();
        for (entity, (pos, viewable)) in world.query_mut::<(&Position, &mut Viewable)>() {
            if pos.chebyshev_distance(&origin) <= radius {
                seen.push(entity);
            } else if !viewable.terrain {
                viewable.luminosity = Luminosity::Hidden;
            } else if viewable.luminosity == Luminosity::Bright {
                viewable.luminosity = Luminosity::Dim;
            }
        }
        seen
    }
}
