//! Octant shadow-casting scan
//!
//! Walks one octant ring by ring from a viewer, collecting every viewable it
//! passes over. A ring is finished once an occluder has been met and the
//! sweep reaches the centre line. In octant 1 a wall also starts a narrowed
//! sub-scan rooted just beyond the wall's outer edge.

use hecs::Entity;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::index::ViewableIndex;
use super::octant::Octant;
use super::slope::{inverse_slope, slope, SlopeRange};
use crate::ecs::Position;

/// Ceilings that keep a scan finite on pathological layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanLimits {
    /// Rings walked by a single call before it gives up
    pub max_rings: i32,
    /// Deepest allowed nesting of sub-scans
    pub max_depth: u32,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            max_rings: 512,
            max_depth: 64,
        }
    }
}

/// Runs octant scans under a fixed set of limits
#[derive(Debug, Clone, Copy, Default)]
pub struct Scanner {
    limits: ScanLimits,
}

impl Scanner {
    pub fn new(limits: ScanLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> ScanLimits {
        self.limits
    }

    /// Scan `octant` from `origin`, returning viewables in discovery order.
    ///
    /// Leaving the grid ends the scan. With a `slope_range`, cells whose
    /// slope from the origin falls outside it are skipped.
    pub fn scan<B: Bounds + ?Sized>(
        &self,
        octant: Octant,
        origin: Position,
        index: &ViewableIndex,
        slope_range: Option<SlopeRange>,
        bounds: &B,
    ) -> Vec<Entity> {
        let mut seen = Vec::new();
        self.scan_into(octant, origin, index, slope_range, false, 0, bounds, &mut seen);
        seen
    }

    #[allow(clippy::too_many_arguments)]
    fn scan_into<B: Bounds + ?Sized>(
        &self,
        octant: Octant,
        origin: Position,
        index: &ViewableIndex,
        mut slope_range: Option<SlopeRange>,
        mut wall_seen: bool,
        depth: u32,
        bounds: &B,
        seen: &mut Vec<Entity>,
    ) {
        for (i, j) in octant.rays() {
            if i.abs().max(j.abs()) > self.limits.max_rings {
                log::trace!(
                    "Octant {} scan from {:?} hit the ring ceiling",
                    octant.index(),
                    origin
                );
                break;
            }

            let (x, y) = (origin.x + i, origin.y + j);
            if bounds.out_of_bounds(x, y) {
                break;
            }

            if let Some(range) = slope_range {
                let a = (origin.x as f64, origin.y as f64);
                let b = (x as f64, y as f64);
                let m = if octant.sweeps_x() {
                    inverse_slope(a, b)
                } else {
                    slope(a, b)
                };
                if !range.contains(m) {
                    continue;
                }
            }

            let cell = index.get(x, y);
            seen.extend(cell.iter().map(|v| v.entity));

            let wall = cell.iter().any(|v| v.opaque);
            if wall && octant.index() == 1 {
                // The narrowed range also holds for the rest of this sweep
                slope_range = Some(SlopeRange::BEYOND_WALL);
                if depth < self.limits.max_depth {
                    self.scan_into(
                        octant,
                        Position::new(x - 1, y),
                        index,
                        slope_range,
                        true,
                        depth + 1,
                        bounds,
                        seen,
                    );
                } else {
                    log::trace!("Sub-scan at ({}, {}) skipped: depth ceiling", x, y);
                }
            }

            wall_seen |= wall;
            let swept = if octant.sweeps_x() { i } else { j };
            if swept == 0 && wall_seen {
                break;
            }
        }
    }
}

/// Scan with the default limits
pub fn scan<B: Bounds + ?Sized>(
    octant: Octant,
    origin: Position,
    index: &ViewableIndex,
    slope_range: Option<SlopeRange>,
    bounds: &B,
) -> Vec<Entity> {
    Scanner::default().scan(octant, origin, index, slope_range, bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vision::ScreenBounds;
    use hecs::World;

    fn octant(index: u8) -> Octant {
        Octant::new(index).unwrap()
    }

    /// Spawn one bare entity per cell and index it
    fn build(world: &mut World, cells: &[(i32, i32, bool)]) -> (ViewableIndex, Vec<Entity>) {
        let entities: Vec<Entity> = cells.iter().map(|_| world.spawn(())).collect();
        let index = ViewableIndex::from_entries(
            cells
                .iter()
                .zip(&entities)
                .map(|(&(x, y, opaque), &e)| (x, y, e, opaque)),
        );
        (index, entities)
    }

    #[test]
    fn test_scan_stops_at_first_occluder() {
        let mut world = World::new();
        let (index, e) = build(
            &mut world,
            &[
                (-2, 3, false),
                (-1, 3, false),
                (0, 3, false),
                (-1, 2, false),
                (-1, 1, true),
            ],
        );
        let bounds = |_x: i32, y: i32| y > 3;
        let seen = scan(octant(1), Position::new(0, 0), &index, None, &bounds);
        assert_eq!(seen, vec![e[4]]);
    }

    #[test]
    fn test_open_octant_until_bounds() {
        let mut world = World::new();
        let cells: Vec<(i32, i32, bool)> = (0..5)
            .flat_map(|y| (0..5).map(move |x| (x, y, false)))
            .collect();
        let (index, e) = build(&mut world, &cells);
        let at = |x: i32, y: i32| e[(y * 5 + x) as usize];

        let seen = scan(octant(2), Position::new(2, 2), &index, None, &ScreenBounds::new(5, 5));
        assert_eq!(seen, vec![at(3, 3), at(2, 3), at(4, 4), at(3, 4), at(2, 4)]);
    }

    #[test]
    fn test_out_of_bounds_is_hard_stop() {
        let mut world = World::new();
        let (index, _) = build(&mut world, &[(0, 1, false)]);
        // (-1, 1) is the first cell and lies off-grid; (0, 1) is never reached
        let seen = scan(octant(1), Position::new(0, 0), &index, None, &ScreenBounds::new(5, 5));
        assert!(seen.is_empty());
    }

    #[test]
    fn test_wall_on_centre_line_ends_scan() {
        let mut world = World::new();
        let (index, e) = build(&mut world, &[(1, 1, false), (1, 0, true), (2, 1, false)]);
        let bounds = |x: i32, y: i32| x > 5 || y.abs() > 5;
        let seen = scan(octant(3), Position::new(0, 0), &index, None, &bounds);
        assert_eq!(seen, vec![e[0], e[1]]);
    }

    #[test]
    fn test_wall_off_centre_finishes_ring() {
        let mut world = World::new();
        let (index, e) = build(&mut world, &[(1, 1, true), (0, 1, false), (0, 2, false)]);
        let bounds = |x: i32, y: i32| x.abs() > 5 || y > 5;
        let seen = scan(octant(2), Position::new(0, 0), &index, None, &bounds);
        assert_eq!(seen, vec![e[0], e[1]]);
    }

    #[test]
    fn test_octant_one_sees_past_wall_edge() {
        let mut world = World::new();
        let (index, e) = build(&mut world, &[(-1, 1, true), (-2, 2, false)]);
        let bounds = |_x: i32, y: i32| y > 3;
        let seen = scan(octant(1), Position::new(0, 0), &index, None, &bounds);
        assert_eq!(seen, vec![e[0], e[1]]);

        // Without recursion the cell behind the wall edge stays unseen
        let shallow = Scanner::new(ScanLimits {
            max_depth: 0,
            ..ScanLimits::default()
        });
        let seen = shallow.scan(octant(1), Position::new(0, 0), &index, None, &bounds);
        assert_eq!(seen, vec![e[0]]);
    }

    #[test]
    fn test_other_octants_do_not_recurse() {
        let mut world = World::new();
        // Mirror of the octant 1 layout into octant 2
        let (index, e) = build(&mut world, &[(1, 1, true), (2, 2, false)]);
        let bounds = |_x: i32, y: i32| y > 3;
        let seen = scan(octant(2), Position::new(0, 0), &index, None, &bounds);
        assert_eq!(seen, vec![e[0]]);
    }

    #[test]
    fn test_slope_range_skips_cells() {
        let mut world = World::new();
        let (index, e) = build(&mut world, &[(1, 1, false), (1, 0, false), (2, 1, false)]);
        let bounds = |x: i32, _y: i32| x > 2;
        let range = Some(SlopeRange::new(0.0, 0.5));
        let seen = scan(octant(3), Position::new(0, 0), &index, range, &bounds);
        assert_eq!(seen, vec![e[1], e[2]]);
    }

    #[test]
    fn test_ring_ceiling_terminates() {
        let mut world = World::new();
        let (index, e) = build(&mut world, &[(0, 3, false), (0, 10, false)]);
        let never = |_x: i32, _y: i32| false;
        let scanner = Scanner::new(ScanLimits {
            max_rings: 3,
            ..ScanLimits::default()
        });
        let seen = scanner.scan(octant(2), Position::new(0, 0), &index, None, &never);
        assert_eq!(seen, vec![e[0]]);
    }
}
