//! Octant ray generation
//!
//! Octant indices work like this:
//!
//! ```text
//! \111|222/
//! 8\11|22/3
//! 88\1|2/33
//! 888\|/333
//! ----@----
//! 777/|\444
//! 77/6|5\44
//! 7/66|55\4
//! /666|555\
//! ```
//!
//! Each octant is swept ring by ring. Ring `k` holds the `k + 1` cells at
//! distance `k` along the primary axis, walked from the outer edge toward
//! the centre line.

/// One of the eight 45° wedges around a viewpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Octant(u8);

impl Octant {
    /// All octants in scan order
    pub const ALL: [Octant; 8] = [
        Octant(1),
        Octant(2),
        Octant(3),
        Octant(4),
        Octant(5),
        Octant(6),
        Octant(7),
        Octant(8),
    ];

    /// Octant for an index in `1..=8`
    pub fn new(index: u8) -> Option<Octant> {
        (1..=8).contains(&index).then_some(Octant(index))
    }

    pub fn index(&self) -> u8 {
        self.0
    }

    /// True when the swept coordinate is `x` (primary axis fixed on `y`)
    pub fn sweeps_x(&self) -> bool {
        matches!(self.0, 1 | 2 | 5 | 6)
    }

    /// Offset of the `i`-th swept cell (`i` runs `k..=0`) in ring `k`
    fn offset(&self, k: i32, i: i32) -> (i32, i32) {
        match self.0 {
            1 => (-i, k),
            2 => (i, k),
            3 => (k, i),
            4 => (k, -i),
            5 => (i, -k),
            6 => (-i, -k),
            7 => (-k, -i),
            _ => (-k, i),
        }
    }

    /// Lazy, endless ray sequence for this octant
    pub fn rays(&self) -> OctantRays {
        OctantRays {
            octant: Some(*self),
            ring: 1,
            step: 1,
        }
    }
}

/// Endless sequence of `(dx, dy)` offsets sweeping one octant outward.
///
/// A clone continues from the same point; call [`OctantRays::new`] to start over.
#[derive(Debug, Clone)]
pub struct OctantRays {
    octant: Option<Octant>,
    ring: i32,
    /// Swept coordinate of the next cell, counting down from `ring` to 0
    step: i32,
}

impl OctantRays {
    /// Rays for octant `index`. Any index outside `1..=8` yields nothing.
    pub fn new(index: u8) -> Self {
        match Octant::new(index) {
            Some(octant) => octant.rays(),
            None => Self {
                octant: None,
                ring: 1,
                step: 1,
            },
        }
    }
}

impl Iterator for OctantRays {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        let octant = self.octant?;
        let offset = octant.offset(self.ring, self.step);
        if self.step == 0 {
            self.ring += 1;
            self.step = self.ring;
        } else {
            self.step -= 1;
        }
        Some(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first(index: u8, n: usize) -> Vec<(i32, i32)> {
        OctantRays::new(index).take(n).collect()
    }

    #[test]
    fn test_octant_rays_table() {
        assert_eq!(first(1, 5), vec![(-1, 1), (0, 1), (-2, 2), (-1, 2), (0, 2)]);
        assert_eq!(first(2, 5), vec![(1, 1), (0, 1), (2, 2), (1, 2), (0, 2)]);
        assert_eq!(first(3, 5), vec![(1, 1), (1, 0), (2, 2), (2, 1), (2, 0)]);
        assert_eq!(first(4, 5), vec![(1, -1), (1, 0), (2, -2), (2, -1), (2, 0)]);
        assert_eq!(first(5, 5), vec![(1, -1), (0, -1), (2, -2), (1, -2), (0, -2)]);
        assert_eq!(first(6, 5), vec![(-1, -1), (0, -1), (-2, -2), (-1, -2), (0, -2)]);
        assert_eq!(first(7, 5), vec![(-1, -1), (-1, 0), (-2, -2), (-2, -1), (-2, 0)]);
        assert_eq!(first(8, 5), vec![(-1, 1), (-1, 0), (-2, 2), (-2, 1), (-2, 0)]);
    }

    #[test]
    fn test_rings_fully_traversed() {
        // Rings 1..=10 hold 2 + 3 + ... + 11 cells
        let total: usize = (1..=10).map(|k| k + 1).sum();
        for octant in Octant::ALL {
            let rays: Vec<_> = octant.rays().take(total).collect();
            let last = *rays.last().unwrap();
            let k = last.0.abs().max(last.1.abs());
            assert_eq!(k, 10);
            // Each ring ends on the centre line
            if octant.sweeps_x() {
                assert_eq!(last.0, 0);
            } else {
                assert_eq!(last.1, 0);
            }
        }
    }

    #[test]
    fn test_ring_first_offsets() {
        for k in 1..20 {
            let skip: usize = (1..k).map(|r| r as usize + 1).sum();
            let mut rays = OctantRays::new(3).skip(skip);
            assert_eq!(rays.next(), Some((k, k)));
            assert_eq!(rays.next(), Some((k, k - 1)));
        }
    }

    #[test]
    fn test_invalid_octant_is_empty() {
        assert_eq!(OctantRays::new(0).next(), None);
        assert_eq!(OctantRays::new(9).next(), None);
        assert!(Octant::new(9).is_none());
    }

    #[test]
    fn test_rays_restartable() {
        let rays = OctantRays::new(5);
        let a: Vec<_> = rays.clone().take(7).collect();
        let b: Vec<_> = rays.take(7).collect();
        assert_eq!(a, b);
    }
}
