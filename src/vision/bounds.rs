//! Grid bounds supplied by the caller
//!
//! The vision core never looks at terminal dimensions itself; the host hands
//! it something implementing [`Bounds`] for every pass.

/// Reports whether an absolute cell lies outside the renderable grid
pub trait Bounds {
    fn out_of_bounds(&self, x: i32, y: i32) -> bool;
}

impl<F> Bounds for F
where
    F: Fn(i32, i32) -> bool,
{
    fn out_of_bounds(&self, x: i32, y: i32) -> bool {
        self(x, y)
    }
}

/// Rectangle anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenBounds {
    pub width: i32,
    pub height: i32,
}

impl ScreenBounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Bounds for ScreenBounds {
    fn out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || y < 0 || x >= self.width || y >= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_bounds() {
        let bounds = ScreenBounds::new(10, 5);
        assert!(!bounds.out_of_bounds(0, 0));
        assert!(!bounds.out_of_bounds(9, 4));
        assert!(bounds.out_of_bounds(10, 4));
        assert!(bounds.out_of_bounds(0, 5));
        assert!(bounds.out_of_bounds(-1, 0));
    }

    #[test]
    fn test_closure_bounds() {
        let below = |_x: i32, y: i32| y > 3;
        assert!(below.out_of_bounds(0, 4));
        assert!(!below.out_of_bounds(100, 3));
    }
}
