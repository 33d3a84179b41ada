//! Slopes between grid points, used to bound recursive sub-scans

/// `(y2 - y1) / (x2 - x1)`, or `+inf` when the points share a column
pub fn slope(a: (f64, f64), b: (f64, f64)) -> f64 {
    let ((x1, y1), (x2, y2)) = (a, b);
    if x1 == x2 {
        return f64::INFINITY;
    }
    (y2 - y1) / (x2 - x1)
}

/// `(x2 - x1) / (y2 - y1)`, or `+inf` when the points share a row
pub fn inverse_slope(a: (f64, f64), b: (f64, f64)) -> f64 {
    let ((x1, y1), (x2, y2)) = (a, b);
    if y1 == y2 {
        return f64::INFINITY;
    }
    (x2 - x1) / (y2 - y1)
}

/// Closed interval of slopes a sub-scan is restricted to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeRange {
    pub low: f64,
    pub high: f64,
}

impl SlopeRange {
    /// Gap examined past a wall's far edge in octant 1
    pub const BEYOND_WALL: SlopeRange = SlopeRange { low: 0.0, high: 0.5 };

    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, m: f64) -> bool {
        m >= self.low && m <= self.high
    }
}
