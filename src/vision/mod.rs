//! Field of view
//!
//! Recursive octant shadow casting over a sparse per-cell index of viewables,
//! plus the luminosity bookkeeping that the renderer reads.

pub mod bounds;
pub mod index;
pub mod octant;
pub mod scan;
pub mod slope;
pub mod system;

pub use bounds::{Bounds, ScreenBounds};
pub use index::{IndexedViewable, ViewableIndex};
pub use octant::{Octant, OctantRays};
pub use scan::{scan, ScanLimits, Scanner};
pub use slope::{inverse_slope, slope, SlopeRange};
pub use system::{PassReport, ViewStrategy, VisionSystem};
