//! ECS Components
//!
//! Plain data records attached to entities in the `hecs` world.

use serde::{Deserialize, Serialize};

// ============================================================================
// Position
// ============================================================================

/// Position on the grid. Several entities may share one (terrain + occupant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance (allows diagonal)
    pub fn chebyshev_distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Position shifted by a relative offset
    pub fn offset(&self, dx: i32, dy: i32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }
}

// ============================================================================
// Visibility
// ============================================================================

/// Display state of a viewable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Luminosity {
    /// Currently seen
    Bright,
    /// Terrain remembered from an earlier pass
    Dim,
    /// Not drawn
    #[default]
    Hidden,
}

impl Luminosity {
    /// Whether the renderer should draw anything at all
    pub fn is_visible(&self) -> bool {
        !matches!(self, Luminosity::Hidden)
    }

    /// State after dropping out of view. Only terrain is remembered.
    pub fn dimmed(self, terrain: bool) -> Luminosity {
        match self {
            Luminosity::Bright if terrain => Luminosity::Dim,
            Luminosity::Bright => Luminosity::Hidden,
            other => other,
        }
    }
}

/// Something that can be seen, and may block sight through its cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Viewable {
    /// Blocks sight through its cell
    pub opaque: bool,
    /// Current display state, written only by the vision system
    pub luminosity: Luminosity,
    /// Permanent scenery; allowed to fade to `Dim`
    pub terrain: bool,
}

impl Viewable {
    /// Transparent scenery such as floor
    pub fn terrain() -> Self {
        Self {
            terrain: true,
            ..Self::default()
        }
    }

    /// Opaque scenery
    pub fn wall() -> Self {
        Self {
            opaque: true,
            terrain: true,
            ..Self::default()
        }
    }

    /// Transient occupant (player, creatures, items)
    pub fn occupant() -> Self {
        Self::default()
    }

    pub fn with_luminosity(mut self, luminosity: Luminosity) -> Self {
        self.luminosity = luminosity;
        self
    }
}

// ============================================================================
// Markers
// ============================================================================

/// Marks the entity that sight is computed from
#[derive(Debug, Clone, Copy, Default)]
pub struct Player;

/// Blocks movement into its cell
#[derive(Debug, Clone, Copy, Default)]
pub struct Impassable;

// ============================================================================
// Rendering
// ============================================================================

/// Visual representation of an entity
#[derive(Debug, Clone)]
pub struct Renderable {
    /// Character to display
    pub glyph: char,
    /// Foreground color (RGB)
    pub fg: (u8, u8, u8),
    /// Render order (higher = on top)
    pub render_order: i32,
}

impl Renderable {
    pub fn new(glyph: char, fg: (u8, u8, u8)) -> Self {
        Self {
            glyph,
            fg,
            render_order: 0,
        }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.render_order = order;
        self
    }
}
