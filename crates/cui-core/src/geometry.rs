//! Plain geometry values shared across the crate.
//!
//! Everything in-process is numeric; the space-separated wire strings
//! (`"x y"`) are parsed once at the persistence boundary (see `wire`).

use serde::{Deserialize, Serialize};

/// A 2D point / vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle: origin + size.
///
/// Width and height may legitimately come out zero or negative from a
/// misconfigured transform; nothing here clamps or rejects that.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Inclusive containment test on all four edges.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    /// The four corners, ordered to pair with [`Handle::CORNERS`]:
    /// min, (max x, min y), (min x, max y), max.
    ///
    /// [`Handle::CORNERS`]: crate::anchors::Handle::CORNERS
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.x, self.y),
            Vec2::new(self.x + self.width, self.y),
            Vec2::new(self.x, self.y + self.height),
            Vec2::new(self.x + self.width, self.y + self.height),
        ]
    }

    /// The four edge midpoints, ordered to pair with [`Handle::EDGES`].
    ///
    /// [`Handle::EDGES`]: crate::anchors::Handle::EDGES
    pub fn edge_midpoints(&self) -> [Vec2; 4] {
        let cx = self.x + self.width / 2.0;
        let cy = self.y + self.height / 2.0;
        [
            Vec2::new(cx, self.y),
            Vec2::new(self.x + self.width, cy),
            Vec2::new(cx, self.y + self.height),
            Vec2::new(self.x, cy),
        ]
    }
}
