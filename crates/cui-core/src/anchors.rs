//! The anchor/offset rectangle model (CUI `RectTransform`).
//!
//! A child rectangle is described relative to its parent by two normalized
//! anchor points in [0, 1] plus two pixel offsets applied on top of the
//! anchor-derived corners. Resolution against a parent rectangle is pure;
//! interactive resize mutates the four vectors in place through eight
//! handles in two modes (anchor = fraction of the parent, offset = fixed
//! pixels).

use crate::geometry::{Rect, Vec2};

/// Minimum separation kept between opposing anchors during anchor-mode
/// resize. Tunable; nothing else derives from it.
pub const MIN_ANCHOR_GAP: f32 = 0.01;

/// One of the eight resize handles: four corners and four edge midpoints.
///
/// Names follow the wire format's y-up convention; the resize math only
/// distinguishes the min and max side of each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Right,
    Bottom,
    Left,
}

impl Handle {
    /// Corner handles, in the order [`Rect::corners`] yields points.
    pub const CORNERS: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Edge handles, in the order [`Rect::edge_midpoints`] yields points.
    pub const EDGES: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    pub const fn is_edge(self) -> bool {
        matches!(self, Self::Top | Self::Right | Self::Bottom | Self::Left)
    }
}

/// Which vector pair a resize gesture mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeMode {
    /// Fractions of the parent rectangle; the element scales when the
    /// parent resizes.
    Anchor,
    /// Fixed pixels on top of the anchor-derived corners; independent of
    /// parent size.
    Offset,
}

/// Lower bound wins when the bounds cross — anchors may already be
/// inverted when a resize starts, and `f32::clamp` would panic on that.
fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    value.min(hi).max(lo)
}

/// The anchor+offset transform owned by every element.
#[derive(Debug, Clone, PartialEq)]
pub struct RectTransform {
    pub anchor_min: Vec2,
    pub anchor_max: Vec2,
    pub offset_min: Vec2,
    pub offset_max: Vec2,
}

impl Default for RectTransform {
    /// The editor's placement for a freshly created element.
    fn default() -> Self {
        Self {
            anchor_min: Vec2::new(0.1, 0.1),
            anchor_max: Vec2::new(0.2, 0.2),
            offset_min: Vec2::new(10.0, 10.0),
            offset_max: Vec2::new(-10.0, -10.0),
        }
    }
}

impl RectTransform {
    pub const fn new(anchor_min: Vec2, anchor_max: Vec2, offset_min: Vec2, offset_max: Vec2) -> Self {
        Self {
            anchor_min,
            anchor_max,
            offset_min,
            offset_max,
        }
    }

    /// Full-stretch transform: tracks the parent rectangle exactly.
    pub const fn stretch() -> Self {
        Self {
            anchor_min: Vec2::ZERO,
            anchor_max: Vec2::new(1.0, 1.0),
            offset_min: Vec2::ZERO,
            offset_max: Vec2::ZERO,
        }
    }

    /// Resolve the absolute rectangle against a resolved parent rectangle.
    ///
    /// Pure: no state is read besides the four vectors, nothing is
    /// mutated. Degenerate results (zero or negative size) are returned
    /// as-is.
    pub fn resolve(&self, parent: Rect) -> Rect {
        Rect {
            x: self.anchor_min.x * parent.width + self.offset_min.x + parent.x,
            y: self.anchor_min.y * parent.height + self.offset_min.y + parent.y,
            width: (self.anchor_max.x - self.anchor_min.x) * parent.width
                + (self.offset_max.x - self.offset_min.x),
            height: (self.anchor_max.y - self.anchor_min.y) * parent.height
                + (self.offset_max.y - self.offset_min.y),
        }
    }

    /// The anchor box: the anchor fractions mapped into the parent
    /// rectangle, without offsets.
    ///
    /// Marker generation and handle hit testing both use this single
    /// derivation, so drawn handles are exactly the clickable points.
    pub fn anchor_rect(&self, parent: Rect) -> Rect {
        Rect {
            x: self.anchor_min.x * parent.width + parent.x,
            y: self.anchor_min.y * parent.height + parent.y,
            width: (self.anchor_max.x - self.anchor_min.x) * parent.width,
            height: (self.anchor_max.y - self.anchor_min.y) * parent.height,
        }
    }

    /// Translate by a pixel delta: both offsets shift, anchors stay, so
    /// the resolved size is unchanged.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.offset_min.x += dx;
        self.offset_min.y += dy;
        self.offset_max.x += dx;
        self.offset_max.y += dy;
    }

    /// Apply one step of an interactive resize.
    ///
    /// `current` is the pointer position in canvas space; it is converted
    /// to parent-local space here. `is_edge` comes from the hit test along
    /// with the handle; a corner handle flagged as an edge (or the
    /// reverse) falls through as a silent no-op.
    pub fn resize(
        &mut self,
        handle: Handle,
        mode: ResizeMode,
        is_edge: bool,
        parent: Rect,
        current: Vec2,
    ) {
        let local = Vec2::new(current.x - parent.x, current.y - parent.y);
        match (is_edge, mode) {
            (true, ResizeMode::Offset) => self.resize_edge_offset(handle, parent, local),
            (true, ResizeMode::Anchor) => self.resize_edge_anchor(handle, parent, local),
            (false, ResizeMode::Offset) => self.resize_corner_offset(handle, parent, local),
            (false, ResizeMode::Anchor) => self.resize_corner_anchor(handle, parent, local),
        }
    }

    fn resize_edge_offset(&mut self, handle: Handle, parent: Rect, local: Vec2) {
        match handle {
            Handle::Top => self.offset_min.y = local.y - self.anchor_min.y * parent.height,
            Handle::Right => self.offset_max.x = local.x - self.anchor_max.x * parent.width,
            Handle::Bottom => self.offset_max.y = local.y - self.anchor_max.y * parent.height,
            Handle::Left => self.offset_min.x = local.x - self.anchor_min.x * parent.width,
            _ => {}
        }
    }

    fn resize_edge_anchor(&mut self, handle: Handle, parent: Rect, local: Vec2) {
        let rel_x = local.x / parent.width;
        let rel_y = local.y / parent.height;
        match handle {
            Handle::Top => {
                self.anchor_min.y = clamp(rel_y, 0.0, self.anchor_max.y - MIN_ANCHOR_GAP);
            }
            Handle::Right => {
                self.anchor_max.x = clamp(rel_x, self.anchor_min.x + MIN_ANCHOR_GAP, 1.0);
            }
            Handle::Bottom => {
                self.anchor_max.y = clamp(rel_y, self.anchor_min.y + MIN_ANCHOR_GAP, 1.0);
            }
            Handle::Left => {
                self.anchor_min.x = clamp(rel_x, 0.0, self.anchor_max.x - MIN_ANCHOR_GAP);
            }
            _ => {}
        }
    }

    fn resize_corner_offset(&mut self, handle: Handle, parent: Rect, local: Vec2) {
        let anchor_min_x = self.anchor_min.x * parent.width;
        let anchor_min_y = self.anchor_min.y * parent.height;
        let anchor_max_x = self.anchor_max.x * parent.width;
        let anchor_max_y = self.anchor_max.y * parent.height;
        match handle {
            Handle::TopLeft => {
                self.offset_min = Vec2::new(local.x - anchor_min_x, local.y - anchor_min_y);
            }
            Handle::TopRight => {
                self.offset_max.x = local.x - anchor_max_x;
                self.offset_min.y = local.y - anchor_min_y;
            }
            Handle::BottomLeft => {
                self.offset_min.x = local.x - anchor_min_x;
                self.offset_max.y = local.y - anchor_max_y;
            }
            Handle::BottomRight => {
                self.offset_max = Vec2::new(local.x - anchor_max_x, local.y - anchor_max_y);
            }
            _ => {}
        }
    }

    fn resize_corner_anchor(&mut self, handle: Handle, parent: Rect, local: Vec2) {
        let rel_x = local.x / parent.width;
        let rel_y = local.y / parent.height;
        match handle {
            Handle::TopLeft => {
                self.anchor_min = Vec2::new(
                    clamp(rel_x, 0.0, self.anchor_max.x - MIN_ANCHOR_GAP),
                    clamp(rel_y, 0.0, self.anchor_max.y - MIN_ANCHOR_GAP),
                );
            }
            Handle::TopRight => {
                self.anchor_max.x = clamp(rel_x, self.anchor_min.x + MIN_ANCHOR_GAP, 1.0);
                self.anchor_min.y = clamp(rel_y, 0.0, self.anchor_max.y - MIN_ANCHOR_GAP);
            }
            Handle::BottomLeft => {
                self.anchor_min.x = clamp(rel_x, 0.0, self.anchor_max.x - MIN_ANCHOR_GAP);
                self.anchor_max.y = clamp(rel_y, self.anchor_min.y + MIN_ANCHOR_GAP, 1.0);
            }
            Handle::BottomRight => {
                self.anchor_max = Vec2::new(
                    clamp(rel_x, self.anchor_min.x + MIN_ANCHOR_GAP, 1.0),
                    clamp(rel_y, self.anchor_min.y + MIN_ANCHOR_GAP, 1.0),
                );
            }
            _ => {}
        }
    }
}
