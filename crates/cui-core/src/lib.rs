pub mod anchors;
pub mod components;
pub mod emitter;
pub mod geometry;
pub mod id;
pub mod model;
pub mod project;
pub mod shapes;
pub mod wire;

pub use anchors::{Handle, MIN_ANCHOR_GAP, RectTransform, ResizeMode};
pub use geometry::{Rect, Vec2};
pub use id::ElementId;
pub use model::{Canvas, Element, ElementKind};
pub use shapes::{
    ActiveHandle, HANDLE_HIT_RADIUS, Markers, ShapePosition, build_shape_positions,
    find_element_at, find_handle_at,
};

// Re-export petgraph's node index so downstream crates don't need a
// direct dependency.
pub use petgraph::graph::NodeIndex;
