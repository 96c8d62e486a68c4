//! Shape positions for the renderer, plus element and handle hit testing.
//!
//! Marker positions and handle hit tests share one derivation — the
//! element rectangle and anchor box run through [`Rect::corners`] /
//! [`Rect::edge_midpoints`] — so the drawn handles are exactly the
//! clickable points.

use crate::anchors::{Handle, ResizeMode};
use crate::geometry::{Rect, Vec2};
use crate::id::ElementId;
use crate::model::Canvas;
use petgraph::graph::NodeIndex;

/// Pointer proximity for a handle hit, per axis. Tunable; the hit box is
/// a square, not a circle.
pub const HANDLE_HIT_RADIUS: f32 = 10.0;

/// Handle points for a selected element, four families of four.
///
/// The field order mirrors the renderer's color coding: anchor corners
/// blue, element corners red, anchor edges green, element edges yellow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Markers {
    pub anchor_corners: [Vec2; 4],
    pub element_corners: [Vec2; 4],
    pub anchor_edges: [Vec2; 4],
    pub element_edges: [Vec2; 4],
}

/// One element's renderable geometry. `anchor` and `markers` are present
/// only for the selected element.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapePosition {
    pub id: ElementId,
    pub rect: Rect,
    pub visible: bool,
    pub selected: bool,
    pub anchor: Option<Rect>,
    pub markers: Option<Markers>,
}

/// A handle bound by a pointer-down, fed back into
/// [`RectTransform::resize`](crate::anchors::RectTransform::resize).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveHandle {
    pub element: ElementId,
    pub handle: Handle,
    pub mode: ResizeMode,
    pub is_edge: bool,
}

/// Compute one element's shape position.
pub fn shape_position(
    canvas: &Canvas,
    idx: NodeIndex,
    selected: Option<ElementId>,
) -> ShapePosition {
    let element = &canvas.graph[idx];
    let rect = canvas.resolved_rect(idx);
    let is_selected = selected == Some(element.id);

    let (anchor, markers) = if is_selected {
        let anchor = element.transform.anchor_rect(canvas.parent_rect(idx));
        let markers = Markers {
            anchor_corners: anchor.corners(),
            element_corners: rect.corners(),
            anchor_edges: anchor.edge_midpoints(),
            element_edges: rect.edge_midpoints(),
        };
        (Some(anchor), Some(markers))
    } else {
        (None, None)
    };

    ShapePosition {
        id: element.id,
        rect,
        visible: element.visible,
        selected: is_selected,
        anchor,
        markers,
    }
}

/// Walk the whole tree top-down and emit shape positions in paint order:
/// parents before children, siblings in insertion order.
pub fn build_shape_positions(canvas: &Canvas, selected: Option<ElementId>) -> Vec<ShapePosition> {
    let mut out = Vec::new();
    for child in canvas.children(canvas.root) {
        collect_shapes(canvas, child, selected, &mut out);
    }
    log::trace!("built {} shape positions", out.len());
    out
}

fn collect_shapes(
    canvas: &Canvas,
    idx: NodeIndex,
    selected: Option<ElementId>,
    out: &mut Vec<ShapePosition>,
) {
    out.push(shape_position(canvas, idx, selected));
    for child in canvas.children(idx) {
        collect_shapes(canvas, child, selected, out);
    }
}

/// Find the topmost visible element at `(x, y)`, or `None` for the
/// background.
///
/// Root children are tested in reverse insertion order (last added sits
/// on top); within a subtree, children win over their ancestors when
/// rectangles overlap. An invisible element hides its whole subtree.
pub fn find_element_at(canvas: &Canvas, x: f32, y: f32) -> Option<ElementId> {
    let top_level = canvas.children(canvas.root);
    top_level
        .iter()
        .rev()
        .find_map(|&idx| hit_element(canvas, idx, x, y))
}

fn hit_element(canvas: &Canvas, idx: NodeIndex, x: f32, y: f32) -> Option<ElementId> {
    let element = &canvas.graph[idx];
    if !element.visible {
        return None;
    }

    for child in canvas.children(idx) {
        if let Some(hit) = hit_element(canvas, child, x, y) {
            return Some(hit);
        }
    }

    if canvas.resolved_rect(idx).contains(x, y) {
        return Some(element.id);
    }

    None
}

/// Find the resize handle at `(x, y)` on the selected element, if any.
///
/// Only the selected element's handles can match, and the traversal prunes
/// invisible subtrees. Per element, the priority order is: anchor-box
/// corners, anchor-box edge midpoints, element corners, element edge
/// midpoints, then the color-coded auxiliary families — anchor-mode
/// handles win over offset-mode handles at the same screen position.
pub fn find_handle_at(
    canvas: &Canvas,
    selected: Option<ElementId>,
    x: f32,
    y: f32,
) -> Option<ActiveHandle> {
    let selected = selected?;
    let top_level = canvas.children(canvas.root);
    top_level
        .iter()
        .rev()
        .find_map(|&idx| hit_handle(canvas, idx, selected, x, y))
}

fn hit_handle(
    canvas: &Canvas,
    idx: NodeIndex,
    selected: ElementId,
    x: f32,
    y: f32,
) -> Option<ActiveHandle> {
    let element = &canvas.graph[idx];
    if !element.visible {
        return None;
    }

    if element.id == selected
        && let Some(markers) = shape_position(canvas, idx, Some(selected)).markers
    {
        let families = [
            (markers.anchor_corners, Handle::CORNERS, ResizeMode::Anchor, false),
            (markers.anchor_edges, Handle::EDGES, ResizeMode::Anchor, true),
            (markers.element_corners, Handle::CORNERS, ResizeMode::Offset, false),
            (markers.element_edges, Handle::EDGES, ResizeMode::Offset, true),
        ];
        for (points, handles, mode, is_edge) in families {
            for (point, handle) in points.iter().zip(handles) {
                if near(*point, x, y) {
                    return Some(ActiveHandle {
                        element: selected,
                        handle,
                        mode,
                        is_edge,
                    });
                }
            }
        }

        // Auxiliary fallback: each color family maps to one fixed corner
        // handle (blue, red, green, yellow in that order). Positions
        // coincide with the primary tests above, so this only fires for
        // points the primaries rejected by ordering.
        let auxiliary = [
            (markers.anchor_corners, Handle::TopLeft),
            (markers.element_corners, Handle::TopRight),
            (markers.anchor_edges, Handle::BottomLeft),
            (markers.element_edges, Handle::BottomRight),
        ];
        for (points, handle) in auxiliary {
            if points.iter().any(|point| near(*point, x, y)) {
                return Some(ActiveHandle {
                    element: selected,
                    handle,
                    mode: ResizeMode::Anchor,
                    is_edge: false,
                });
            }
        }
    }

    for child in canvas.children(idx) {
        if let Some(hit) = hit_handle(canvas, child, selected, x, y) {
            return Some(hit);
        }
    }

    None
}

fn near(point: Vec2, x: f32, y: f32) -> bool {
    (point.x - x).abs() < HANDLE_HIT_RADIUS && (point.y - y).abs() < HANDLE_HIT_RADIUS
}
