//! Pointer-gesture state machine: selection, dragging, handle resizing.
//!
//! One [`EditorSession`] exists per open document and is passed by
//! reference wherever selection or gesture state is read or mutated —
//! there is no global store. All coordinates are editor-space; any y-axis
//! flip between the host's pointer events and this space is the host's
//! concern.

use cui_core::anchors::ResizeMode;
use cui_core::geometry::Vec2;
use cui_core::id::ElementId;
use cui_core::model::Canvas;
use cui_core::shapes::{ActiveHandle, find_element_at, find_handle_at};

/// An in-progress drag of a whole element. `last` is the previously
/// observed pointer position; movement is applied delta by delta, not as
/// a distance from the gesture origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub element: ElementId,
    pub last: Vec2,
}

/// Selection and gesture state for one open document.
///
/// At most one of `dragging` / `resizing` is ever set; pointer-up clears
/// both. Selection is a single `Option` — selecting an element
/// structurally deselects every other one.
#[derive(Debug, Default)]
pub struct EditorSession {
    pub selected: Option<ElementId>,
    pub dragging: Option<DragState>,
    pub resizing: Option<ActiveHandle>,
    /// Suppress anchor-mode resizes. Checked in the move handler, not the
    /// hit test, so a disabled handle still binds but never mutates.
    pub disable_anchor: bool,
    /// Suppress offset-mode resizes; same checking point as
    /// `disable_anchor`.
    pub disable_offset: bool,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Programmatic selection (hierarchy panels, tests). Passing `None`
    /// deselects.
    pub fn select(&mut self, element: Option<ElementId>) {
        if self.selected != element {
            log::debug!("selection -> {element:?}");
        }
        self.selected = element;
    }

    /// Pointer pressed at `(x, y)`.
    ///
    /// Handles are tested first (they only exist on the selected
    /// element); then elements, topmost first; a background press clears
    /// the selection. Gesture state binds here and is released by
    /// [`pointer_up`](Self::pointer_up).
    pub fn pointer_down(&mut self, canvas: &Canvas, x: f32, y: f32) {
        if let Some(handle) = find_handle_at(canvas, self.selected, x, y) {
            log::debug!(
                "resize start: {:?}/{:?} on element {}",
                handle.handle,
                handle.mode,
                handle.element
            );
            self.resizing = Some(handle);
        } else if let Some(id) = find_element_at(canvas, x, y) {
            self.select(Some(id));
            self.dragging = Some(DragState {
                element: id,
                last: Vec2::new(x, y),
            });
        } else {
            self.select(None);
        }
    }

    /// Pointer moved to `(x, y)` while pressed.
    ///
    /// A move with nothing selected, with the bound element invisible or
    /// removed, or with the active mode disabled by policy, is a no-op —
    /// the gesture stays bound either way.
    pub fn pointer_move(&mut self, canvas: &mut Canvas, x: f32, y: f32) {
        if self.selected.is_none() {
            return;
        }

        if let Some(active) = self.resizing {
            let Some(idx) = canvas.get_by_id(active.element) else {
                return;
            };
            if !canvas.graph[idx].visible {
                return;
            }
            match active.mode {
                ResizeMode::Offset if self.disable_offset => return,
                ResizeMode::Anchor if self.disable_anchor => return,
                _ => {}
            }
            let parent = canvas.parent_rect(idx);
            canvas.graph[idx].transform.resize(
                active.handle,
                active.mode,
                active.is_edge,
                parent,
                Vec2::new(x, y),
            );
        } else if let Some(drag) = &mut self.dragging {
            let Some(idx) = canvas.get_by_id(drag.element) else {
                return;
            };
            if !canvas.graph[idx].visible {
                return;
            }
            let dx = x - drag.last.x;
            let dy = y - drag.last.y;
            canvas.graph[idx].transform.translate(dx, dy);
            drag.last = Vec2::new(x, y);
        }
    }

    /// Pointer released (or left the canvas). Ends any in-progress
    /// gesture; mutations already applied are kept.
    pub fn pointer_up(&mut self) {
        if self.dragging.is_some() || self.resizing.is_some() {
            log::debug!("gesture end");
        }
        self.dragging = None;
        self.resizing = None;
    }
}
