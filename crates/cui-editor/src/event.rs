//! Pointer events, for hosts that prefer feeding an event stream over
//! calling the session methods directly.

use crate::session::EditorSession;
use cui_core::model::Canvas;

/// A pointer event in editor-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
}

impl EditorSession {
    /// Dispatch one pointer event.
    pub fn handle(&mut self, canvas: &mut Canvas, event: PointerEvent) {
        match event {
            PointerEvent::Down { x, y } => self.pointer_down(canvas, x, y),
            PointerEvent::Move { x, y } => self.pointer_move(canvas, x, y),
            PointerEvent::Up => self.pointer_up(),
        }
    }
}
