pub mod event;
pub mod session;

pub use event::PointerEvent;
pub use session::{DragState, EditorSession};
