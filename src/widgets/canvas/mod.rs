//! Canvas widget: drop zone, media frame, drag/resize gestures.

pub mod canvas_events;
pub mod canvas_ui;
pub mod frame;
pub mod interaction;

pub use canvas_ui::CanvasState;
pub use frame::{FrameRect, ResizeDirection, MIN_FRAME_SIZE};
pub use interaction::Interaction;
