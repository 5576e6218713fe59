//! Events emitted by the canvas and sidebar for media and frame changes.

use crate::media::MediaPayload;

use super::frame::FrameRect;

/// Load media into the canvas slot. Carries every payload from the drop or
/// pick; the slot takes the first and ignores the rest.
#[derive(Clone, Debug)]
pub struct LoadMediaEvent(pub Vec<MediaPayload>);

/// Remove the current media and release its resources.
#[derive(Clone, Copy, Debug)]
pub struct RemoveMediaEvent;

/// Replace the whole frame rect (drag/resize gestures).
#[derive(Clone, Copy, Debug)]
pub struct SetFrameRectEvent(pub FrameRect);

/// Set frame dimensions from the sidebar steppers, keeping the origin.
#[derive(Clone, Copy, Debug)]
pub struct SetFrameSizeEvent {
    pub width: f32,
    pub height: f32,
}
