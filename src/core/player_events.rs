//! Playback events emitted by the transport bar and sidebar.

/// Toggle play/pause on the active media.
#[derive(Clone, Copy, Debug)]
pub struct TogglePlayEvent;

/// Set the playback window start (seconds). The window clamps the end up if
/// the new start passes it.
#[derive(Clone, Copy, Debug)]
pub struct SetWindowStartEvent(pub f64);

/// Set the playback window end (seconds), clamped down to the start.
#[derive(Clone, Copy, Debug)]
pub struct SetWindowEndEvent(pub f64);
