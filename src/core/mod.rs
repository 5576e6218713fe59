//! Core engine modules - playback and events, independent of UI layout.

pub mod event_bus;
pub mod player;
pub mod player_events;

// Re-exports for convenience
pub use event_bus::EventBus;
pub use player::{Player, TimeWindow};
