//! Vidstage - single-slot media canvas library
//!
//! Re-exports all modules for use by binary targets.

pub mod app;
pub mod config;
pub mod core;
pub mod media;
pub mod widgets;

// Re-export commonly used types
pub use app::VidstageApp;
pub use core::event_bus::{BoxedEvent, EventBus, downcast_event};
pub use core::player::{Player, TimeWindow};
pub use media::{MediaAsset, MediaKind, MediaPayload, MediaSlot};
pub use widgets::canvas::FrameRect;
