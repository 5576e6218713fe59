//! Application module - VidstageApp and related functionality.
//!
//! Submodules:
//! - `events` - event bus handling and keyboard input
//! - `run` - the per-frame eframe::App update loop

mod events;
mod run;

use crate::core::event_bus::EventBus;
use crate::core::player::Player;
use crate::media::MediaSlot;
use crate::widgets::canvas::{CanvasState, FrameRect};
use crate::widgets::sidebar::SidebarState;

/// Main application state: the single media slot, the playback engine and
/// the frame geometry, plus per-widget UI state.
pub struct VidstageApp {
    pub slot: MediaSlot,
    pub player: Player,
    pub frame_rect: FrameRect,
    pub canvas_state: CanvasState,
    pub sidebar_state: SidebarState,
    pub event_bus: EventBus,
}

impl VidstageApp {
    pub fn new() -> Self {
        Self {
            slot: MediaSlot::default(),
            player: Player::new(),
            frame_rect: FrameRect::default(),
            canvas_state: CanvasState::default(),
            sidebar_state: SidebarState::default(),
            event_bus: EventBus::new(),
        }
    }
}

impl Default for VidstageApp {
    fn default() -> Self {
        Self::new()
    }
}
