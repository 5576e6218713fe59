//! Event handling for VidstageApp.

use eframe::egui;
use log::{info, trace};

use super::VidstageApp;
use crate::core::event_bus::downcast_event;
use crate::core::player_events::{SetWindowEndEvent, SetWindowStartEvent, TogglePlayEvent};
use crate::widgets::canvas::canvas_events::{
    LoadMediaEvent, RemoveMediaEvent, SetFrameRectEvent, SetFrameSizeEvent,
};

impl VidstageApp {
    /// Handle events from the event bus. Every state mutation the widgets
    /// request passes through here.
    pub fn handle_events(&mut self) {
        let events = self.event_bus.poll();
        for event in events {
            if let Some(e) = downcast_event::<LoadMediaEvent>(&event) {
                self.slot.submit(e.0.clone());
                continue;
            }
            if downcast_event::<RemoveMediaEvent>(&event).is_some() {
                // Removing the media also ends playback; a ticker with
                // nothing to show would keep requesting repaints.
                self.player
                    .stop(self.slot.asset_mut().and_then(|a| a.video_mut()));
                if let Some(asset) = self.slot.clear() {
                    info!("Removed media '{}'", asset.name());
                }
                continue;
            }
            if let Some(e) = downcast_event::<SetFrameRectEvent>(&event) {
                trace!("Frame rect set to {:?}", e.0);
                self.frame_rect = e.0;
                continue;
            }
            if let Some(e) = downcast_event::<SetFrameSizeEvent>(&event) {
                self.frame_rect.set_width(e.width);
                self.frame_rect.set_height(e.height);
                continue;
            }
            if downcast_event::<TogglePlayEvent>(&event).is_some() {
                if self.slot.has_media() {
                    self.player
                        .toggle_play(self.slot.asset_mut().and_then(|a| a.video_mut()));
                }
                continue;
            }
            if let Some(e) = downcast_event::<SetWindowStartEvent>(&event) {
                self.player.set_window_start(e.0);
                continue;
            }
            if let Some(e) = downcast_event::<SetWindowEndEvent>(&event) {
                self.player.set_window_end(e.0);
                continue;
            }

            trace!("Unhandled event: {}", event.type_name());
        }
    }

    /// Keyboard shortcuts. Space toggles playback.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Space)) && self.slot.has_media() {
            self.event_bus.emit(TogglePlayEvent);
        }
    }
}
