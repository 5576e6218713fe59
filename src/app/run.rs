//! Main application loop - eframe::App implementation.

use eframe::egui;
use log::info;

use crate::app::VidstageApp;
use crate::media::MediaPayload;
use crate::widgets;
use crate::widgets::canvas::canvas_events::LoadMediaEvent;

impl eframe::App for VidstageApp {
    /// Per-frame update.
    ///
    /// Flow:
    /// 1. Collect dropped files into a load event
    /// 2. Warm up the video port and run the playback ticker
    /// 3. Process queued events
    /// 4. Render chrome and canvas, feeding their actions back to the bus
    /// 5. Keyboard input, repaint while playing
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                let payloads: Vec<MediaPayload> = i
                    .raw
                    .dropped_files
                    .iter()
                    .map(MediaPayload::from_dropped)
                    .collect();
                info!("{} file(s) dropped", payloads.len());
                self.event_bus.emit(LoadMediaEvent(payloads));
            }
        });

        // The port reports can-play one frame after load; deferred seeks and
        // a rejected play request resolve here.
        if let Some(video) = self.slot.asset_mut().and_then(|a| a.video_mut()) {
            video.mark_can_play();
        }

        let time_changed = self
            .player
            .update(self.slot.asset_mut().and_then(|a| a.video_mut()));

        self.handle_events();

        widgets::header::render(ctx);

        let transport = widgets::status::render(ctx, &self.slot, &self.player);

        let sidebar = widgets::sidebar::render(
            ctx,
            &mut self.sidebar_state,
            &self.slot,
            &self.frame_rect,
            &self.player,
        );

        let media_visible = self.player.media_visible();
        let canvas = egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                widgets::canvas::canvas_ui::render(
                    ui,
                    &mut self.slot,
                    &self.frame_rect,
                    media_visible,
                    &mut self.canvas_state,
                )
            })
            .inner;

        self.handle_keyboard_input(ctx);

        let mut emitted = false;
        for actions in [transport, sidebar, canvas] {
            for event in actions.events {
                self.event_bus.emit_boxed(event);
                emitted = true;
            }
        }

        // Queued events are handled next frame; keep frames coming while
        // playing or while work is pending.
        if emitted || time_changed || self.player.is_playing() {
            ctx.request_repaint();
        }
    }
}
