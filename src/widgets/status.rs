//! Bottom transport bar: play toggle, time readout, window progress.

use eframe::egui;

use crate::core::player::Player;
use crate::core::player_events::TogglePlayEvent;
use crate::media::MediaSlot;
use crate::widgets::actions::ActionQueue;

pub type TransportActions = ActionQueue;

/// Render transport bar at bottom of screen.
pub fn render(ctx: &egui::Context, slot: &MediaSlot, player: &Player) -> TransportActions {
    let mut actions = TransportActions::default();

    egui::TopBottomPanel::bottom("transport_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let icon = if player.is_playing() {
                "\u{23F8}"
            } else {
                "\u{25B6}"
            };
            if ui
                .add_enabled(slot.has_media(), egui::Button::new(icon))
                .clicked()
            {
                actions.send(TogglePlayEvent);
            }

            ui.monospace(format!("{:.1}s", player.current_time()));
            ui.separator();

            let window = player.window();
            ui.monospace(format!("{:.1}-{:.1}s", window.start(), window.end()));

            ui.add(
                egui::ProgressBar::new(player.progress())
                    .desired_width(ui.available_width() - 80.0),
            );

            if let Some(asset) = slot.asset() {
                ui.monospace(asset.kind().as_str());
            } else {
                ui.monospace("---");
            }
        });
    });

    actions
}
