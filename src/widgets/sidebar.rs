//! Left sidebar: edit controls for the frame and the playback window.
//!
//! Steppers write through events so every change funnels into the same
//! invariant-preserving setters the gestures use. Crop and Elements are
//! placeholder tabs.

use eframe::egui;

use crate::config;
use crate::core::player::Player;
use crate::core::player_events::{SetWindowEndEvent, SetWindowStartEvent, TogglePlayEvent};
use crate::media::MediaSlot;
use crate::widgets::actions::ActionQueue;
use crate::widgets::canvas::canvas_events::{RemoveMediaEvent, SetFrameSizeEvent};
use crate::widgets::canvas::{FrameRect, MIN_FRAME_SIZE};

pub type SidebarActions = ActionQueue;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarTab {
    #[default]
    Edit,
    Crop,
    Elements,
}

#[derive(Default)]
pub struct SidebarState {
    pub tab: SidebarTab,
}

pub fn render(
    ctx: &egui::Context,
    state: &mut SidebarState,
    slot: &MediaSlot,
    frame_rect: &FrameRect,
    player: &Player,
) -> SidebarActions {
    let mut actions = SidebarActions::default();

    egui::SidePanel::left("sidebar")
        .exact_width(config::SIDEBAR_WIDTH)
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut state.tab, SidebarTab::Edit, "Edit");
                ui.selectable_value(&mut state.tab, SidebarTab::Crop, "Crop");
                ui.selectable_value(&mut state.tab, SidebarTab::Elements, "Elements");
            });
            ui.separator();

            match state.tab {
                SidebarTab::Edit => render_edit_tab(ui, slot, frame_rect, player, &mut actions),
                SidebarTab::Crop => {
                    ui.label("Crop tools coming later.");
                }
                SidebarTab::Elements => {
                    ui.label("Element library coming later.");
                }
            }
        });

    actions
}

fn render_edit_tab(
    ui: &mut egui::Ui,
    slot: &MediaSlot,
    frame_rect: &FrameRect,
    player: &Player,
    actions: &mut SidebarActions,
) {
    let has_media = slot.has_media();

    ui.label("Frame size");
    let mut width = frame_rect.width;
    let mut height = frame_rect.height;
    ui.horizontal(|ui| {
        ui.label("W");
        let w_changed = ui
            .add(
                egui::DragValue::new(&mut width)
                    .range(MIN_FRAME_SIZE..=config::MAX_FRAME_WIDTH)
                    .speed(10.0)
                    .suffix(" pt"),
            )
            .changed();
        ui.label("H");
        let h_changed = ui
            .add(
                egui::DragValue::new(&mut height)
                    .range(MIN_FRAME_SIZE..=config::MAX_FRAME_HEIGHT)
                    .speed(10.0)
                    .suffix(" pt"),
            )
            .changed();
        if w_changed || h_changed {
            actions.send(SetFrameSizeEvent { width, height });
        }
    });

    ui.separator();

    ui.label("Playback window");
    let window = player.window();
    let mut start = window.start();
    let mut end = window.end();
    ui.horizontal(|ui| {
        ui.label("Start");
        if ui
            .add(
                egui::DragValue::new(&mut start)
                    .range(0.0..=config::MAX_WINDOW_SECS)
                    .speed(0.1)
                    .fixed_decimals(1)
                    .suffix(" s"),
            )
            .changed()
        {
            actions.send(SetWindowStartEvent(start));
        }
        ui.label("End");
        if ui
            .add(
                egui::DragValue::new(&mut end)
                    .range(0.0..=config::MAX_WINDOW_SECS)
                    .speed(0.1)
                    .fixed_decimals(1)
                    .suffix(" s"),
            )
            .changed()
        {
            actions.send(SetWindowEndEvent(end));
        }
    });

    ui.separator();

    ui.horizontal(|ui| {
        let play_label = if player.is_playing() { "Pause" } else { "Play" };
        if ui
            .add_enabled(has_media, egui::Button::new(play_label))
            .clicked()
        {
            actions.send(TogglePlayEvent);
        }
        if ui
            .add_enabled(has_media, egui::Button::new("Remove"))
            .clicked()
        {
            actions.send(RemoveMediaEvent);
        }
    });

    if let Some(asset) = slot.asset() {
        ui.separator();
        ui.monospace(asset.name());
        ui.monospace(asset.kind().as_str());
        if let Some((w, h)) = asset.dimensions() {
            ui.monospace(format!("{}x{}", w, h));
        }
    }
}
