//! Top header bar: app title and placeholder project actions.

use eframe::egui;
use log::info;

pub fn render(ctx: &egui::Context) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Vidstage");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                // Project persistence is not wired up yet
                if ui.button("Export").clicked() {
                    info!("Export requested (not implemented)");
                }
                if ui.button("Save").clicked() {
                    info!("Save requested (not implemented)");
                }
            });
        });
    });
}
