//! Canvas widget - UI rendering
//!
//! Draws the drop zone when the slot is empty, otherwise the media frame
//! with its eight resize handles, and runs the pointer state machine for
//! drag/resize gestures. All mutations leave as events; the canvas never
//! touches app state directly.

use eframe::egui;
use log::info;

use super::canvas_events::{LoadMediaEvent, SetFrameRectEvent};
use super::frame::{FrameRect, ResizeDirection};
use super::interaction::Interaction;
use crate::config;
use crate::media::{MediaKind, MediaPayload, MediaSlot};
use crate::widgets::actions::ActionQueue;
use crate::widgets::file_dialogs::create_media_dialog;

pub type CanvasActions = ActionQueue;

/// Per-frame canvas state that survives across renders.
#[derive(Default)]
pub struct CanvasState {
    pub interaction: Interaction,
}

/// Render the canvas inside the provided UI.
pub fn render(
    ui: &mut egui::Ui,
    slot: &mut MediaSlot,
    frame_rect: &FrameRect,
    media_visible: bool,
    state: &mut CanvasState,
) -> CanvasActions {
    let mut actions = CanvasActions::default();
    let ctx = ui.ctx().clone();
    let panel_rect = ui.max_rect();

    ui.painter()
        .rect_filled(panel_rect, 0.0, config::CANVAS_BG);

    let response = ui.interact(
        panel_rect,
        ui.id().with("canvas_interaction"),
        egui::Sense::click_and_drag(),
    );

    if slot.has_media() {
        if media_visible {
            render_frame(ui, &ctx, slot, frame_rect, panel_rect, state, &mut actions);
        } else {
            // Outside the playback window the frame is hidden entirely, so
            // no gesture can keep running against it.
            state.interaction.release();
        }
    } else {
        render_drop_zone(ui, &ctx, &response, panel_rect, &mut actions);
    }

    actions.hovered = response.hovered();
    actions
}

/// Empty-slot drop zone: dashed outline, highlighted while files hover,
/// click opens the picker.
fn render_drop_zone(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    response: &egui::Response,
    panel_rect: egui::Rect,
    actions: &mut CanvasActions,
) {
    let files_hovering = ctx.input(|i| !i.raw.hovered_files.is_empty());

    let zone = egui::Rect::from_center_size(
        panel_rect.center(),
        egui::vec2(
            (panel_rect.width() * 0.6).min(520.0),
            (panel_rect.height() * 0.5).min(300.0),
        ),
    );

    let color = if files_hovering {
        config::ACCENT
    } else {
        egui::Color32::from_gray(110)
    };
    draw_dashed_rect(ui.painter(), zone, egui::Stroke::new(1.5, color));

    ui.painter().text(
        zone.center(),
        egui::Align2::CENTER_CENTER,
        if files_hovering {
            "Release to add media"
        } else {
            "Drop an image or video here, or click to browse"
        },
        egui::FontId::proportional(16.0),
        color,
    );

    if response.clicked() {
        info!("Canvas clicked, opening file dialog");
        if let Some(paths) = create_media_dialog("Select Media").pick_files()
            && !paths.is_empty()
        {
            let payloads = paths.into_iter().map(MediaPayload::from_path).collect();
            actions.send(LoadMediaEvent(payloads));
        }
    }
}

fn render_frame(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    slot: &mut MediaSlot,
    frame_rect: &FrameRect,
    panel_rect: egui::Rect,
    state: &mut CanvasState,
    actions: &mut CanvasActions,
) {
    let origin = panel_rect.min;
    let rect = frame_rect.to_rect(origin);

    draw_media(ui, ctx, slot, rect);

    ui.painter()
        .rect_stroke(rect, 0.0, egui::Stroke::new(1.0, config::ACCENT), egui::StrokeKind::Outside);

    for dir in ResizeDirection::ALL {
        ui.painter().circle(
            handle_pos(rect, dir),
            config::HANDLE_RADIUS,
            egui::Color32::WHITE,
            egui::Stroke::new(1.0, config::ACCENT),
        );
    }

    handle_pointer(ctx, frame_rect, rect, origin, panel_rect, state, actions);
}

/// Media content inside the frame: images contain-fit their texture, video
/// gets a placeholder surface (no decode pipeline behind the port).
fn draw_media(ui: &mut egui::Ui, ctx: &egui::Context, slot: &mut MediaSlot, rect: egui::Rect) {
    let Some(asset) = slot.asset_mut() else { return };

    match asset.kind() {
        MediaKind::Image => {
            ui.painter().rect_filled(rect, 0.0, egui::Color32::BLACK);
            let dimensions = asset.dimensions();
            if let Some(texture) = asset.texture(ctx) {
                let fitted = dimensions
                    .map(|(w, h)| contain_fit(rect, w as f32, h as f32))
                    .unwrap_or(rect);
                ui.painter().image(
                    texture.id(),
                    fitted,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
        }
        MediaKind::Video => {
            ui.painter().rect_filled(rect, 0.0, egui::Color32::BLACK);
            let label = if asset.video_mut().is_some_and(|v| v.is_playing()) {
                "\u{25B6}"
            } else {
                "\u{2016}"
            };
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                label,
                egui::FontId::proportional(28.0),
                egui::Color32::from_gray(160),
            );
        }
    }
}

/// Pointer state machine: press starts a gesture, movement applies it and
/// commits the rect through an event, release (or a button observed up)
/// ends it.
fn handle_pointer(
    ctx: &egui::Context,
    frame_rect: &FrameRect,
    rect: egui::Rect,
    origin: egui::Pos2,
    panel_rect: egui::Rect,
    state: &mut CanvasState,
    actions: &mut CanvasActions,
) {
    let (pressed, released, down, pointer_pos) = ctx.input(|i| {
        (
            i.pointer.button_pressed(egui::PointerButton::Primary),
            i.pointer.button_released(egui::PointerButton::Primary),
            i.pointer.button_down(egui::PointerButton::Primary),
            i.pointer.latest_pos(),
        )
    });

    let Some(pos) = pointer_pos else {
        state.interaction.release();
        return;
    };

    let hovered_handle = ResizeDirection::ALL
        .into_iter()
        .find(|dir| handle_pos(rect, *dir).distance(pos) <= config::HANDLE_HIT_RADIUS);

    if pressed && panel_rect.contains(pos) {
        if let Some(dir) = hovered_handle {
            state.interaction.begin_resize(dir, pos, frame_rect);
        } else if rect.contains(pos) {
            state.interaction.begin_drag(pos, frame_rect, origin);
        }
    }

    // A release anywhere ends the gesture, as does the button simply being
    // up (release delivered outside the window).
    if released || !down {
        state.interaction.release();
    }

    if !state.interaction.is_idle() {
        let mut next = *frame_rect;
        if state
            .interaction
            .apply(pos, &mut next, origin, panel_rect.size())
        {
            actions.send(SetFrameRectEvent(next));
        }
        ctx.request_repaint();
    }

    let cursor = match state.interaction {
        Interaction::Dragging { .. } => Some(egui::CursorIcon::Grabbing),
        Interaction::Resizing { direction, .. } => Some(direction.cursor()),
        Interaction::Idle => {
            if let Some(dir) = hovered_handle {
                Some(dir.cursor())
            } else if rect.contains(pos) {
                Some(egui::CursorIcon::Grab)
            } else {
                None
            }
        }
    };
    if let Some(cursor) = cursor {
        ctx.set_cursor_icon(cursor);
    }
}

fn handle_pos(rect: egui::Rect, dir: ResizeDirection) -> egui::Pos2 {
    let anchor = dir.anchor();
    egui::pos2(
        rect.min.x + rect.width() * anchor.x,
        rect.min.y + rect.height() * anchor.y,
    )
}

/// Largest rect with the media's aspect ratio that fits inside `rect`.
fn contain_fit(rect: egui::Rect, media_w: f32, media_h: f32) -> egui::Rect {
    if media_w <= 0.0 || media_h <= 0.0 {
        return rect;
    }
    let scale = (rect.width() / media_w).min(rect.height() / media_h);
    egui::Rect::from_center_size(
        rect.center(),
        egui::vec2(media_w * scale, media_h * scale),
    )
}

fn draw_dashed_rect(painter: &egui::Painter, rect: egui::Rect, stroke: egui::Stroke) {
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    for pair in corners.windows(2) {
        painter.extend(egui::Shape::dashed_line(pair, stroke, 6.0, 4.0));
    }
}
