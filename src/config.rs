//! Application-wide constants: layout, theme, stepper limits.

use eframe::egui::Color32;

/// Initial window size.
pub const WINDOW_SIZE: [f32; 2] = [1280.0, 800.0];

/// Sidebar panel width.
pub const SIDEBAR_WIDTH: f32 = 300.0;

/// Upper bounds for the sidebar size steppers.
pub const MAX_FRAME_WIDTH: f32 = 1920.0;
pub const MAX_FRAME_HEIGHT: f32 = 1080.0;

/// Upper bound for the playback window steppers, seconds.
pub const MAX_WINDOW_SECS: f64 = 3600.0;

/// Canvas background.
pub const CANVAS_BG: Color32 = Color32::from_rgb(0x15, 0x18, 0x1c);

/// Accent for the frame border, handles and drop highlight.
pub const ACCENT: Color32 = Color32::from_rgb(0x21, 0x96, 0xf3);

/// Resize handle draw radius and the larger pointer hit radius.
pub const HANDLE_RADIUS: f32 = 5.0;
pub const HANDLE_HIT_RADIUS: f32 = 8.0;
