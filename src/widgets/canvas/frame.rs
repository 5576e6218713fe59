//! Frame rectangle and the eight-handle resize rules.
//!
//! All math is canvas-local: positions in logical points with the origin at
//! the canvas top-left. Sizes are floored at [`MIN_FRAME_SIZE`] at the point
//! of mutation; origin-moving directions recompute the origin from the
//! *floored* size so the opposite edge stays put even after clamping -
//! otherwise the frame jumps when shrunk past the minimum.

use eframe::egui;

/// Minimum frame width/height in logical points.
pub const MIN_FRAME_SIZE: f32 = 50.0;

/// Position and size of the media frame on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl FrameRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width: width.max(MIN_FRAME_SIZE),
            height: height.max(MIN_FRAME_SIZE),
        }
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width.max(MIN_FRAME_SIZE);
    }

    pub fn set_height(&mut self, height: f32) {
        self.height = height.max(MIN_FRAME_SIZE);
    }

    /// Move the origin so the frame stays fully inside the surface. The
    /// lower bound wins when the frame is larger than the surface.
    pub fn move_to_clamped(&mut self, x: f32, y: f32, surface: egui::Vec2) {
        self.x = x.min(surface.x - self.width).max(0.0);
        self.y = y.min(surface.y - self.height).max(0.0);
    }

    /// Screen-space rect given the canvas origin.
    pub fn to_rect(&self, origin: egui::Pos2) -> egui::Rect {
        egui::Rect::from_min_size(
            origin + egui::vec2(self.x, self.y),
            egui::vec2(self.width, self.height),
        )
    }
}

impl Default for FrameRect {
    fn default() -> Self {
        Self::new(200.0, 150.0, 500.0, 300.0)
    }
}

/// Resize handle direction. Corners compose the two adjacent edge rules
/// independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeDirection {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeDirection {
    /// All handles, corners first so corner hits win over edge hits where
    /// the frame is small enough for hit areas to overlap.
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::NorthWest,
        ResizeDirection::NorthEast,
        ResizeDirection::SouthWest,
        ResizeDirection::SouthEast,
        ResizeDirection::North,
        ResizeDirection::South,
        ResizeDirection::West,
        ResizeDirection::East,
    ];

    fn touches_west(self) -> bool {
        matches!(
            self,
            ResizeDirection::West | ResizeDirection::NorthWest | ResizeDirection::SouthWest
        )
    }

    fn touches_east(self) -> bool {
        matches!(
            self,
            ResizeDirection::East | ResizeDirection::NorthEast | ResizeDirection::SouthEast
        )
    }

    fn touches_north(self) -> bool {
        matches!(
            self,
            ResizeDirection::North | ResizeDirection::NorthWest | ResizeDirection::NorthEast
        )
    }

    fn touches_south(self) -> bool {
        matches!(
            self,
            ResizeDirection::South | ResizeDirection::SouthWest | ResizeDirection::SouthEast
        )
    }

    /// Handle position on the frame border in unit coordinates.
    pub fn anchor(self) -> egui::Vec2 {
        let x = if self.touches_west() {
            0.0
        } else if self.touches_east() {
            1.0
        } else {
            0.5
        };
        let y = if self.touches_north() {
            0.0
        } else if self.touches_south() {
            1.0
        } else {
            0.5
        };
        egui::vec2(x, y)
    }

    pub fn cursor(self) -> egui::CursorIcon {
        match self {
            ResizeDirection::North | ResizeDirection::South => egui::CursorIcon::ResizeVertical,
            ResizeDirection::East | ResizeDirection::West => egui::CursorIcon::ResizeHorizontal,
            ResizeDirection::NorthEast | ResizeDirection::SouthWest => {
                egui::CursorIcon::ResizeNeSw
            }
            ResizeDirection::NorthWest | ResizeDirection::SouthEast => {
                egui::CursorIcon::ResizeNwSe
            }
        }
    }
}

/// Apply one resize step: `delta` is pointer minus the pointer position at
/// the start of the resize, `start` the rect at that moment.
///
/// East/south edges grow with the delta, west/north edges grow against it
/// and shift the origin by however much the floored size actually changed,
/// which keeps the opposite edge fixed in place.
pub fn apply_resize(dir: ResizeDirection, start: FrameRect, delta: egui::Vec2) -> FrameRect {
    let mut rect = start;

    if dir.touches_east() {
        rect.width = (start.width + delta.x).max(MIN_FRAME_SIZE);
    } else if dir.touches_west() {
        rect.width = (start.width - delta.x).max(MIN_FRAME_SIZE);
        rect.x = start.x + (start.width - rect.width);
    }

    if dir.touches_south() {
        rect.height = (start.height + delta.y).max(MIN_FRAME_SIZE);
    } else if dir.touches_north() {
        rect.height = (start.height - delta.y).max(MIN_FRAME_SIZE);
        rect.y = start.y + (start.height - rect.height);
    }

    rect
}
