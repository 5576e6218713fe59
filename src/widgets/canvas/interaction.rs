//! Pointer interaction state for the media frame.
//!
//! One gesture at a time: a press on a handle starts a resize, a press
//! inside the frame starts a drag, and any release returns to idle. The
//! release path also fires when the primary button turns out to be up
//! without a release event reaching the canvas (pointer left the window),
//! so a gesture can never get stuck.

use eframe::egui;

use super::frame::{apply_resize, FrameRect, ResizeDirection};

/// Active pointer gesture on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Interaction {
    #[default]
    Idle,
    /// Moving the frame. `grab_offset` is pointer minus frame origin at
    /// press time, so the frame does not snap its corner to the pointer.
    Dragging { grab_offset: egui::Vec2 },
    /// Resizing from one handle, relative to the rect and pointer position
    /// captured at press time.
    Resizing {
        direction: ResizeDirection,
        start_pointer: egui::Pos2,
        start_rect: FrameRect,
    },
}

impl Interaction {
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    pub fn begin_drag(&mut self, pointer: egui::Pos2, rect: &FrameRect, origin: egui::Pos2) {
        let frame_min = origin + egui::vec2(rect.x, rect.y);
        *self = Interaction::Dragging {
            grab_offset: pointer - frame_min,
        };
    }

    pub fn begin_resize(
        &mut self,
        direction: ResizeDirection,
        pointer: egui::Pos2,
        rect: &FrameRect,
    ) {
        *self = Interaction::Resizing {
            direction,
            start_pointer: pointer,
            start_rect: *rect,
        };
    }

    pub fn release(&mut self) {
        *self = Interaction::Idle;
    }

    /// Advance the gesture for the current pointer position, mutating
    /// `rect` in place. Returns true when the rect changed.
    pub fn apply(
        &self,
        pointer: egui::Pos2,
        rect: &mut FrameRect,
        origin: egui::Pos2,
        surface: egui::Vec2,
    ) -> bool {
        let before = *rect;
        match *self {
            Interaction::Idle => {}
            Interaction::Dragging { grab_offset } => {
                let target = pointer - origin - grab_offset;
                rect.move_to_clamped(target.x, target.y, surface);
            }
            Interaction::Resizing {
                direction,
                start_pointer,
                start_rect,
            } => {
                *rect = apply_resize(direction, start_rect, pointer - start_pointer);
            }
        }
        *rect != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: egui::Pos2 = egui::pos2(10.0, 20.0);
    const SURFACE: egui::Vec2 = egui::vec2(800.0, 600.0);

    #[test]
    fn test_idle_applies_nothing() {
        let mut rect = FrameRect::default();
        let start = rect;
        let changed = Interaction::Idle.apply(egui::pos2(400.0, 300.0), &mut rect, ORIGIN, SURFACE);
        assert!(!changed);
        assert_eq!(rect, start);
    }

    #[test]
    fn test_drag_preserves_grab_offset() {
        let mut rect = FrameRect::new(100.0, 100.0, 200.0, 100.0);
        let mut gesture = Interaction::default();

        // Grab 30,40 inside the frame (screen space)
        let press = ORIGIN + egui::vec2(130.0, 140.0);
        gesture.begin_drag(press, &rect, ORIGIN);

        // Move the pointer by (50, -20); the frame follows exactly
        let changed = gesture.apply(press + egui::vec2(50.0, -20.0), &mut rect, ORIGIN, SURFACE);
        assert!(changed);
        assert_eq!((rect.x, rect.y), (150.0, 80.0));
        assert_eq!((rect.width, rect.height), (200.0, 100.0));
    }

    #[test]
    fn test_drag_clamps_at_surface_edges() {
        let mut rect = FrameRect::new(0.0, 0.0, 200.0, 100.0);
        let mut gesture = Interaction::default();
        gesture.begin_drag(ORIGIN, &rect, ORIGIN);

        gesture.apply(ORIGIN + egui::vec2(-300.0, -300.0), &mut rect, ORIGIN, SURFACE);
        assert_eq!((rect.x, rect.y), (0.0, 0.0));

        gesture.apply(ORIGIN + egui::vec2(5000.0, 5000.0), &mut rect, ORIGIN, SURFACE);
        assert_eq!((rect.x, rect.y), (600.0, 500.0));
    }

    #[test]
    fn test_resize_relative_to_press_rect() {
        let mut rect = FrameRect::new(100.0, 100.0, 200.0, 100.0);
        let mut gesture = Interaction::default();
        let press = egui::pos2(310.0, 170.0);
        gesture.begin_resize(ResizeDirection::East, press, &rect);

        gesture.apply(press + egui::vec2(30.0, 0.0), &mut rect, ORIGIN, SURFACE);
        assert_eq!(rect.width, 230.0);

        // Moving back past the press point shrinks from the captured rect,
        // not from the intermediate one
        gesture.apply(press + egui::vec2(-50.0, 0.0), &mut rect, ORIGIN, SURFACE);
        assert_eq!(rect.width, 150.0);
    }

    #[test]
    fn test_release_returns_to_idle() {
        let mut gesture = Interaction::default();
        gesture.begin_drag(ORIGIN, &FrameRect::default(), ORIGIN);
        assert!(!gesture.is_idle());
        gesture.release();
        assert!(gesture.is_idle());
    }

    #[test]
    fn test_apply_reports_unchanged_rect() {
        let mut rect = FrameRect::new(100.0, 100.0, 200.0, 100.0);
        let mut gesture = Interaction::default();
        let press = ORIGIN + egui::vec2(150.0, 150.0);
        gesture.begin_drag(press, &rect, ORIGIN);
        // Pointer has not moved
        let changed = gesture.apply(press, &mut rect, ORIGIN, SURFACE);
        assert!(!changed);
    }
}
