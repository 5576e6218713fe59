//! Shared file dialog helpers for widget UI.

use crate::media::{IMAGE_EXTS, VIDEO_EXTS};

/// Create configured file dialog for image/video selection.
pub fn create_media_dialog(title: &str) -> rfd::FileDialog {
    rfd::FileDialog::new()
        .add_filter("Images", IMAGE_EXTS)
        .add_filter("Videos", VIDEO_EXTS)
        .set_title(title)
}
