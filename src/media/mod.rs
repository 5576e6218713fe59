//! Media assets: classification, decoded pixels and exactly-once release.
//!
//! One [`MediaSlot`] owns at most one [`MediaAsset`]. Replacing or clearing
//! the slot releases the outgoing asset's resources (pixel data, GPU
//! texture) exactly once; releasing twice or never are both defects, so a
//! double release is logged and teardown auto-releases whatever is left.

pub mod video;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, bail};
use eframe::egui;
use log::{debug, info, trace, warn};
use uuid::Uuid;

use video::VideoPort;

/// Image file extensions accepted by the picker and the extension fallback.
pub const IMAGE_EXTS: &[&str] = &["png", "jpg", "jpeg", "tif", "tiff", "tga", "hdr"];

/// Video file extensions accepted by the picker.
pub const VIDEO_EXTS: &[&str] = &["mp4", "mov", "avi", "mkv", "webm"];

/// Media category, decided from the declared type only - a mislabeled file
/// is trusted, no content sniffing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// Classify by mime prefix (`image/` wins, any other non-empty mime is
/// video), falling back to the file extension when the platform supplies no
/// mime - native drops usually don't.
pub fn classify(mime: &str, name: &str) -> MediaKind {
    if mime.starts_with("image/") {
        return MediaKind::Image;
    }
    if !mime.is_empty() {
        return MediaKind::Video;
    }
    let ext = Path::new(name)
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext {
        Some(ext) if IMAGE_EXTS.contains(&ext.as_str()) => MediaKind::Image,
        _ => MediaKind::Video,
    }
}

/// One entry of a drop or picker selection: a declared type plus either a
/// path or the file contents already in memory.
#[derive(Clone, Debug)]
pub struct MediaPayload {
    pub name: String,
    pub mime: String,
    pub path: Option<PathBuf>,
    pub bytes: Option<Arc<[u8]>>,
}

impl MediaPayload {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        Self {
            name,
            mime: String::new(),
            path: Some(path),
            bytes: None,
        }
    }

    pub fn from_dropped(file: &egui::DroppedFile) -> Self {
        let name = if !file.name.is_empty() {
            file.name.clone()
        } else {
            file.path
                .as_ref()
                .and_then(|p| p.file_name())
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string()
        };
        Self {
            name,
            mime: file.mime.clone(),
            path: file.path.clone(),
            bytes: file.bytes.clone(),
        }
    }
}

/// A loaded media file and its runtime resources.
///
/// Images are decoded at load time and uploaded as a texture lazily on first
/// draw. Videos carry a [`VideoPort`] instead of pixels.
pub struct MediaAsset {
    id: Uuid,
    name: String,
    kind: MediaKind,
    bytes: Arc<[u8]>,
    pixels: Option<egui::ColorImage>,
    dimensions: Option<(u32, u32)>,
    texture: Option<egui::TextureHandle>,
    video: Option<VideoPort>,
    released: bool,
}

impl MediaAsset {
    /// Build an asset from a drop/picker payload. Reads the file when only a
    /// path was supplied; decodes images up front.
    pub fn load(payload: MediaPayload) -> anyhow::Result<Self> {
        let bytes: Arc<[u8]> = match (payload.bytes, &payload.path) {
            (Some(bytes), _) => bytes,
            (None, Some(path)) => std::fs::read(path)
                .with_context(|| format!("reading {}", path.display()))?
                .into(),
            (None, None) => bail!("drop entry carries neither path nor bytes"),
        };

        let kind = classify(&payload.mime, &payload.name);
        let (pixels, dimensions, video) = match kind {
            MediaKind::Image => {
                let decoded = image::load_from_memory(&bytes)
                    .with_context(|| format!("decoding {}", payload.name))?
                    .to_rgba8();
                let dims = (decoded.width(), decoded.height());
                let pixels = egui::ColorImage::from_rgba_unmultiplied(
                    [dims.0 as usize, dims.1 as usize],
                    decoded.as_raw(),
                );
                (Some(pixels), Some(dims), None)
            }
            MediaKind::Video => (None, None, Some(VideoPort::new())),
        };

        let asset = Self {
            id: Uuid::new_v4(),
            name: payload.name,
            kind,
            bytes,
            pixels,
            dimensions,
            texture: None,
            video,
            released: false,
        };
        info!(
            "Loaded {} \"{}\" ({} bytes) as {}",
            asset.kind.as_str(),
            asset.name,
            asset.bytes.len(),
            asset.id
        );
        Ok(asset)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Source pixel dimensions (images only).
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.dimensions
    }

    pub fn video_mut(&mut self) -> Option<&mut VideoPort> {
        self.video.as_mut()
    }

    /// Texture for drawing, uploaded on first use. The decoded pixels are
    /// handed over to the texture manager, so the CPU copy is freed here.
    pub fn texture(&mut self, ctx: &egui::Context) -> Option<&egui::TextureHandle> {
        if self.texture.is_none()
            && let Some(pixels) = self.pixels.take()
        {
            self.texture = Some(ctx.load_texture(
                format!("media-{}", self.id),
                pixels,
                egui::TextureOptions::LINEAR,
            ));
        }
        self.texture.as_ref()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Free the asset's resources. Must run exactly once per asset; a second
    /// call is a defect and is only logged.
    pub fn release(&mut self) {
        if self.released {
            warn!("Media asset {} released twice", self.id);
            return;
        }
        self.released = true;
        self.bytes = Vec::new().into();
        self.pixels = None;
        self.texture = None;
        self.video = None;
        debug!("Released media asset {}", self.id);
    }
}

impl Drop for MediaAsset {
    fn drop(&mut self) {
        // Teardown path: an asset that was never explicitly released still
        // gets released exactly once.
        if !self.released {
            trace!("Releasing media asset {} on teardown", self.id);
            self.release();
        }
    }
}

/// Owner of the (single) current media asset.
#[derive(Default)]
pub struct MediaSlot {
    asset: Option<MediaAsset>,
}

impl MediaSlot {
    pub fn has_media(&self) -> bool {
        self.asset.is_some()
    }

    pub fn asset(&self) -> Option<&MediaAsset> {
        self.asset.as_ref()
    }

    pub fn asset_mut(&mut self) -> Option<&mut MediaAsset> {
        self.asset.as_mut()
    }

    /// Accept a drop or picker selection. Only the first entry is used;
    /// empty lists and unreadable files are silent no-ops. Returns true if
    /// a new asset was installed.
    pub fn submit(&mut self, payloads: Vec<MediaPayload>) -> bool {
        let count = payloads.len();
        let Some(first) = payloads.into_iter().next() else {
            trace!("Empty drop ignored");
            return false;
        };
        if count > 1 {
            debug!("Multi-file drop truncated to first of {}", count);
        }
        match MediaAsset::load(first) {
            Ok(asset) => {
                self.replace(asset);
                true
            }
            Err(err) => {
                warn!("Ignoring drop: {:#}", err);
                false
            }
        }
    }

    /// Install a new asset, releasing the previous one. Returns the old
    /// asset, already released.
    pub fn replace(&mut self, asset: MediaAsset) -> Option<MediaAsset> {
        let mut old = self.asset.take();
        if let Some(old) = &mut old {
            old.release();
        }
        self.asset = Some(asset);
        old
    }

    /// Drop the held asset (Remove button). Returns the released asset.
    pub fn clear(&mut self) -> Option<MediaAsset> {
        let mut old = self.asset.take();
        if let Some(old) = &mut old {
            old.release();
        }
        old
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_payload(name: &str) -> MediaPayload {
        // Smallest real image we can make: 2x2 white PNG
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 255, 255, 255]));
        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .unwrap();
        MediaPayload {
            name: name.to_string(),
            mime: String::new(),
            path: None,
            bytes: Some(bytes.into()),
        }
    }

    fn video_payload(name: &str, mime: &str) -> MediaPayload {
        MediaPayload {
            name: name.to_string(),
            mime: mime.to_string(),
            path: None,
            bytes: Some(vec![0u8; 16].into()),
        }
    }

    #[test]
    fn test_classify_mime_prefix() {
        assert_eq!(classify("image/png", "x.bin"), MediaKind::Image);
        assert_eq!(classify("video/mp4", "x.bin"), MediaKind::Video);
        // Anything declared non-image is treated as video
        assert_eq!(classify("application/pdf", "x.png"), MediaKind::Video);
    }

    #[test]
    fn test_classify_extension_fallback() {
        assert_eq!(classify("", "photo.JPG"), MediaKind::Image);
        assert_eq!(classify("", "clip.mp4"), MediaKind::Video);
        // Unknown extension defaults to video, same as unknown mime
        assert_eq!(classify("", "mystery.dat"), MediaKind::Video);
    }

    #[test]
    fn test_load_image_decodes_pixels() {
        let asset = MediaAsset::load(png_payload("tiny.png")).unwrap();
        assert_eq!(asset.kind(), MediaKind::Image);
        assert_eq!(asset.dimensions(), Some((2, 2)));
        assert!(!asset.is_released());
    }

    #[test]
    fn test_load_video_gets_port() {
        let mut asset = MediaAsset::load(video_payload("clip.mp4", "video/mp4")).unwrap();
        assert_eq!(asset.kind(), MediaKind::Video);
        assert!(asset.video_mut().is_some());
        assert_eq!(asset.dimensions(), None);
    }

    #[test]
    fn test_load_rejects_undecodable_image() {
        let payload = MediaPayload {
            name: "broken.png".to_string(),
            mime: "image/png".to_string(),
            path: None,
            bytes: Some(vec![1, 2, 3].into()),
        };
        assert!(MediaAsset::load(payload).is_err());
    }

    #[test]
    fn test_submit_empty_is_noop() {
        let mut slot = MediaSlot::default();
        assert!(!slot.submit(Vec::new()));
        assert!(!slot.has_media());
    }

    #[test]
    fn test_submit_truncates_to_first() {
        let mut slot = MediaSlot::default();
        assert!(slot.submit(vec![
            png_payload("first.png"),
            video_payload("second.mp4", "video/mp4"),
        ]));
        assert_eq!(slot.asset().unwrap().name(), "first.png");
        assert_eq!(slot.asset().unwrap().kind(), MediaKind::Image);
    }

    #[test]
    fn test_replace_releases_old_exactly_once() {
        let mut slot = MediaSlot::default();
        assert!(slot.submit(vec![png_payload("a.png")]));
        assert!(!slot.asset().unwrap().is_released());

        let second = MediaAsset::load(video_payload("b.mp4", "video/mp4")).unwrap();
        let old = slot.replace(second).unwrap();
        assert_eq!(old.name(), "a.png");
        assert!(old.is_released());
        assert_eq!(slot.asset().unwrap().name(), "b.mp4");
        assert!(!slot.asset().unwrap().is_released());
    }

    #[test]
    fn test_clear_releases() {
        let mut slot = MediaSlot::default();
        slot.submit(vec![video_payload("c.mov", "")]);
        let old = slot.clear().unwrap();
        assert!(old.is_released());
        assert!(!slot.has_media());
    }

    #[test]
    fn test_double_release_stays_released() {
        let mut asset = MediaAsset::load(video_payload("d.mp4", "video/mp4")).unwrap();
        asset.release();
        assert!(asset.is_released());
        // Second release is a logged defect, not a crash
        asset.release();
        assert!(asset.is_released());
    }
}
