//! Video port - native stand-in for a muted, control-less video surface.
//!
//! Models the readiness handshake of an embedded video element: seeks issued
//! before the port reports can-play are deferred and applied on readiness,
//! and a play request against a non-ready port is rejected (the caller logs
//! it and carries on) but remembered, so the port resumes by itself once it
//! can play. No decode pipeline sits behind this - encoding/decoding are out
//! of scope and the canvas draws a placeholder surface instead.

use std::fmt;

use log::{debug, trace};

/// Play request refused by the port (the autoplay-policy analog).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayRejected {
    reason: &'static str,
}

impl fmt::Display for PlayRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl std::error::Error for PlayRejected {}

/// Playback surface state for one video asset.
#[derive(Clone, Debug, Default)]
pub struct VideoPort {
    ready: bool,
    playing: bool,
    position: f64,
    pending_seek: Option<f64>,
    resume_on_ready: bool,
}

impl VideoPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Current playhead position in seconds.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Seek to `secs`. Applied immediately when ready, otherwise parked
    /// until [`mark_can_play`](Self::mark_can_play).
    pub fn request_seek(&mut self, secs: f64) {
        if self.ready {
            self.position = secs;
        } else {
            trace!("Video not ready, deferring seek to {:.1}s", secs);
            self.pending_seek = Some(secs);
        }
    }

    /// can-play callback: the surface finished warming up. Applies any
    /// deferred seek and resumes a previously rejected play request.
    pub fn mark_can_play(&mut self) {
        if self.ready {
            return;
        }
        self.ready = true;
        if let Some(secs) = self.pending_seek.take() {
            self.position = secs;
        }
        if self.resume_on_ready {
            self.resume_on_ready = false;
            self.playing = true;
        }
        debug!("Video can play (position {:.1}s)", self.position);
    }

    /// Start playback. Fails while the port is not ready; the rejected
    /// request is remembered and honored on can-play.
    pub fn play(&mut self) -> Result<(), PlayRejected> {
        if !self.ready {
            self.resume_on_ready = true;
            return Err(PlayRejected {
                reason: "video surface not ready",
            });
        }
        self.playing = true;
        Ok(())
    }

    /// Pause playback. Idempotent; also cancels a deferred resume.
    pub fn pause(&mut self) {
        self.playing = false;
        self.resume_on_ready = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seek_deferred_until_can_play() {
        let mut port = VideoPort::new();
        port.request_seek(2.0);
        assert_eq!(port.position(), 0.0);

        port.mark_can_play();
        assert_eq!(port.position(), 2.0);

        // Once ready, seeks apply immediately
        port.request_seek(5.5);
        assert_eq!(port.position(), 5.5);
    }

    #[test]
    fn test_play_rejected_then_resumed_on_ready() {
        let mut port = VideoPort::new();
        assert!(port.play().is_err());
        assert!(!port.is_playing());

        port.mark_can_play();
        assert!(port.is_playing());
    }

    #[test]
    fn test_pause_cancels_deferred_resume() {
        let mut port = VideoPort::new();
        let _ = port.play();
        port.pause();

        port.mark_can_play();
        assert!(!port.is_playing());
    }

    #[test]
    fn test_play_after_ready_succeeds() {
        let mut port = VideoPort::new();
        port.mark_can_play();
        assert!(port.play().is_ok());
        assert!(port.is_playing());

        port.pause();
        assert!(!port.is_playing());
        // Pause is idempotent
        port.pause();
        assert!(!port.is_playing());
    }

    #[test]
    fn test_mark_can_play_idempotent() {
        let mut port = VideoPort::new();
        port.mark_can_play();
        port.request_seek(3.0);
        port.mark_can_play();
        assert_eq!(port.position(), 3.0);
    }
}
