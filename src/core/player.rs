//! Playback engine: time window, ticker and derived media visibility.
//!
//! Timing model: simulated real-time, not wall-clock synced. The ticker fires
//! every 100 ms and advances playback by a fixed 0.1 s step. The current time
//! is derived from the tick count (`base + ticks * 0.1`) rather than repeated
//! float adds, so the end-of-window boundary lands exactly where the step
//! arithmetic says it should.
//!
//! At most one ticker exists at a time (`Option<Ticker>`): starting playback
//! always replaces whatever ticker was installed, and stopping clears it.
//!
//! The attached [`VideoPort`] is reconciled at tick granularity only. Drift
//! between simulated time and the port is expected and unaddressed.

use std::time::{Duration, Instant};

use log::{trace, warn};

use crate::media::video::VideoPort;

/// Wall-clock interval between ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Simulated seconds added per tick.
pub const TICK_STEP: f64 = 0.1;

/// Playback window in seconds. Invariant: `0 <= start <= end`, enforced by
/// clamping the dependent value whenever either bound changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeWindow {
    start: f64,
    end: f64,
}

impl TimeWindow {
    pub fn new(start: f64, end: f64) -> Self {
        let start = start.max(0.0);
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Set the window start. A start above the current end drags the end
    /// along so `start <= end` keeps holding.
    pub fn set_start(&mut self, start: f64) {
        self.start = start.max(0.0);
        if self.end < self.start {
            self.end = self.start;
        }
    }

    /// Set the window end, clamped up to the current start.
    pub fn set_end(&mut self, end: f64) {
        self.end = end.max(self.start);
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time <= self.end
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::new(0.0, 10.0)
    }
}

/// Active ticker. `base` is the window start captured when playback began;
/// later edits to the window must not move the already-elapsed time.
#[derive(Clone, Copy, Debug)]
struct Ticker {
    base: f64,
    ticks: u32,
    last_tick: Instant,
}

/// Playback state: window, current time and the (at most one) ticker.
#[derive(Clone, Debug)]
pub struct Player {
    window: TimeWindow,
    current_time: f64,
    ticker: Option<Ticker>,
}

impl Player {
    pub fn new() -> Self {
        Self {
            window: TimeWindow::default(),
            current_time: 0.0,
            ticker: None,
        }
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    pub fn set_window_start(&mut self, start: f64) {
        self.window.set_start(start);
    }

    pub fn set_window_end(&mut self, end: f64) {
        self.window.set_end(end);
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn is_playing(&self) -> bool {
        self.ticker.is_some()
    }

    /// Derived visibility: the media is shown iff the current time lies
    /// inside the window. Recomputed from the live values on every call.
    pub fn media_visible(&self) -> bool {
        self.window.contains(self.current_time)
    }

    /// Fraction of the window already played, for the transport bar.
    pub fn progress(&self) -> f32 {
        let duration = self.window.duration();
        if duration <= 0.0 {
            return 0.0;
        }
        (((self.current_time - self.window.start()) / duration) as f32).clamp(0.0, 1.0)
    }

    /// Start playback from the window start, replacing any existing ticker.
    ///
    /// The attached video is seeked to the window start (deferred inside the
    /// port until it reports can-play) and told to play. A rejected play is
    /// logged and otherwise ignored; playback state is not rolled back.
    pub fn play(&mut self, video: Option<&mut VideoPort>) {
        let start = self.window.start();
        self.current_time = start;
        if let Some(video) = video {
            video.request_seek(start);
            if let Err(err) = video.play() {
                warn!("Video play rejected: {}", err);
            }
        }
        self.ticker = Some(Ticker {
            base: start,
            ticks: 0,
            last_tick: Instant::now(),
        });
        trace!("Playback started at {:.1}s", start);
    }

    /// Stop playback and pause the attached video. Current time is left
    /// where it is.
    pub fn stop(&mut self, video: Option<&mut VideoPort>) {
        if self.ticker.take().is_some() {
            trace!("Playback stopped at {:.1}s", self.current_time);
        }
        if let Some(video) = video {
            video.pause();
        }
    }

    /// Play/pause toggle (Space, transport button, sidebar button).
    pub fn toggle_play(&mut self, video: Option<&mut VideoPort>) {
        if self.is_playing() {
            self.stop(video);
        } else {
            self.play(video);
        }
    }

    /// Advance by one tick. A tick that would pass the window end instead
    /// stops playback and resets the current time to the (live) window
    /// start. Returns true if anything changed.
    pub fn tick(&mut self) -> bool {
        let Some(ticker) = &mut self.ticker else {
            return false;
        };

        let next = ticker.base + f64::from(ticker.ticks + 1) * TICK_STEP;
        if next > self.window.end() {
            trace!(
                "Tick to {:.1}s passes window end {:.1}s, stopping",
                next,
                self.window.end()
            );
            self.ticker = None;
            self.current_time = self.window.start();
        } else {
            ticker.ticks += 1;
            self.current_time = next;
        }
        true
    }

    /// Per-frame update: fire every due tick, then reconcile the video port.
    /// Returns true if the current time changed (caller requests a repaint).
    pub fn update(&mut self, mut video: Option<&mut VideoPort>) -> bool {
        let mut changed = false;
        loop {
            let due = match &mut self.ticker {
                Some(ticker) if ticker.last_tick.elapsed() >= TICK_INTERVAL => {
                    ticker.last_tick += TICK_INTERVAL;
                    true
                }
                _ => false,
            };
            if !due {
                break;
            }
            changed |= self.tick();
        }
        self.sync_video(video.as_deref_mut());
        changed
    }

    /// Best-effort video reconciliation: paused whenever playback is stopped
    /// or the media is outside its window, playing otherwise.
    pub fn sync_video(&self, video: Option<&mut VideoPort>) {
        let Some(video) = video else {
            return;
        };
        if self.is_playing() && self.media_visible() {
            if !video.is_playing()
                && let Err(err) = video.play()
            {
                warn!("Video play rejected: {}", err);
            }
        } else {
            video.pause();
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing_player(start: f64, end: f64) -> Player {
        let mut player = Player::new();
        player.set_window_start(start);
        player.set_window_end(end);
        player.play(None);
        player
    }

    #[test]
    fn test_window_end_clamped_to_start() {
        let mut window = TimeWindow::default();
        window.set_start(5.0);
        window.set_end(3.0);
        // End never drops below start
        assert_eq!(window.start(), 5.0);
        assert_eq!(window.end(), 5.0);
    }

    #[test]
    fn test_window_start_drags_end_up() {
        let mut window = TimeWindow::new(0.0, 2.0);
        window.set_start(6.0);
        assert_eq!(window.start(), 6.0);
        assert_eq!(window.end(), 6.0);
    }

    #[test]
    fn test_window_start_never_negative() {
        let mut window = TimeWindow::default();
        window.set_start(-3.0);
        assert_eq!(window.start(), 0.0);
    }

    #[test]
    fn test_tick_boundary_stops_and_resets() {
        // start=2, end=3: ticks 1..=10 land on 2.1..=3.0, tick 11 computes
        // 3.1 > 3.0 which stops playback and resets to the window start.
        let mut player = playing_player(2.0, 3.0);

        for i in 1..=10 {
            player.tick();
            assert!(player.is_playing(), "still playing after tick {}", i);
        }
        assert_eq!(player.current_time(), 3.0);

        player.tick();
        assert!(!player.is_playing());
        assert_eq!(player.current_time(), 2.0);
    }

    #[test]
    fn test_tick_when_idle_is_noop() {
        let mut player = Player::new();
        assert!(!player.tick());
        assert_eq!(player.current_time(), 0.0);
    }

    #[test]
    fn test_play_restarts_from_window_start() {
        let mut player = playing_player(1.0, 5.0);
        player.tick();
        player.tick();
        assert_eq!(player.current_time(), 1.2);

        // Toggling twice lands back at the start with a fresh ticker
        player.toggle_play(None);
        assert!(!player.is_playing());
        player.toggle_play(None);
        assert!(player.is_playing());
        assert_eq!(player.current_time(), 1.0);
    }

    #[test]
    fn test_window_edit_does_not_move_current_time() {
        let mut player = playing_player(2.0, 8.0);
        for _ in 0..5 {
            player.tick();
        }
        assert_eq!(player.current_time(), 2.5);

        // Moving the window start while playing leaves elapsed time alone...
        player.set_window_start(4.0);
        assert_eq!(player.current_time(), 2.5);
        // ...and visibility is recomputed from the live values
        assert!(!player.media_visible());

        player.tick();
        assert_eq!(player.current_time(), 2.6);
    }

    #[test]
    fn test_visibility_sweep() {
        let mut player = Player::new();
        player.set_window_start(2.0);
        player.set_window_end(3.0);

        let mut t = 1.0;
        while t <= 4.0 + 1e-9 {
            player.current_time = t;
            assert_eq!(
                player.media_visible(),
                (2.0..=3.0).contains(&t),
                "visibility at t={}",
                t
            );
            t += 0.1;
        }
    }

    #[test]
    fn test_progress_clamped() {
        let mut player = Player::new();
        player.set_window_start(2.0);
        player.set_window_end(4.0);

        player.current_time = 3.0;
        assert!((player.progress() - 0.5).abs() < 1e-6);
        player.current_time = 0.0;
        assert_eq!(player.progress(), 0.0);
        player.current_time = 9.0;
        assert_eq!(player.progress(), 1.0);

        // Degenerate window reports no progress instead of dividing by zero
        player.set_window_end(2.0);
        player.set_window_start(2.0);
        assert_eq!(player.progress(), 0.0);
    }

    #[test]
    fn test_stop_keeps_current_time() {
        let mut player = playing_player(0.0, 10.0);
        for _ in 0..7 {
            player.tick();
        }
        player.stop(None);
        assert!(!player.is_playing());
        assert!((player.current_time() - 0.7).abs() < 1e-9);
    }
}
