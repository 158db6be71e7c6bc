//! Frame timing and pacing.
//!
//! [`Time`] is the frame loop's clock: it counts frames, measures real
//! frame durations, averages a frames-per-second figure for the HUD, and
//! tells the event loop when the next frame is due.
//!
//! The particle simulation does not read any of this; it always advances by
//! [`crate::physics::FIXED_DT`]. Real time only drives pacing and display.
//!
//! # Example
//!
//! ```ignore
//! use wsf::time::Time;
//!
//! let mut time = Time::new().with_target_fps(60);
//!
//! // In the frame loop:
//! time.update();
//! println!("Frame {} at {:.1} fps", time.frame(), time.fps());
//! let wake_at = time.next_frame_at();
//! ```

use std::time::{Duration, Instant};

/// Frame clock for the render loop.
#[derive(Debug)]
pub struct Time {
    /// When the clock was created.
    start: Instant,
    /// When the last frame occurred.
    last_frame: Instant,
    /// Time since last frame in seconds.
    delta_secs: f32,
    /// Total frames since start.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
    /// Desired spacing between frames; `None` renders as fast as possible.
    target_interval: Option<Duration>,
}

impl Time {
    /// Create a new clock starting from now, with no frame rate cap.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
            target_interval: None,
        }
    }

    /// Cap the frame rate. `0` removes the cap.
    pub fn with_target_fps(mut self, fps: u32) -> Self {
        self.set_target_fps(fps);
        self
    }

    /// Cap the frame rate. `0` removes the cap.
    pub fn set_target_fps(&mut self, fps: u32) {
        self.target_interval = if fps == 0 {
            None
        } else {
            Some(Duration::from_secs_f64(1.0 / fps as f64))
        };
    }

    /// Record that a frame is starting. Call once per frame.
    pub fn update(&mut self) {
        self.tick(Instant::now());
    }

    fn tick(&mut self, now: Instant) {
        self.delta_secs = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }
    }

    /// When the next frame should start.
    ///
    /// Without a target frame rate this is the last frame's start, i.e. "now".
    pub fn next_frame_at(&self) -> Instant {
        match self.target_interval {
            Some(interval) => self.last_frame + interval,
            None => self.last_frame,
        }
    }

    /// Whether the next frame is due at `now`.
    pub fn frame_due(&self, now: Instant) -> bool {
        now >= self.next_frame_at()
    }

    /// Total elapsed time in seconds since start.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Real time between the last two frames, in seconds.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Frames per second averaged over the last half second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Configured spacing between frames, if capped.
    #[inline]
    pub fn target_interval(&self) -> Option<Duration> {
        self.target_interval
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}
