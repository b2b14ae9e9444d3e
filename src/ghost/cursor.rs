//! Playback cursor: maps elapsed replay time to a frame index
//!
//! The engine only sees the `PlaybackCursor` trait. `TimedCursor` is the
//! stock implementation driven by recorded frame timestamps.

use super::frame::FrameStore;

/// Position of a replay in its frame store.
///
/// While `is_at_end()` is false, `current_index() + 1` must be a valid
/// frame index.
pub trait PlaybackCursor {
    /// Move forward by `dt` seconds
    fn advance(&mut self, dt: f32);
    /// True once the recorded run is exhausted
    fn is_at_end(&self) -> bool;
    /// Index of the frame at or before the current time
    fn current_index(&self) -> usize;
    /// Progress toward frame `current_index() + 1`, in [0, 1)
    fn interpolation_fraction(&self) -> f32;
    /// Back to frame 0, fraction 0
    fn reset(&mut self);
}

/// Cursor driven by the timestamps of the recorded frames
#[derive(Debug, Clone)]
pub struct TimedCursor {
    times: Vec<f32>,
    elapsed: f32,
    index: usize,
    fraction: f32,
    ended: bool,
}

impl TimedCursor {
    /// `times` must be non-decreasing, one entry per frame.
    ///
    /// The cursor does not follow frames appended later through
    /// `GhostKart::add_frame`; build it from the same frames the ghost
    /// is loaded with, or use `from_store`.
    pub fn new(times: Vec<f32>) -> Self {
        let mut cursor = Self {
            times,
            elapsed: 0.0,
            index: 0,
            fraction: 0.0,
            ended: false,
        };
        cursor.reset();
        cursor
    }

    /// Cursor over the timestamps of a loaded store
    pub fn from_store(frames: &FrameStore) -> Self {
        Self::new(frames.times().collect())
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Elapsed replay time past which the cursor ends
    pub fn duration(&self) -> f32 {
        match (self.times.first(), self.times.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }

    fn seek_forward(&mut self) {
        let last = self.times.len() - 1;
        // Time 0 of the replay is the first recorded timestamp
        let t = self.times[0] + self.elapsed;
        if t > self.times[last] {
            self.ended = true;
            return;
        }

        while self.index + 1 < last && self.times[self.index + 1] <= t {
            self.index += 1;
        }

        let t0 = self.times[self.index];
        let t1 = self.times[self.index + 1];
        let span = t1 - t0;
        self.fraction = if span > 0.0 {
            ((t - t0) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        // Landing exactly on the last frame: hold there until time passes it
        if self.fraction >= 1.0 {
            self.fraction = 1.0 - f32::EPSILON;
        }
    }
}

impl PlaybackCursor for TimedCursor {
    fn advance(&mut self, dt: f32) {
        if self.ended {
            return;
        }
        if dt > 0.0 {
            self.elapsed += dt;
        }
        self.seek_forward();
    }

    fn is_at_end(&self) -> bool {
        self.ended
    }

    fn current_index(&self) -> usize {
        self.index
    }

    fn interpolation_fraction(&self) -> f32 {
        self.fraction
    }

    fn reset(&mut self) {
        self.elapsed = 0.0;
        self.index = 0;
        self.fraction = 0.0;
        // Need a pair of frames to interpolate between
        self.ended = self.times.len() < 2;
    }
}
