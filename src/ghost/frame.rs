//! Recorded frames and the append-only store that holds them
//!
//! All frames are appended during load, before the first playback tick.

use serde::{Deserialize, Serialize};

use super::transform::Transform;
use crate::error::GhostError;

/// Physics channels sampled at one instant
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PhysicsInfo {
    /// Signed forward speed (m/s), negative when reversing
    pub speed: f32,
    /// Steering angle (radians)
    pub steer: f32,
    /// Suspension length per wheel
    pub suspension_length: [f32; 4],
}

/// Event flags captured with a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayEvents {
    /// Nitro was being burned
    #[serde(default)]
    pub on_nitro: bool,
    /// Kart was on a speed pad
    #[serde(default)]
    pub on_zipper: bool,
}

/// One sample of a recorded run
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Seconds since the run started
    pub time: f32,
    pub transform: Transform,
    pub physics: PhysicsInfo,
    #[serde(default)]
    pub events: ReplayEvents,
}

impl Frame {
    fn is_finite(&self) -> bool {
        self.time.is_finite()
            && self.transform.is_finite()
            && self.physics.speed.is_finite()
            && self.physics.steer.is_finite()
            && self.physics.suspension_length.iter().all(|s| s.is_finite())
    }
}

/// Ordered, append-only frame storage.
///
/// The baseline offset is derived from the first frame's suspension and
/// never changes afterwards.
#[derive(Debug, Clone, Default)]
pub struct FrameStore {
    frames: Vec<Frame>,
    model_lowest_point: f32,
    baseline_offset: Option<f32>,
}

impl FrameStore {
    pub fn new(model_lowest_point: f32) -> Self {
        Self {
            frames: Vec::new(),
            model_lowest_point,
            baseline_offset: None,
        }
    }

    /// Append a frame, returning its index
    pub fn append(&mut self, frame: Frame) -> Result<usize, GhostError> {
        let index = self.frames.len();
        if !frame.is_finite() {
            return Err(GhostError::NonFinite { index });
        }
        if let Some(last) = self.frames.last() {
            if frame.time < last.time {
                return Err(GhostError::OutOfOrder {
                    index,
                    time: frame.time,
                    previous: last.time,
                });
            }
        }

        if self.baseline_offset.is_none() {
            let avg = frame.physics.suspension_length.iter().sum::<f32>() / 4.0;
            let offset = -avg + self.model_lowest_point;
            log::debug!("Ghost baseline offset: {}", offset);
            self.baseline_offset = Some(offset);
        }

        self.frames.push(frame);
        Ok(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at `i`, panics when out of range
    #[inline]
    pub fn frame_at(&self, i: usize) -> &Frame {
        assert!(
            i < self.frames.len(),
            "frame index {} out of range ({} frames)",
            i,
            self.frames.len()
        );
        &self.frames[i]
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&Frame> {
        self.frames.get(i)
    }

    /// Vertical pivot correction, `None` until the first frame arrives
    pub fn baseline_offset(&self) -> Option<f32> {
        self.baseline_offset
    }

    pub fn times(&self) -> impl Iterator<Item = f32> + '_ {
        self.frames.iter().map(|f| f.time)
    }

    /// Recorded duration in seconds, first to last frame
    pub fn duration(&self) -> f32 {
        match (self.frames.first(), self.frames.last()) {
            (Some(first), Some(last)) => last.time - first.time,
            _ => 0.0,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }
}
