//! Recorded runs as JSON documents
//!
//! Load-phase helper: turns a stored run into a ready-to-play ghost.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::GhostConfig;
use crate::error::GhostError;
use crate::ghost::{Frame, FrameStore, GhostKart, GhostVisuals, TimedCursor};

/// A recorded run for one kart
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GhostReplay {
    /// Kart identifier the run was recorded with
    pub kart: String,
    pub frames: Vec<Frame>,
}

impl GhostReplay {
    pub fn new(kart: impl Into<String>) -> Self {
        Self {
            kart: kart.into(),
            frames: Vec::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, GhostError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, GhostError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GhostError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let replay = Self::from_json(&json)?;
        log::info!(
            "Loaded replay for '{}' from {} ({} frames)",
            replay.kart,
            path.display(),
            replay.frames.len()
        );
        Ok(replay)
    }

    /// Recorded duration in seconds
    pub fn duration(&self) -> f32 {
        match (self.frames.first(), self.frames.last()) {
            (Some(first), Some(last)) => last.time - first.time,
            _ => 0.0,
        }
    }

    /// Build a ghost positioned at frame 0
    pub fn into_kart<V: GhostVisuals>(
        self,
        visuals: V,
        config: GhostConfig,
    ) -> Result<GhostKart<TimedCursor, V>, GhostError> {
        config.validate()?;
        let mut frames = FrameStore::new(config.model_lowest_point);
        for frame in self.frames {
            frames.append(frame)?;
        }
        let cursor = TimedCursor::from_store(&frames);
        let mut kart = GhostKart::with_frames(cursor, visuals, config, frames);
        kart.reset();
        Ok(kart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ghost::{GhostState, NullVisuals, PhysicsInfo, Transform};
    use glam::Vec3;

    fn straight_run(n: usize) -> GhostReplay {
        let mut replay = GhostReplay::new("tux");
        for i in 0..n {
            replay.frames.push(Frame {
                time: i as f32 * 0.5,
                transform: Transform::from_translation(Vec3::new(0.0, 0.0, i as f32)),
                physics: PhysicsInfo {
                    speed: 2.0,
                    ..Default::default()
                },
                ..Default::default()
            });
        }
        replay
    }

    #[test]
    fn test_json_roundtrip_keeps_frames() {
        let replay = straight_run(3);
        let json = replay.to_json().unwrap();
        let loaded = GhostReplay::from_json(&json).unwrap();
        assert_eq!(loaded.kart, "tux");
        assert_eq!(loaded.frames, replay.frames);
    }

    #[test]
    fn test_events_default_when_missing() {
        let json = r#"{
            "kart": "nolok",
            "frames": [{
                "time": 0.0,
                "transform": { "translation": [1.0, 2.0, 3.0], "rotation": [0.0, 0.0, 0.0, 1.0] },
                "physics": { "speed": 4.0, "steer": 0.0, "suspension_length": [0.1, 0.1, 0.1, 0.1] }
            }]
        }"#;
        let replay = GhostReplay::from_json(json).unwrap();
        assert_eq!(replay.frames.len(), 1);
        assert!(!replay.frames[0].events.on_nitro);
        assert_eq!(replay.frames[0].transform.translation, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_into_kart_starts_at_frame_zero() {
        let kart = straight_run(4).into_kart(NullVisuals, GhostConfig::default()).unwrap();
        assert_eq!(kart.state(), GhostState::Active);
        assert_eq!(kart.frame_count(), 4);
        assert_eq!(kart.transform().translation, Vec3::ZERO);
    }

    #[test]
    fn test_playback_runs_to_end() {
        let replay = straight_run(4);
        let duration = replay.duration();
        let mut kart = replay.into_kart(NullVisuals, GhostConfig::default()).unwrap();

        kart.update(duration * 0.5);
        assert!((kart.transform().translation.z - 1.5).abs() < 1e-4);

        kart.update(duration);
        assert!(kart.is_at_end());
    }

    #[test]
    fn test_into_kart_rejects_unordered_frames() {
        let mut replay = straight_run(3);
        replay.frames.swap(0, 2);
        let err = replay.into_kart(NullVisuals, GhostConfig::default()).err();
        assert!(matches!(err, Some(GhostError::OutOfOrder { .. })));
    }

    #[test]
    fn test_empty_replay_is_ended() {
        let kart = GhostReplay::new("empty")
            .into_kart(NullVisuals, GhostConfig::default())
            .unwrap();
        assert!(kart.is_at_end());
    }

    #[test]
    fn test_offset_start_plays_full_duration() {
        let mut replay = straight_run(3);
        for f in &mut replay.frames {
            f.time += 10.0;
        }
        let duration = replay.duration();
        let mut kart = replay.into_kart(NullVisuals, GhostConfig::default()).unwrap();
        assert_eq!(kart.frames().duration(), duration);
        assert_eq!(kart.cursor().duration(), duration);

        kart.update(duration);
        assert!(!kart.is_at_end());
        kart.update(0.1);
        assert!(kart.is_at_end());
    }
}
