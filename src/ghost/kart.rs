//! Ghost kart playback engine
//!
//! Each tick reads the cursor position, interpolates the pose between the
//! two bracketing frames and forwards the sampled effect channels.

use glam::Vec3;

use super::cursor::PlaybackCursor;
use super::frame::{Frame, FrameStore};
use super::transform::{Transform, lerp_transform};
use super::visuals::{GhostVisuals, KartAnimation};
use crate::config::GhostConfig;
use crate::error::GhostError;
use crate::{KART_UP, saturate};

/// Playback state of a ghost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GhostState {
    /// Replaying, visible
    Active,
    /// Recorded run exhausted, hidden until reset
    Ended,
}

/// A kart replaying a recorded run
pub struct GhostKart<C, V> {
    frames: FrameStore,
    cursor: C,
    visuals: V,
    config: GhostConfig,
    state: GhostState,
    /// Interpolated physics pose
    transform: Transform,
    /// Pose shifted from the physics reference point to the model pivot
    visual_transform: Transform,
    xyz_front: Vec3,
    nitro_intensity: f32,
}

impl<C: PlaybackCursor, V: GhostVisuals> GhostKart<C, V> {
    pub fn new(cursor: C, visuals: V, config: GhostConfig) -> Self {
        Self {
            frames: FrameStore::new(config.model_lowest_point),
            cursor,
            visuals,
            config,
            state: GhostState::Active,
            transform: Transform::IDENTITY,
            visual_transform: Transform::IDENTITY,
            xyz_front: Vec3::ZERO,
            nitro_intensity: 0.0,
        }
    }

    /// Ghost over an already loaded store.
    ///
    /// The store's lowest model point should match `config.model_lowest_point`.
    pub fn with_frames(cursor: C, visuals: V, config: GhostConfig, frames: FrameStore) -> Self {
        let mut kart = Self::new(cursor, visuals, config);
        kart.frames = frames;
        kart
    }

    /// Append a recorded frame (load phase only).
    ///
    /// The cursor is not told about the frame: build it from the same frames
    /// (see `TimedCursor::from_store`) or the ghost may end immediately.
    pub fn add_frame(&mut self, frame: Frame) -> Result<usize, GhostError> {
        self.frames.append(frame)
    }

    /// Advance the replay by `dt` and refresh the pose and effects
    pub fn update(&mut self, dt: f32) {
        if self.state == GhostState::Ended {
            return;
        }

        self.cursor.advance(dt);
        if self.cursor.is_at_end() || self.frames.is_empty() {
            self.end();
            return;
        }

        let idx = self.cursor.current_index();
        let rd = self.cursor.interpolation_fraction();
        assert!(
            idx < self.frames.len().saturating_sub(1),
            "cursor index {} has no following frame ({} frames)",
            idx,
            self.frames.len()
        );

        let current = *self.frames.frame_at(idx);
        let next = self.frames.frame_at(idx + 1);

        self.nitro_intensity = if current.events.on_nitro {
            saturate(current.physics.speed.abs() / self.config.max_engine_speed)
        } else {
            0.0
        };
        self.visuals.update_nitro(self.nitro_intensity);

        // Re-fires every tick the recorded flag stays set
        if current.events.on_zipper {
            self.visuals.show_zipper_fire();
        }

        self.transform = lerp_transform(&current.transform, &next.transform, rd);

        let baseline = self.frames.baseline_offset().unwrap_or(0.0);
        let center_shift = self.transform.basis_mul(KART_UP * baseline);
        self.visual_transform = Transform {
            translation: self.transform.translation + center_shift,
            rotation: self.transform.rotation,
        };

        self.visuals.animate(&KartAnimation {
            dt,
            distance: dt * current.physics.speed,
            steer: current.physics.steer,
            speed: current.physics.speed,
            frame_index: idx,
        });

        self.xyz_front = self.transform.transform_point(self.config.front_offset());
        self.visuals.update_effects(dt);
    }

    fn end(&mut self) {
        log::debug!(
            "Ghost replay ended at frame {} of {}",
            self.cursor.current_index(),
            self.frames.len()
        );
        self.state = GhostState::Ended;
        self.nitro_intensity = 0.0;
        self.visuals.set_visible(false);
    }

    /// Show the ghost again and snap it to frame 0
    pub fn reset(&mut self) {
        log::info!("Ghost reset ({} frames)", self.frames.len());
        self.state = GhostState::Active;
        self.visuals.set_visible(true);
        self.cursor.reset();
        self.update(0.0);
    }

    /// Recorded speed at the current frame, not interpolated.
    ///
    /// Callers check `is_at_end()` first; an out-of-range cursor panics.
    pub fn speed(&self) -> f32 {
        self.frames.frame_at(self.cursor.current_index()).physics.speed
    }

    /// World-space nose of the kart
    pub fn front_point_world(&self) -> Vec3 {
        self.xyz_front
    }

    pub fn is_at_end(&self) -> bool {
        self.state == GhostState::Ended
    }

    pub fn state(&self) -> GhostState {
        self.state
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn visual_transform(&self) -> &Transform {
        &self.visual_transform
    }

    pub fn nitro_intensity(&self) -> f32 {
        self.nitro_intensity
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &FrameStore {
        &self.frames
    }

    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    pub fn visuals(&self) -> &V {
        &self.visuals
    }

    pub fn config(&self) -> &GhostConfig {
        &self.config
    }
}
