//! Effects collaborator for ghost karts
//!
//! The engine pushes its per-tick outputs through this trait; animation,
//! particles and scene visibility live on the other side of it.

/// Per-tick animation payload, taken straight from the sampled channels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KartAnimation {
    pub dt: f32,
    /// Distance covered this tick (speed * dt), drives wheel spin
    pub distance: f32,
    pub steer: f32,
    pub speed: f32,
    pub frame_index: usize,
}

pub trait GhostVisuals {
    /// Nitro flame intensity in [0, 1]
    fn update_nitro(&mut self, intensity: f32);

    /// Speed-pad flame burst
    fn show_zipper_fire(&mut self);

    /// Wheel rotation and steering lean
    fn animate(&mut self, animation: &KartAnimation);

    fn set_visible(&mut self, visible: bool);

    /// Called once at the end of every producing tick
    fn update_effects(&mut self, _dt: f32) {}
}

/// Discards everything, for headless playback
#[derive(Debug, Clone, Copy, Default)]
pub struct NullVisuals;

impl GhostVisuals for NullVisuals {
    fn update_nitro(&mut self, _intensity: f32) {}

    fn show_zipper_fire(&mut self) {}

    fn animate(&mut self, _animation: &KartAnimation) {}

    fn set_visible(&mut self, _visible: bool) {}
}
