//! Ghost Replay - playback of a recorded kart run
//!
//! Core modules:
//! - `ghost`: Deterministic playback (frame store, cursor, interpolation engine)
//! - `config`: Kart model constants and timestep
//! - `replay`: Load-phase helpers for recorded runs
//! - `error`: Error types for loading and validation

pub mod config;
pub mod error;
pub mod ghost;
pub mod replay;

pub use config::GhostConfig;
pub use error::GhostError;
pub use replay::GhostReplay;

use glam::{Quat, Vec3};

/// Playback configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz, matches the recording rate)
    pub const SIM_DT: f32 = 1.0 / 120.0;

    /// Default kart engine top speed (m/s)
    pub const DEFAULT_MAX_ENGINE_SPEED: f32 = 20.0;
    /// Default kart length (m), nose is half of this ahead of the center
    pub const DEFAULT_KART_LENGTH: f32 = 1.5;
}

/// Local up axis of a kart
pub const KART_UP: Vec3 = Vec3::Y;
/// Local forward axis of a kart
pub const KART_FORWARD: Vec3 = Vec3::Z;

/// Returns `q` normalized, or identity if it degenerated to zero length
#[inline]
pub fn normalize_or_identity(q: Quat) -> Quat {
    let len = q.length();
    if len > f32::EPSILON && len.is_finite() {
        q / len
    } else {
        Quat::IDENTITY
    }
}

/// Clamp to the unit interval, mapping NaN to 0
#[inline]
pub fn saturate(x: f32) -> f32 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}
