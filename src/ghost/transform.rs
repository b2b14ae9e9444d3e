//! Rigid transforms and their interpolation
//!
//! A transform is a translation plus a unit rotation. Position blends
//! linearly, orientation blends along the shortest great arc.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::normalize_or_identity;

/// Position + orientation of a kart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    pub fn from_translation(translation: Vec3) -> Self {
        Self::new(translation, Quat::IDENTITY)
    }

    /// Rotate a local vector into world space (no translation)
    #[inline]
    pub fn basis_mul(&self, local: Vec3) -> Vec3 {
        self.rotation * local
    }

    /// Map a local point into world space
    #[inline]
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.translation + self.basis_mul(local)
    }

    pub fn is_finite(&self) -> bool {
        self.translation.is_finite() && self.rotation.is_finite()
    }
}

/// Interpolate between two recorded transforms.
///
/// `rd` is the progress from `a` toward `b`. Slerp keeps angular velocity
/// constant across the interval; the result is re-normalized so float drift
/// never hands a non-unit rotation to the renderer.
pub fn lerp_transform(a: &Transform, b: &Transform, rd: f32) -> Transform {
    let translation = (1.0 - rd) * a.translation + rd * b.translation;
    let rotation = normalize_or_identity(
        normalize_or_identity(a.rotation).slerp(normalize_or_identity(b.rotation), rd),
    );
    Transform {
        translation,
        rotation,
    }
}
