//! Deterministic ghost playback module
//!
//! Replays a recorded run without re-running physics:
//! - Frames are loaded once, then read-only
//! - The cursor supplies the frame index, no searching here
//! - No wall-clock reads, only the `dt` handed in by the game loop

pub mod cursor;
pub mod frame;
pub mod kart;
pub mod transform;
pub mod visuals;

pub use cursor::{PlaybackCursor, TimedCursor};
pub use frame::{Frame, FrameStore, PhysicsInfo, ReplayEvents};
pub use kart::{GhostKart, GhostState};
pub use transform::{Transform, lerp_transform};
pub use visuals::{GhostVisuals, KartAnimation, NullVisuals};
