//! Error types for replay loading and configuration

/// Errors raised while loading frames or configuration.
///
/// Playback itself never returns these: a cursor that points outside the
/// frame store is a broken contract and panics.
#[derive(Debug, thiserror::Error)]
pub enum GhostError {
    #[error("Frame {index} recorded at {time}s is earlier than previous frame at {previous}s")]
    OutOfOrder { index: usize, time: f32, previous: f32 },

    #[error("Frame {index} contains a non-finite value")]
    NonFinite { index: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
