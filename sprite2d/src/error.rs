use thiserror::Error;

/// Errors surfaced by sprite setup. Steady-state conditions such as TTL
/// expiry or a finished animation are state transitions, not errors.
#[derive(Debug, Error)]
pub enum SpriteError {
    #[error("frame count must be at least 1")]
    ZeroFrameCount,

    #[error("texture width {width} is not evenly divisible by frame count {frame_count}")]
    UnevenFrameStrip { width: u32, frame_count: u32 },

    #[error("texture has zero width or height")]
    EmptyTexture,

    #[error("alpha buffer holds {actual} values but the texture needs {expected}")]
    MaskSizeMismatch { expected: usize, actual: usize },

    #[error("invalid sprite configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SpriteError>;
