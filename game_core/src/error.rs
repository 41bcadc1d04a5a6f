use thiserror::Error;

/// Reasons a [`Config`](crate::Config) cannot drive a match
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("playfield must have a positive size, got {width}x{height}")]
    InvalidPlayfield { width: f32, height: f32 },

    #[error("paddle height {paddle_height} does not fit a playfield {playfield_height} high")]
    PaddleTooTall {
        paddle_height: f32,
        playfield_height: f32,
    },

    #[error("paddles overlap: playfield {width} wide cannot hold two paddles {paddle_width} wide at offset {offset}")]
    PaddlesOverlap {
        width: f32,
        paddle_width: f32,
        offset: f32,
    },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("lerp factor must be in (0, 1], got {0}")]
    InvalidLerpFactor(f32),

    #[error("win score must be at least 1")]
    ZeroWinScore,
}
