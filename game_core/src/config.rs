use glam::Vec2;

use crate::{ConfigError, Params, Side};

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_edge_offset: f32,
    pub ball_size: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    pub ai_lerp_factor: f32,
    pub win_score: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            playfield_width: Params::PLAYFIELD_WIDTH,
            playfield_height: Params::PLAYFIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_edge_offset: Params::PADDLE_EDGE_OFFSET,
            ball_size: Params::BALL_SIZE,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y: Params::BALL_SPEED_Y,
            ai_lerp_factor: Params::AI_LERP_FACTOR,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning on a playfield of the given size (the host canvas)
    pub fn with_playfield(width: f32, height: f32) -> Self {
        Self {
            playfield_width: width,
            playfield_height: height,
            ..Self::default()
        }
    }

    /// Check that the configuration describes a playable field
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.playfield_width > 0.0 && self.playfield_height > 0.0) {
            return Err(ConfigError::InvalidPlayfield {
                width: self.playfield_width,
                height: self.playfield_height,
            });
        }

        for (name, value) in [
            ("paddle width", self.paddle_width),
            ("paddle height", self.paddle_height),
            ("paddle speed", self.paddle_speed),
            ("ball size", self.ball_size),
            ("ball horizontal speed", self.ball_speed_x),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        if self.paddle_height > self.playfield_height {
            return Err(ConfigError::PaddleTooTall {
                paddle_height: self.paddle_height,
                playfield_height: self.playfield_height,
            });
        }

        if 2.0 * (self.paddle_edge_offset + self.paddle_width) >= self.playfield_width {
            return Err(ConfigError::PaddlesOverlap {
                width: self.playfield_width,
                paddle_width: self.paddle_width,
                offset: self.paddle_edge_offset,
            });
        }

        if !(self.ai_lerp_factor > 0.0 && self.ai_lerp_factor <= 1.0) {
            return Err(ConfigError::InvalidLerpFactor(self.ai_lerp_factor));
        }

        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }

        Ok(())
    }

    /// Get X position (left edge) for the paddle on a side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_edge_offset,
            Side::Right => self.playfield_width - self.paddle_width - self.paddle_edge_offset,
        }
    }

    /// Y position that vertically centres a paddle
    pub fn paddle_start_y(&self) -> f32 {
        (self.playfield_height - self.paddle_height) / 2.0
    }

    /// Clamp paddle Y (top edge) to playfield bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.min(self.playfield_height - self.paddle_height).max(0.0)
    }

    /// Where the ball is placed on every serve
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.playfield_width / 2.0, self.playfield_height / 2.0)
    }
}
