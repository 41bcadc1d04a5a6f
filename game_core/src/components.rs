use glam::Vec2;
use rand::Rng;

use crate::{Aabb, Color, Config, GameRng, Surface};

/// Half of the playfield a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Slot of this side's player in the game's player array
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// A player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    x: f32,
    pub y: f32, // top edge, clamped to the playfield every frame
    pub speed: f32,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            x: config.paddle_x(side),
            y: config.paddle_start_y(),
            speed: config.paddle_speed,
            size: Vec2::new(config.paddle_width, config.paddle_height),
        }
    }

    /// Left edge; fixed for the paddle's lifetime
    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.size.y / 2.0
    }

    pub fn move_up(&mut self) {
        self.y -= self.speed;
    }

    pub fn move_down(&mut self) {
        self.y += self.speed;
    }

    /// Keep the whole paddle inside `[0, playfield_height]`
    pub fn clamp_to_bounds(&mut self, playfield_height: f32) {
        self.y = self.y.min(playfield_height - self.size.y).max(0.0);
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(Vec2::new(self.x, self.y), self.size)
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        let bounds = self.bounds();
        surface.fill_rect(
            bounds.min.x,
            bounds.min.y,
            bounds.width(),
            bounds.height(),
            Color::WHITE,
        );
    }
}

/// The pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // top-left corner
    pub vel: Vec2, // pixels per frame
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    /// Ball at the playfield centre with the configured opening velocity
    pub fn serve(config: &Config) -> Self {
        Self::new(
            config.ball_spawn(),
            Vec2::new(config.ball_speed_x, config.ball_speed_y),
            config.ball_size,
        )
    }

    pub fn move_step(&mut self) {
        self.pos += self.vel;
    }

    pub fn reflect_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }

    pub fn reflect_horizontal(&mut self) {
        self.vel.x = -self.vel.x;
    }

    /// Bounce off `paddle` if the ball has reached its face while heading
    /// toward it and the vertical spans overlap. Returns whether it bounced.
    ///
    /// The face test is an inequality so a ball that travels past the face
    /// within a single frame still bounces.
    pub fn check_paddle_collision(&mut self, paddle: &Paddle) -> bool {
        let ball = self.bounds();
        let face = paddle.bounds();

        let (reached, approaching) = match paddle.side {
            Side::Left => (ball.min.x <= face.max.x, self.vel.x < 0.0),
            Side::Right => (ball.max.x >= face.min.x, self.vel.x > 0.0),
        };

        if reached && approaching && ball.overlaps_y(&face) {
            self.reflect_horizontal();
            true
        } else {
            false
        }
    }

    /// Recentre after a point: serve back toward the side that just
    /// scored, with a random vertical direction
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        self.pos = config.ball_spawn();
        self.vel.x = -self.vel.x;
        self.vel.y = if rng.0.gen_bool(0.5) {
            config.ball_speed_y
        } else {
            -config.ball_speed_y
        };
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(self.size))
    }

    pub fn draw<S: Surface>(&self, surface: &mut S) {
        surface.fill_rect(self.pos.x, self.pos.y, self.size, self.size, Color::WHITE);
    }
}

/// A named participant with a paddle and a score
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub paddle: Paddle,
    pub score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, paddle: Paddle) -> Self {
        Self {
            name: name.into(),
            paddle,
            score: 0,
        }
    }

    /// Zero the score and recentre the paddle for a fresh match
    pub fn reset(&mut self, config: &Config) {
        self.score = 0;
        self.paddle.y = config.paddle_start_y();
    }
}
