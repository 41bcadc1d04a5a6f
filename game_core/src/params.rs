/// Game tuning parameters for Pong
///
/// Distances are in canvas pixels and speeds in pixels per frame; the
/// simulation assumes a constant frame rate and never scales by elapsed time.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 6.0;
    pub const PADDLE_EDGE_OFFSET: f32 = 15.0; // gap between paddle and side wall

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED_X: f32 = 5.0;
    pub const BALL_SPEED_Y: f32 = 3.0;

    // Computer paddle
    pub const AI_LERP_FACTOR: f32 = 0.1;

    // Score
    pub const WIN_SCORE: u32 = 5; // First to 5 wins
}
