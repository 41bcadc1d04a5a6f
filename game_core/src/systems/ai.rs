use crate::{Ball, Paddle};

/// Steer the computer paddle toward the ball
///
/// Proportional controller: closes `lerp_factor` of the gap between the
/// paddle centre and the ball's top edge each frame. It can overshoot a fast
/// ball, which is the intended difficulty.
pub fn drive_computer_paddle(paddle: &mut Paddle, ball: &Ball, lerp_factor: f32) {
    paddle.y += (ball.pos.y - paddle.center_y()) * lerp_factor;
}
