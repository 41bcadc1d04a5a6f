use crate::{InputTracker, Paddle};

/// Move a human-controlled paddle from the held keys
///
/// Both keys held cancel out. Bounds are left to [`clamp_paddles`](crate::systems::clamp_paddles).
pub fn apply_human_input(paddle: &mut Paddle, input: &InputTracker, up_key: &str, down_key: &str) {
    if input.is_pressed(up_key) {
        paddle.move_up();
    }
    if input.is_pressed(down_key) {
        paddle.move_down();
    }
}
