use crate::{Ball, Config, Player};

/// Clamp every paddle back inside the playfield
pub fn clamp_paddles(players: &mut [Player], config: &Config) {
    for player in players.iter_mut() {
        player.paddle.clamp_to_bounds(config.playfield_height);
    }
}

/// Move ball based on velocity
pub fn move_ball(ball: &mut Ball) {
    ball.move_step();
}
