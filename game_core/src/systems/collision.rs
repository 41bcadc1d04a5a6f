use crate::{Ball, Config, Events, Player};

/// Bounce the ball off the top and bottom walls
///
/// Only a ball moving into a wall is reflected, so one that overshot the wall
/// is not flipped back and forth. No position correction is applied.
pub fn check_wall_collision(ball: &mut Ball, config: &Config, events: &mut Events) {
    let hit_top = ball.pos.y <= 0.0 && ball.vel.y < 0.0;
    let hit_bottom = ball.pos.y + ball.size >= config.playfield_height && ball.vel.y > 0.0;

    if hit_top || hit_bottom {
        ball.reflect_vertical();
        events.ball_hit_wall = true;
    }
}

/// Bounce the ball off whichever paddle it reached
pub fn check_paddle_collisions(ball: &mut Ball, players: &[Player], events: &mut Events) {
    for player in players {
        if ball.check_paddle_collision(&player.paddle) {
            events.ball_hit_paddle = true;
            return;
        }
    }
}
