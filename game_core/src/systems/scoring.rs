use log::debug;

use crate::{Ball, Config, Events, GameRng, Player, Side};

/// Check if ball left the playfield; award the point and re-serve
///
/// Returns the side that scored. At most one side scores per call.
pub fn check_scoring(
    ball: &mut Ball,
    players: &mut [Player; 2],
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) -> Option<Side> {
    let scorer = if ball.pos.x < 0.0 {
        Side::Left.opponent()
    } else if ball.pos.x > config.playfield_width {
        Side::Right.opponent()
    } else {
        return None;
    };

    let player = &mut players[scorer.index()];
    player.score += 1;
    match scorer {
        Side::Left => events.left_scored = true,
        Side::Right => events.right_scored = true,
    }
    debug!("{} scored, now {}", player.name, player.score);

    ball.reset(config, rng);
    Some(scorer)
}
