use hecs::World;

use crate::{Ball, Config, Events, Score, Side};

/// Check whether the ball left the arena horizontally and award the point.
///
/// The ball is left where it is; the match controller decides whether to
/// reset it or end the match.
pub fn check_scoring(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    for (_entity, ball) in world.query::<&Ball>().iter() {
        if ball.pos.x < 0.0 {
            score.increment(Side::Opponent);
            events.opponent_scored = true;
        } else if ball.pos.x > config.screen_width {
            score.increment(Side::Player);
            events.player_scored = true;
        }
    }
}
