use hecs::World;

use crate::{Config, Paddle, Side};

/// Apply the human movement intent to the player paddle.
///
/// `dir` is -1 (up), 0 (stop) or 1 (down); applying the same direction
/// twice leaves the velocity unchanged.
pub fn apply_player_input(world: &mut World, config: &Config, dir: i8) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.vel = dir.signum() as f32 * config.paddle_speed;
        }
    }
}
