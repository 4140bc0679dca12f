use hecs::World;

use crate::{Ball, Config, Paddle};

/// Advance paddles by their velocity and clamp them to the screen.
///
/// A paddle taller than the screen clamps to y = 0 even though it runs
/// past the bottom edge.
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.pos.y += paddle.vel;
        paddle.pos.y = paddle.pos.y.clamp(0.0, config.max_paddle_y(paddle.height));
    }
}

/// Move the ball by its velocity. No clamping: an out-of-bounds X is how
/// scoring is detected.
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
