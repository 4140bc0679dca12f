use hecs::World;

use crate::{Ball, Config, Paddle, Side};

/// Steer the opponent paddle towards the ball.
///
/// The dead zone around the paddle centre stops it jittering once aligned,
/// and the speed factor below 1.0 keeps the opponent beatable. Must run
/// before `move_paddles` so the tracking velocity takes effect this frame.
pub fn track_ball(world: &mut World, config: &Config) {
    let ball_y = {
        let mut query = world.query::<&Ball>();
        match query.iter().next() {
            Some((_e, ball)) => ball.pos.y,
            None => return,
        }
    };

    let ai_speed = config.paddle_speed * config.ai_speed_factor;
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != Side::Opponent {
            continue;
        }
        let center = paddle.center_y();
        if ball_y < center - config.ai_dead_zone {
            paddle.vel = -ai_speed;
        } else if ball_y > center + config.ai_dead_zone {
            paddle.vel = ai_speed;
        } else {
            paddle.vel = 0.0;
        }
    }
}
