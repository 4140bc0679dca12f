use glam::Vec2;
use hecs::World;

use crate::{Ball, Config, Events, Paddle, Side};

/// True when the ball touches or passes the top or bottom edge.
///
/// Inclusive on both edges, and true for any out-of-bounds Y so a ball that
/// skipped past an edge in one frame still registers.
pub fn vertical_wall_hit(ball: &Ball, screen_height: f32) -> bool {
    ball.pos.y + ball.radius >= screen_height || ball.pos.y - ball.radius <= 0.0
}

/// Reflect the ball off the top/bottom walls. Velocity only; the position
/// is left untouched.
pub fn bounce_off_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if vertical_wall_hit(ball, config.screen_height) {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Resolve a ball/paddle contact. Returns true when a collision was resolved.
///
/// Closest-point-on-box against the ball centre; a hit reverses the
/// horizontal velocity, pushes the ball clear of the box along X, and adds
/// spin proportional to how far from the paddle centre it struck. The
/// pushback guarantees the ball is no longer inside the box, so resolving
/// a second time is a no-op.
pub fn resolve_paddle_collision(
    ball: &mut Ball,
    paddle_pos: Vec2,
    width: f32,
    height: f32,
    config: &Config,
) -> bool {
    let closest = Vec2::new(
        ball.pos.x.clamp(paddle_pos.x, paddle_pos.x + width),
        ball.pos.y.clamp(paddle_pos.y, paddle_pos.y + height),
    );
    if (ball.pos - closest).length_squared() >= ball.radius * ball.radius {
        return false;
    }

    ball.vel.x = -ball.vel.x;

    if ball.vel.x > 0.0 {
        // Now moving right: clear the paddle's right face.
        ball.pos.x = paddle_pos.x + width + ball.radius + config.paddle_pushback;
    } else {
        ball.pos.x = paddle_pos.x - ball.radius - config.paddle_pushback;
    }

    let paddle_center_y = paddle_pos.y + height / 2.0;
    let spin_factor = (ball.pos.y - paddle_center_y) / (height / 2.0);
    ball.vel.y += spin_factor * config.spin_multiplier;

    true
}

/// Resolve the ball against both paddles, player first.
///
/// The player-first order is deliberate: when both paddles could touch the
/// ball in the same frame only the first resolution is meaningful, and
/// reproducibility wins over physical fairness.
pub fn resolve_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let mut paddles: Vec<(Side, Vec2, f32, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.pos, p.width, p.height))
        .collect();
    paddles.sort_by_key(|(side, ..)| match side {
        Side::Player => 0u8,
        Side::Opponent => 1u8,
    });

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for &(_side, pos, width, height) in &paddles {
            if resolve_paddle_collision(ball, pos, width, height, config) {
                events.ball_hit_paddle = true;
            }
        }
    }
}
