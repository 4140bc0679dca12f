pub mod components;
pub mod config;
pub mod leaderboard;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use resources::*;
pub use session::{MatchPhase, MatchSession};

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one fixed frame of the Pong simulation.
///
/// The loop targets 60 updates per second and velocities are expressed in
/// pixels per frame, so there is no delta-time scaling. The order is fixed
/// for reproducibility: input, paddles, ball, paddle collisions (player
/// first), wall bounce, scoring.
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    player_dir: i8,
) {
    events.clear();

    apply_player_input(world, config, player_dir);
    track_ball(world, config);
    move_paddles(world, config);
    move_ball(world);
    resolve_paddle_collisions(world, config, events);
    bounce_off_walls(world, config, events);
    check_scoring(world, config, score, events);
}

/// Helper to create the ball entity at the serve position
pub fn create_ball(world: &mut World, config: &Config) -> hecs::Entity {
    let pos = Vec2::new(config.screen_width / 2.0, config.screen_height / 2.0);
    world.spawn((Ball::new(pos, config.serve_velocity, config.ball_radius),))
}

/// Helper to create a paddle entity on its side of the board
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let pos = Vec2::new(config.paddle_x(side), config.paddle_start_y());
    world.spawn((Paddle::new(
        side,
        pos,
        config.paddle_width,
        config.paddle_height,
    ),))
}
