use glam::Vec2;

use crate::Side;

/// Game tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_OFFSET: f32 = 20.0; // gap between paddle and screen edge
    pub const PADDLE_SPEED: f32 = 6.0; // pixels per frame

    // Opponent AI
    pub const AI_SPEED_FACTOR: f32 = 0.85;
    pub const AI_DEAD_ZONE: f32 = 10.0;

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const SERVE_VELOCITY: Vec2 = Vec2::new(4.0, 2.0);
    pub const SPIN_MULTIPLIER: f32 = 3.0;
    pub const PADDLE_PUSHBACK: f32 = 2.0;

    // Match
    pub const POINTS_TO_WIN: u8 = 5;
    pub const SPEED_STEP: f32 = 0.02; // multiplier growth per point scored
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_offset: f32,
    pub paddle_speed: f32,
    pub ai_speed_factor: f32,
    pub ai_dead_zone: f32,
    pub ball_radius: f32,
    pub serve_velocity: Vec2,
    pub spin_multiplier: f32,
    pub paddle_pushback: f32,
    pub points_to_win: u8,
    pub speed_step: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_offset: Params::PADDLE_OFFSET,
            paddle_speed: Params::PADDLE_SPEED,
            ai_speed_factor: Params::AI_SPEED_FACTOR,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            ball_radius: Params::BALL_RADIUS,
            serve_velocity: Params::SERVE_VELOCITY,
            spin_multiplier: Params::SPIN_MULTIPLIER,
            paddle_pushback: Params::PADDLE_PUSHBACK,
            points_to_win: Params::POINTS_TO_WIN,
            speed_step: Params::SPEED_STEP,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) for a paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Player => self.paddle_offset,
            Side::Opponent => self.screen_width - self.paddle_width - self.paddle_offset,
        }
    }

    /// Starting Y so the paddle is vertically centred
    pub fn paddle_start_y(&self) -> f32 {
        (self.screen_height - self.paddle_height) / 2.0
    }

    /// Largest legal top-left Y for a paddle of the given height.
    /// Zero when the paddle is taller than the screen.
    pub fn max_paddle_y(&self, paddle_height: f32) -> f32 {
        (self.screen_height - paddle_height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Player), 20.0, "Left paddle X");
        assert_eq!(config.paddle_x(Side::Opponent), 1165.0, "Right paddle X");
    }

    #[test]
    fn test_config_paddle_start_y() {
        let config = Config::new();
        assert_eq!(config.paddle_start_y(), 250.0);
    }

    #[test]
    fn test_max_paddle_y_oversized_paddle() {
        let config = Config::new();
        assert_eq!(config.max_paddle_y(100.0), 500.0);
        assert_eq!(
            config.max_paddle_y(800.0),
            0.0,
            "Oversized paddle pins to the top edge"
        );
    }
}
