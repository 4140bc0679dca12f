use glam::Vec2;

use crate::Config;

/// Which side of the board a paddle defends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Human-controlled paddle on the left.
    Player,
    /// AI-controlled paddle on the right.
    Opponent,
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Reset ball to the screen centre, serving at the scaled base velocity.
    pub fn reset(&mut self, config: &Config, speed_multiplier: f32) {
        self.pos = Vec2::new(config.screen_width / 2.0, config.screen_height / 2.0);
        self.vel = config.serve_velocity * speed_multiplier;
    }
}

/// Paddle component - position is the top-left corner
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub vel: f32, // vertical velocity, pixels per frame
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            side,
            pos,
            width,
            height,
            vel: 0.0,
        }
    }

    /// Vertical centre of the paddle face.
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }
}
