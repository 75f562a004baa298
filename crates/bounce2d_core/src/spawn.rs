//! Serializable ball templates

use serde::{Deserialize, Serialize};

use bounce2d_math::{IVec2, Vec2};

use crate::ball::Ball;

/// Starting state of one ball, as written in configuration
///
/// The frame size is not part of the template; every ball uses the frame size of the
/// shared spritesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BallSpawn {
    /// Top-left position [x, y] in pixels
    pub position: [f32; 2],
    /// Velocity [vx, vy] in pixels per tick
    pub velocity: [i32; 2],
}

impl BallSpawn {
    pub fn new(position: [f32; 2], velocity: [i32; 2]) -> Self {
        Self { position, velocity }
    }

    /// Build a ball from this template
    pub fn to_ball(&self, frame_width: u32, frame_height: u32) -> Ball {
        Ball::new(
            Vec2::from(self.position),
            IVec2::from(self.velocity),
            frame_width,
            frame_height,
        )
    }
}

impl Default for BallSpawn {
    /// Starts just past the right edge, 155 pixels above the bottom of an 800x600 screen
    fn default() -> Self {
        Self::new([800.0, 445.0], [4, 4])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ball() {
        let ball = BallSpawn::new([10.0, 20.0], [-1, 2]).to_ball(32, 32);
        assert_eq!(ball.position(), Vec2::new(10.0, 20.0));
        assert_eq!(ball.velocity(), IVec2::new(-1, 2));
        assert_eq!(ball.frame_size(), (32, 32));
    }

    #[test]
    fn test_default_spawn() {
        let spawn = BallSpawn::default();
        assert_eq!(spawn.position, [800.0, 445.0]);
        assert_eq!(spawn.velocity, [4, 4]);
    }
}
