//! Ball collection
//!
//! The BallWorld owns every ball for the lifetime of the program. Balls are never added or
//! removed after construction, and are always visited in insertion order.

use log::trace;

use bounce2d_physics::ScreenBounds;

use crate::ball::Ball;
use crate::spawn::BallSpawn;

/// All balls and the screen they bounce within
pub struct BallWorld {
    balls: Vec<Ball>,
    bounds: ScreenBounds,
}

impl BallWorld {
    /// Create an empty world
    pub fn new(bounds: ScreenBounds) -> Self {
        Self {
            balls: Vec::new(),
            bounds,
        }
    }

    /// Build a world from spawn templates, all sharing one frame size
    pub fn from_spawns(
        bounds: ScreenBounds,
        spawns: &[BallSpawn],
        frame_width: u32,
        frame_height: u32,
    ) -> Self {
        Self {
            balls: spawns
                .iter()
                .map(|s| s.to_ball(frame_width, frame_height))
                .collect(),
            bounds,
        }
    }

    /// Add a ball to the end of the update order
    pub fn add_ball(&mut self, ball: Ball) {
        self.balls.push(ball);
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    #[inline]
    pub fn ball_count(&self) -> usize {
        self.balls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    /// Update every ball once, in insertion order
    pub fn update(&mut self) {
        self.update_each(|_| {});
    }

    /// Update every ball once, calling `after_update` on each ball right after its own update
    ///
    /// The frame loop draws from this callback so each ball is copied to the screen with its
    /// freshly updated position.
    pub fn update_each<F: FnMut(&Ball)>(&mut self, mut after_update: F) {
        for (i, ball) in self.balls.iter_mut().enumerate() {
            let hit = ball.update(&self.bounds);
            if hit.any() {
                trace!("ball {} reflected (x: {}, y: {})", i, hit.x, hit.y);
            }
            after_update(ball);
        }
    }

    /// Iterate over all balls
    pub fn iter(&self) -> impl Iterator<Item = &Ball> {
        self.balls.iter()
    }
}
