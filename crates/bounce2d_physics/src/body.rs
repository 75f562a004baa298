//! Screen-bounded body with wall reflection

use bounce2d_math::{IVec2, Vec2};

use crate::bounds::ScreenBounds;

/// Axes on which a body hit a wall during the last step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reflection {
    pub x: bool,
    pub y: bool,
}

impl Reflection {
    /// True if either axis reflected
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// A body moving by a whole number of pixels per tick
#[derive(Clone, Debug, PartialEq)]
pub struct Body2D {
    /// Top-left position in screen pixels
    pub position: Vec2,
    /// Pixels per tick. Only the sign changes, on wall contact.
    pub velocity: IVec2,
    /// Width and height in pixels
    pub extent: (u32, u32),
}

impl Body2D {
    /// Create a body at rest
    pub fn new(position: Vec2, extent: (u32, u32)) -> Self {
        Self {
            position,
            velocity: IVec2::ZERO,
            extent,
        }
    }

    /// Set the velocity of this body
    pub fn with_velocity(mut self, velocity: IVec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Advance one tick
    ///
    /// Moves by `velocity`, then per axis clamps to `[0, bound - extent]` and negates that
    /// velocity component on contact. The far edge is checked first, so a body wider than
    /// the screen ends up pinned to the (negative) far limit.
    pub fn step(&mut self, bounds: &ScreenBounds) -> Reflection {
        self.position += self.velocity;

        let x = reflect_axis(
            &mut self.position.x,
            &mut self.velocity.x,
            bounds.max_x(self.extent.0),
        );
        let y = reflect_axis(
            &mut self.position.y,
            &mut self.velocity.y,
            bounds.max_y(self.extent.1),
        );

        Reflection { x, y }
    }

    /// Whether the body currently satisfies `0 <= pos <= bound - extent` on both axes
    pub fn is_within(&self, bounds: &ScreenBounds) -> bool {
        let max_x = bounds.max_x(self.extent.0);
        let max_y = bounds.max_y(self.extent.1);
        (0.0..=max_x).contains(&self.position.x) && (0.0..=max_y).contains(&self.position.y)
    }
}

/// Clamp one coordinate into `[0, max]`, flipping `velocity` when it was out of range
fn reflect_axis(position: &mut f32, velocity: &mut i32, max: f32) -> bool {
    if *position > max {
        *position = max;
        *velocity = -*velocity;
        true
    } else if *position < 0.0 {
        *position = 0.0;
        *velocity = -*velocity;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> ScreenBounds {
        ScreenBounds::new(800, 600)
    }

    #[test]
    fn test_free_motion() {
        let mut body = Body2D::new(Vec2::new(100.0, 50.0), (512, 512)).with_velocity(IVec2::new(4, 4));
        let hit = body.step(&screen());

        assert_eq!(body.position, Vec2::new(104.0, 54.0));
        assert_eq!(body.velocity, IVec2::new(4, 4));
        assert!(!hit.any());
    }

    #[test]
    fn test_right_and_bottom_overshoot() {
        // Starts past the right edge; clamped on the first tick, not before
        let mut body = Body2D::new(Vec2::new(800.0, 445.0), (512, 512)).with_velocity(IVec2::new(4, 4));
        assert!(!body.is_within(&screen()));

        let hit = body.step(&screen());

        assert_eq!(body.position.x, 288.0);
        assert_eq!(body.velocity.x, -4);
        assert_eq!(body.position.y, 88.0);
        assert_eq!(body.velocity.y, -4);
        assert_eq!(hit, Reflection { x: true, y: true });
        assert!(body.is_within(&screen()));
    }

    #[test]
    fn test_left_and_top_overshoot() {
        let mut body = Body2D::new(Vec2::ZERO, (512, 512)).with_velocity(IVec2::new(-4, -4));
        body.step(&screen());

        assert_eq!(body.position, Vec2::ZERO);
        assert_eq!(body.velocity, IVec2::new(4, 4));
    }

    #[test]
    fn test_axes_are_independent() {
        let mut body = Body2D::new(Vec2::new(286.0, 10.0), (512, 512)).with_velocity(IVec2::new(4, 4));
        let hit = body.step(&screen());

        assert_eq!(hit, Reflection { x: true, y: false });
        assert_eq!(body.position, Vec2::new(288.0, 14.0));
        assert_eq!(body.velocity, IVec2::new(-4, 4));
    }

    #[test]
    fn test_landing_exactly_on_edge_does_not_reflect() {
        let mut body = Body2D::new(Vec2::new(284.0, 0.0), (512, 512)).with_velocity(IVec2::new(4, 0));
        let hit = body.step(&screen());

        assert_eq!(body.position.x, 288.0);
        assert_eq!(body.velocity.x, 4);
        assert!(!hit.x);
    }

    #[test]
    fn test_fractional_position_is_preserved() {
        let mut body = Body2D::new(Vec2::new(10.5, 20.25), (16, 16)).with_velocity(IVec2::new(-3, 2));
        body.step(&screen());
        assert_eq!(body.position, Vec2::new(7.5, 22.25));
    }

    #[test]
    fn test_zero_velocity_stays_put() {
        let mut body = Body2D::new(Vec2::new(5.0, 5.0), (16, 16));
        for _ in 0..10 {
            body.step(&screen());
        }
        assert_eq!(body.position, Vec2::new(5.0, 5.0));
    }
}
