//! Ball entity

use bounce2d_math::{IVec2, Rect, Vec2};
use bounce2d_physics::{Body2D, Reflection, ScreenBounds};

use crate::sprite::SpriteSheet;

/// A bouncing sprite
///
/// Position and velocity live in the physics body; the clip is the region of the shared
/// spritesheet texture drawn for this ball.
#[derive(Clone, Debug, PartialEq)]
pub struct Ball {
    body: Body2D,
    sheet: SpriteSheet,
    clip: Rect,
}

impl Ball {
    /// Create a ball at `position` moving `velocity` pixels per tick
    pub fn new(position: Vec2, velocity: IVec2, frame_width: u32, frame_height: u32) -> Self {
        let sheet = SpriteSheet::new(frame_width, frame_height);
        Self {
            body: Body2D::new(position, sheet.frame_size()).with_velocity(velocity),
            sheet,
            clip: Rect::new(0, 0, frame_width, frame_height),
        }
    }

    /// Advance one tick: move, bounce off the screen edges, then refresh the clip
    pub fn update(&mut self, bounds: &ScreenBounds) -> Reflection {
        let hit = self.body.step(bounds);
        self.animate();
        hit
    }

    /// Recompute the clip origin from the current frame index
    fn animate(&mut self) {
        self.clip.x = self.sheet.clip_x();
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    #[inline]
    pub fn velocity(&self) -> IVec2 {
        self.body.velocity
    }

    #[inline]
    pub fn frame_size(&self) -> (u32, u32) {
        self.sheet.frame_size()
    }

    /// Source region in the spritesheet
    #[inline]
    pub fn clip(&self) -> Rect {
        self.clip
    }

    /// Screen destination: position truncated to whole pixels, sized to one frame
    pub fn dest_rect(&self) -> Rect {
        let p = self.body.position.truncate();
        Rect::new(p.x, p.y, self.sheet.frame_width, self.sheet.frame_height)
    }
}
