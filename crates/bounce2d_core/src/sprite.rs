//! Spritesheet framing

/// Frames laid out left to right in a single row of a spritesheet
///
/// `current_frame` is never advanced by the simulation, so the visible clip stays on frame 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteSheet {
    /// Width of one frame in pixels
    pub frame_width: u32,
    /// Height of one frame in pixels
    pub frame_height: u32,
    /// Index of the displayed frame
    pub current_frame: u32,
}

impl SpriteSheet {
    /// Create a sheet showing frame 0
    pub fn new(frame_width: u32, frame_height: u32) -> Self {
        Self {
            frame_width,
            frame_height,
            current_frame: 0,
        }
    }

    /// Show a different frame
    pub fn with_frame(mut self, frame: u32) -> Self {
        self.current_frame = frame;
        self
    }

    /// Frame size as `(width, height)`
    pub fn frame_size(&self) -> (u32, u32) {
        (self.frame_width, self.frame_height)
    }

    /// Left edge of the current frame within the sheet
    pub fn clip_x(&self) -> i32 {
        (self.current_frame * self.frame_width) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_at_frame_zero() {
        let sheet = SpriteSheet::new(512, 512);
        assert_eq!(sheet.current_frame, 0);
        assert_eq!(sheet.clip_x(), 0);
        assert_eq!(sheet.frame_size(), (512, 512));
    }

    #[test]
    fn test_clip_x_follows_frame_index() {
        let sheet = SpriteSheet::new(64, 32).with_frame(3);
        assert_eq!(sheet.clip_x(), 192);
    }
}
