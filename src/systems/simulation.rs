//! Frame loop system
//!
//! Drives one frame at a time:
//! - Clear the back buffer
//! - Update each ball, then copy its sprite clip to the screen
//! - Present
//! - Sleep to bound the frame rate
//!
//! The loop waits in [`FrameState::Starting`] until startup succeeds. Input is pumped by the
//! winit event loop before each frame; a close request moves the loop to
//! [`FrameState::Quit`], after which no further frames run.

use std::time::{Duration, Instant};

use bounce2d_core::BallWorld;

use super::render::{Canvas, RenderError};

/// Frame loop state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameState {
    /// Platform and sprite not ready yet
    Starting,
    Running,
    /// Terminal
    Quit,
}

/// How long to sleep after a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FramePacing {
    /// Sleep this long unconditionally. Real frame time is render time plus the delay.
    FixedDelay(Duration),
    /// Sleep whatever remains of this frame budget, nothing if the frame ran over
    TargetFrameTime(Duration),
}

impl FramePacing {
    /// Sleep duration for a frame that took `elapsed`
    pub fn sleep_after(&self, elapsed: Duration) -> Duration {
        match *self {
            FramePacing::FixedDelay(delay) => delay,
            FramePacing::TargetFrameTime(budget) => budget.saturating_sub(elapsed),
        }
    }
}

impl Default for FramePacing {
    fn default() -> Self {
        FramePacing::FixedDelay(Duration::from_millis(10))
    }
}

/// Manages the frame loop
pub struct SimulationSystem {
    state: FrameState,
    pacing: FramePacing,
    frame_count: u64,
}

impl SimulationSystem {
    /// Create a frame loop waiting for startup to finish
    pub fn new(pacing: FramePacing) -> Self {
        Self {
            state: FrameState::Starting,
            pacing,
            frame_count: 0,
        }
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == FrameState::Running
    }

    /// Begin running frames. Has no effect once the loop has quit.
    pub fn start(&mut self) {
        if self.state == FrameState::Starting {
            self.state = FrameState::Running;
        }
    }

    /// Move to the terminal quit state
    pub fn request_quit(&mut self) {
        if self.state == FrameState::Running {
            log::info!("Quit requested after {} frames", self.frame_count);
        }
        self.state = FrameState::Quit;
    }

    /// Frames presented so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Run one frame: clear, update and draw every ball in order, present
    ///
    /// Does nothing unless the loop is running.
    pub fn run_frame<C: Canvas>(
        &mut self,
        world: &mut BallWorld,
        canvas: &mut C,
        texture: &C::Texture,
    ) -> Result<(), RenderError> {
        if !self.is_running() {
            return Ok(());
        }

        canvas.clear();
        world.update_each(|ball| canvas.copy(texture, ball.clip(), ball.dest_rect()));
        canvas.present()?;

        self.frame_count += 1;
        log::trace!("Frame {} presented", self.frame_count);
        Ok(())
    }

    /// Block for the pacing delay of a frame that started at `frame_start`
    pub fn pace(&self, frame_start: Instant) {
        let sleep = self.pacing.sleep_after(frame_start.elapsed());
        if !sleep.is_zero() {
            std::thread::sleep(sleep);
        }
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new(FramePacing::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bounce2d_core::{BallSpawn, Rect, ScreenBounds};

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear,
        Copy(&'static str, Rect, Rect),
        Present,
    }

    /// Canvas that records calls instead of drawing
    #[derive(Default)]
    struct RecordingCanvas {
        ops: Vec<Op>,
        fail_present: bool,
    }

    impl Canvas for RecordingCanvas {
        type Texture = &'static str;

        fn clear(&mut self) {
            self.ops.push(Op::Clear);
        }

        fn copy(&mut self, texture: &&'static str, src: Rect, dst: Rect) {
            self.ops.push(Op::Copy(*texture, src, dst));
        }

        fn present(&mut self) -> Result<(), RenderError> {
            if self.fail_present {
                return Err(RenderError::SurfaceLost);
            }
            self.ops.push(Op::Present);
            Ok(())
        }
    }

    fn running() -> SimulationSystem {
        let mut sim = SimulationSystem::default();
        sim.start();
        sim
    }

    #[test]
    fn test_no_frames_before_start() {
        let mut sim = SimulationSystem::default();
        let mut world = BallWorld::from_spawns(ScreenBounds::default(), &[BallSpawn::default()], 512, 512);
        let mut canvas = RecordingCanvas::default();

        assert_eq!(sim.state(), FrameState::Starting);
        assert!(!sim.is_running());
        sim.run_frame(&mut world, &mut canvas, &"ball").unwrap();
        assert!(canvas.ops.is_empty());
        assert_eq!(world.balls()[0].position().x, 800.0);

        sim.start();
        assert_eq!(sim.state(), FrameState::Running);
        sim.run_frame(&mut world, &mut canvas, &"ball").unwrap();
        assert_eq!(sim.frame_count(), 1);
    }

    #[test]
    fn test_empty_world_still_clears_and_presents() {
        let mut sim = running();
        let mut world = BallWorld::new(ScreenBounds::default());
        let mut canvas = RecordingCanvas::default();

        sim.run_frame(&mut world, &mut canvas, &"ball").unwrap();

        assert_eq!(canvas.ops, vec![Op::Clear, Op::Present]);
        assert_eq!(sim.frame_count(), 1);
    }

    #[test]
    fn test_frame_draws_updated_positions() {
        let mut sim = running();
        let mut world =
            BallWorld::from_spawns(ScreenBounds::new(800, 600), &[BallSpawn::default()], 512, 512);
        let mut canvas = RecordingCanvas::default();

        sim.run_frame(&mut world, &mut canvas, &"ball").unwrap();

        assert_eq!(
            canvas.ops,
            vec![
                Op::Clear,
                Op::Copy("ball", Rect::new(0, 0, 512, 512), Rect::new(288, 88, 512, 512)),
                Op::Present,
            ]
        );
    }

    #[test]
    fn test_balls_drawn_in_insertion_order() {
        let mut sim = running();
        let spawns = [
            BallSpawn::new([10.0, 10.0], [1, 0]),
            BallSpawn::new([100.0, 10.0], [1, 0]),
            BallSpawn::new([200.0, 10.0], [1, 0]),
        ];
        let mut world = BallWorld::from_spawns(ScreenBounds::default(), &spawns, 32, 32);
        let mut canvas = RecordingCanvas::default();

        sim.run_frame(&mut world, &mut canvas, &"ball").unwrap();

        let xs: Vec<i32> = canvas
            .ops
            .iter()
            .filter_map(|op| match op {
                Op::Copy(_, _, dst) => Some(dst.x),
                _ => None,
            })
            .collect();
        assert_eq!(xs, vec![11, 101, 201]);
    }

    #[test]
    fn test_quit_is_terminal() {
        let mut sim = running();
        let mut world = BallWorld::from_spawns(ScreenBounds::default(), &[BallSpawn::default()], 512, 512);
        let mut canvas = RecordingCanvas::default();

        sim.request_quit();
        sim.run_frame(&mut world, &mut canvas, &"ball").unwrap();
        sim.request_quit();
        sim.start();

        assert_eq!(sim.state(), FrameState::Quit);
        assert!(canvas.ops.is_empty());
        assert_eq!(world.balls()[0].position().x, 800.0);
        assert_eq!(sim.frame_count(), 0);
    }

    #[test]
    fn test_present_error_is_returned() {
        let mut sim = running();
        let mut world = BallWorld::new(ScreenBounds::default());
        let mut canvas = RecordingCanvas {
            fail_present: true,
            ..Default::default()
        };

        let result = sim.run_frame(&mut world, &mut canvas, &"ball");

        assert!(matches!(result, Err(RenderError::SurfaceLost)));
        assert_eq!(sim.frame_count(), 0);
        assert!(sim.is_running());
    }

    #[test]
    fn test_fixed_delay_ignores_elapsed() {
        let pacing = FramePacing::FixedDelay(Duration::from_millis(10));
        assert_eq!(pacing.sleep_after(Duration::from_millis(3)), Duration::from_millis(10));
        assert_eq!(pacing.sleep_after(Duration::from_millis(50)), Duration::from_millis(10));
    }

    #[test]
    fn test_target_frame_time_subtracts_elapsed() {
        let pacing = FramePacing::TargetFrameTime(Duration::from_millis(16));
        assert_eq!(pacing.sleep_after(Duration::from_millis(6)), Duration::from_millis(10));
        assert_eq!(pacing.sleep_after(Duration::from_millis(40)), Duration::ZERO);
    }

    #[test]
    fn test_pace_sleeps_at_least_fixed_delay() {
        let sim = SimulationSystem::new(FramePacing::FixedDelay(Duration::from_millis(20)));
        let start = Instant::now();
        sim.pace(start);
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
