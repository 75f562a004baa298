//! Application systems
//!
//! Window, rendering, frame loop and lifecycle, kept out of main.rs so they can be tested.

mod lifecycle;
mod render;
mod simulation;
mod window;

pub use lifecycle::{ExitStatus, ImageSubsystem, Platform, Startup, StartupError};
pub use render::{Canvas, RenderError, RenderSystem, SpriteTexture};
pub use simulation::{FramePacing, FrameState, SimulationSystem};
pub use window::{WindowError, WindowSystem};
