//! Platform lifecycle
//!
//! [`Platform`] owns every platform resource: window, render system, image decoding
//! support and the shared sprite texture. `init` acquires them in order and stops at the
//! first failure; `teardown` releases whatever exists in a fixed order and is safe to call
//! any number of times. [`Startup`] turns the startup result into the frame loop state and
//! the process exit status.

use std::path::Path;

use winit::event_loop::ActiveEventLoop;

use bounce2d_render::{png_decoding_available, ContextError, TextureError};

use super::render::{RenderSystem, SpriteTexture};
use super::simulation::SimulationSystem;
use super::window::{WindowError, WindowSystem};
use crate::config::AppConfig;

/// Startup failure, naming the step that failed
#[derive(Debug)]
pub enum StartupError {
    /// The windowing subsystem (event loop) could not start
    EventLoop(winit::error::EventLoopError),
    Window(WindowError),
    RenderContext(ContextError),
    /// PNG decoding is not available
    ImageSubsystem(String),
    /// The sprite asset could not be loaded
    Texture(TextureError),
}

impl StartupError {
    /// Process exit code for any startup failure
    pub const EXIT_CODE: i32 = -1;

    /// Short name of the failing step
    pub fn step(&self) -> &'static str {
        match self {
            StartupError::EventLoop(_) => "windowing subsystem",
            StartupError::Window(_) => "window",
            StartupError::RenderContext(_) => "renderer",
            StartupError::ImageSubsystem(_) => "image subsystem",
            StartupError::Texture(_) => "texture",
        }
    }
}

impl std::fmt::Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartupError::EventLoop(e) => write!(f, "Windowing subsystem could not initialize: {}", e),
            StartupError::Window(e) => write!(f, "{}", e),
            StartupError::RenderContext(e) => write!(f, "Renderer could not be created: {}", e),
            StartupError::ImageSubsystem(msg) => write!(f, "Image subsystem could not initialize: {}", msg),
            StartupError::Texture(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::EventLoop(e) => Some(e),
            StartupError::Window(e) => Some(e),
            StartupError::RenderContext(e) => Some(e),
            StartupError::ImageSubsystem(_) => None,
            StartupError::Texture(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for StartupError {
    fn from(e: winit::error::EventLoopError) -> Self {
        StartupError::EventLoop(e)
    }
}

impl From<WindowError> for StartupError {
    fn from(e: WindowError) -> Self {
        StartupError::Window(e)
    }
}

impl From<ContextError> for StartupError {
    fn from(e: ContextError) -> Self {
        StartupError::RenderContext(e)
    }
}

impl From<TextureError> for StartupError {
    fn from(e: TextureError) -> Self {
        StartupError::Texture(e)
    }
}

/// Image decoding support, checked once at startup
#[derive(Debug)]
pub struct ImageSubsystem {
    _private: (),
}

impl ImageSubsystem {
    /// Confirm PNG decoding is available
    pub fn init() -> Result<Self, StartupError> {
        if png_decoding_available() {
            log::debug!("Image subsystem ready (png)");
            Ok(Self { _private: () })
        } else {
            Err(StartupError::ImageSubsystem(
                "png decoding is not enabled in this build".to_string(),
            ))
        }
    }
}

/// Every platform resource the frame loop needs
#[derive(Default)]
pub struct Platform {
    sprite: Option<SpriteTexture>,
    render: Option<RenderSystem>,
    window: Option<WindowSystem>,
    image: Option<ImageSubsystem>,
}

impl Platform {
    /// Create the window, render context and image subsystem
    ///
    /// Anything created before a failing step is torn down before the error is returned.
    pub fn init(event_loop: &ActiveEventLoop, config: &AppConfig) -> Result<Self, StartupError> {
        let mut platform = Self::default();
        match platform.acquire(event_loop, config) {
            Ok(()) => Ok(platform),
            Err(e) => {
                platform.teardown();
                Err(e)
            }
        }
    }

    fn acquire(&mut self, event_loop: &ActiveEventLoop, config: &AppConfig) -> Result<(), StartupError> {
        let window = WindowSystem::create(event_loop, &config.window)?;
        let handle = window.window().clone();
        self.window = Some(window);

        let mut render = RenderSystem::new(
            handle,
            (config.window.width, config.window.height),
            config.window.vsync,
        )?;
        render.set_clear_color(&config.rendering);
        self.render = Some(render);

        self.image = Some(ImageSubsystem::init()?);
        Ok(())
    }

    /// Load the shared sprite texture
    pub fn load_sprite(&mut self, path: impl AsRef<Path>) -> Result<(), StartupError> {
        let path = path.as_ref();
        let render = self.render.as_mut().ok_or_else(|| TextureError::Bind {
            path: path.to_path_buf(),
            message: "no render context".to_string(),
        })?;
        let sprite = render.load_texture(path)?;
        if let Some(old) = self.sprite.replace(sprite) {
            render.release_texture(old);
        }
        Ok(())
    }

    /// Render system and shared texture, when both exist
    pub fn frame_targets(&mut self) -> Option<(&mut RenderSystem, &SpriteTexture)> {
        match (self.render.as_mut(), self.sprite.as_ref()) {
            (Some(render), Some(sprite)) => Some((render, sprite)),
            _ => None,
        }
    }

    /// Whether anything is still held
    pub fn is_active(&self) -> bool {
        self.sprite.is_some() || self.render.is_some() || self.window.is_some() || self.image.is_some()
    }

    /// Release the texture, render context, window and image subsystem, in that order
    ///
    /// Missing resources are skipped; calling this again is a no-op.
    pub fn teardown(&mut self) {
        if !self.is_active() {
            return;
        }

        if let Some(sprite) = self.sprite.take() {
            match self.render.as_mut() {
                Some(render) => render.release_texture(sprite),
                None => drop(sprite),
            }
        }
        if self.render.take().is_some() {
            log::debug!("Render context released");
        }
        if self.window.take().is_some() {
            log::debug!("Window released");
        }
        if self.image.take().is_some() {
            log::debug!("Image subsystem released");
        }
        log::info!("Platform torn down");
    }
}

impl Drop for Platform {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// How the process ends
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Normal quit
    Success,
    /// Startup failed; no frame ran
    StartupFailed,
    /// The event loop failed after a clean start
    EventLoopFailed,
}

impl ExitStatus {
    /// Process exit code
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::StartupFailed => StartupError::EXIT_CODE,
            ExitStatus::EventLoopFailed => 1,
        }
    }
}

/// Outcome of startup
#[derive(Debug, Default)]
pub struct Startup {
    error: Option<StartupError>,
}

impl Startup {
    /// Whether a startup result was already recorded as a failure
    pub fn has_failed(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<&StartupError> {
        self.error.as_ref()
    }

    /// Apply a startup result to the frame loop
    ///
    /// On success the loop starts running and the platform is handed back. On failure the
    /// error is logged and kept, the loop goes straight to quit, and `None` is returned.
    pub fn record(
        &mut self,
        result: Result<Platform, StartupError>,
        simulation: &mut SimulationSystem,
    ) -> Option<Platform> {
        match result {
            Ok(platform) => {
                log::info!("Startup complete");
                simulation.start();
                Some(platform)
            }
            Err(e) => {
                log::error!("Failed to initialize {}: {}", e.step(), e);
                simulation.request_quit();
                self.error = Some(e);
                None
            }
        }
    }

    /// Exit status once the event loop has returned
    pub fn exit_status(&self, event_loop_failed: bool) -> ExitStatus {
        if self.has_failed() {
            ExitStatus::StartupFailed
        } else if event_loop_failed {
            ExitStatus::EventLoopFailed
        } else {
            ExitStatus::Success
        }
    }
}
