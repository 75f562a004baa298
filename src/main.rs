//! bounce2d - 2D Rendering Demo
//!
//! Opens a window and bounces spritesheet balls off its edges.

use std::time::Instant;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::WindowId,
};

use bounce2d::config::AppConfig;
use bounce2d::systems::{ExitStatus, Platform, RenderError, SimulationSystem, Startup, StartupError};
use bounce2d_core::{BallWorld, ScreenBounds};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    /// Window, renderer and shared texture (None until resumed)
    platform: Option<Platform>,
    world: BallWorld,
    simulation: SimulationSystem,
    /// Startup outcome; decides the exit code
    startup: Startup,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let bounds = ScreenBounds::new(config.window.width as i32, config.window.height as i32);
        let world = BallWorld::from_spawns(
            bounds,
            &config.balls,
            config.sprite.frame_width,
            config.sprite.frame_height,
        );
        log::info!("Created {} balls", world.ball_count());

        let simulation = SimulationSystem::new(config.frame.to_pacing());

        Self {
            config,
            platform: None,
            world,
            simulation,
            startup: Startup::default(),
        }
    }

    /// Initialize the platform and load the spritesheet
    fn start(&self, event_loop: &ActiveEventLoop) -> Result<Platform, StartupError> {
        let mut platform = Platform::init(event_loop, &self.config)?;
        platform.load_sprite(&self.config.sprite.path)?;
        Ok(platform)
    }

    /// Release everything and pick the process exit status
    fn finish(&mut self, event_loop_failed: bool) -> ExitStatus {
        if let Some(mut platform) = self.platform.take() {
            platform.teardown();
        }
        if let Some(e) = self.startup.error() {
            log::info!("Exiting after failed {} step", e.step());
        }
        self.startup.exit_status(event_loop_failed)
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.platform.is_some() || self.startup.has_failed() {
            return;
        }

        let result = self.start(event_loop);
        self.platform = self.startup.record(result, &mut self.simulation);
        if self.platform.is_none() {
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let WindowEvent::CloseRequested = event {
            self.simulation.request_quit();
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.simulation.is_running() {
            return;
        }
        let Some((render, sprite)) = self.platform.as_mut().and_then(|p| p.frame_targets()) else {
            return;
        };

        let frame_start = Instant::now();
        match self.simulation.run_frame(&mut self.world, render, sprite) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => render.reconfigure(),
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory, quitting");
                self.simulation.request_quit();
                event_loop.exit();
                return;
            }
            Err(e) => log::warn!("{}", e),
        }
        self.simulation.pace(frame_start);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Window and renderer go before the event loop itself
        if let Some(platform) = self.platform.as_mut() {
            platform.teardown();
        }
    }
}

fn main() {
    let loaded = AppConfig::load();
    let log_level = loaded
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize logging (RUST_LOG still takes precedence)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting bounce2d");

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("{}", StartupError::from(e));
            std::process::exit(StartupError::EXIT_CODE);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    let run_result = event_loop.run_app(&mut app);

    if let Err(e) = &run_result {
        log::error!("Event loop error: {}", e);
    }
    let status = app.finish(run_result.is_err());
    log::info!("Exiting after {} frames", app.simulation.frame_count());
    std::process::exit(status.code());
}
