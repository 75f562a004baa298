//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`B2D_SECTION__KEY`)
//!
//! Every field has a default, so the demo runs unchanged with no files and no environment.

use std::path::Path;
use std::time::Duration;

use bounce2d_core::BallSpawn;
use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};

use crate::systems::FramePacing;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Frame pacing configuration
    #[serde(default)]
    pub frame: FrameConfig,
    /// Spritesheet configuration
    #[serde(default)]
    pub sprite: SpriteConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
    /// Balls created at startup, in update order
    #[serde(default = "default_balls")]
    pub balls: Vec<BallSpawn>,
}

fn default_balls() -> Vec<BallSpawn> {
    vec![BallSpawn::default()]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            rendering: RenderingConfig::default(),
            frame: FrameConfig::default(),
            sprite: SpriteConfig::default(),
            debug: DebugConfig::default(),
            balls: default_balls(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`B2D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // B2D_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed("B2D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Logical width in pixels (also the bounce area width)
    pub width: u32,
    /// Logical height in pixels (also the bounce area height)
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "2D Rendering".to_string(),
            width: 800,
            height: 600,
            vsync: true,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Back buffer clear color [r, g, b, a]
    pub clear_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            clear_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// How the end of each frame is paced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PacingMode {
    /// Sleep `delay_ms` after every frame regardless of how long it took
    Fixed,
    /// Sleep whatever is left of a `1 / target_fps` frame budget
    Target,
}

/// Frame pacing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Pacing strategy
    pub pacing: PacingMode,
    /// Delay after each frame for `fixed` pacing, in milliseconds
    pub delay_ms: u64,
    /// Frame rate for `target` pacing
    pub target_fps: u32,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            pacing: PacingMode::Fixed,
            delay_ms: 10,
            target_fps: 60,
        }
    }
}

impl FrameConfig {
    /// Build the pacing policy used by the frame loop
    pub fn to_pacing(&self) -> FramePacing {
        match self.pacing {
            PacingMode::Fixed => FramePacing::FixedDelay(Duration::from_millis(self.delay_ms)),
            PacingMode::Target => FramePacing::TargetFrameTime(Duration::from_nanos(
                1_000_000_000 / self.target_fps.max(1) as u64,
            )),
        }
    }
}

/// Spritesheet configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    /// Path to the spritesheet image
    pub path: String,
    /// Width of one animation frame in pixels
    pub frame_width: u32,
    /// Height of one animation frame in pixels
    pub frame_height: u32,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            path: "./Assets/ball.png".to_string(),
            frame_width: 512,
            frame_height: 512,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.sprite.path, "./Assets/ball.png");
        assert_eq!(config.rendering.clear_color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(config.balls, vec![BallSpawn::new([800.0, 445.0], [4, 4])]);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("delay_ms"));
        assert!(toml.contains("pacing = \"fixed\""));
        assert!(toml.contains("[[balls]]"));
    }

    #[test]
    fn test_fixed_pacing() {
        let frame = FrameConfig::default();
        assert_eq!(frame.to_pacing(), FramePacing::FixedDelay(Duration::from_millis(10)));
    }

    #[test]
    fn test_target_pacing() {
        let frame = FrameConfig {
            pacing: PacingMode::Target,
            delay_ms: 10,
            target_fps: 50,
        };
        assert_eq!(frame.to_pacing(), FramePacing::TargetFrameTime(Duration::from_millis(20)));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = Figment::new()
            .merge(Toml::string("[window]\ntitle = \"Custom\"\nwidth = 640\nheight = 480\nvsync = false\n"))
            .extract()
            .unwrap();
        assert_eq!(config.window.width, 640);
        assert_eq!(config.sprite.frame_width, 512);
        assert_eq!(config.balls.len(), 1);
    }

    #[test]
    fn test_partial_section_fills_missing_fields() {
        let config: AppConfig = Figment::new()
            .merge(Toml::string("[frame]\ndelay_ms = 16\n\n[window]\ntitle = \"Only Title\"\n"))
            .extract()
            .unwrap();
        assert_eq!(config.frame.delay_ms, 16);
        assert_eq!(config.frame.pacing, PacingMode::Fixed);
        assert_eq!(config.frame.target_fps, 60);
        assert_eq!(config.window.title, "Only Title");
        assert_eq!(config.window.width, 800);
        assert!(config.window.vsync);
    }

    #[test]
    fn test_balls_from_toml() {
        let config: AppConfig = Figment::new()
            .merge(Toml::string(
                "[[balls]]\nposition = [0.0, 0.0]\nvelocity = [-4, -4]\n\n[[balls]]\nposition = [100.0, 50.0]\nvelocity = [2, 3]\n",
            ))
            .extract()
            .unwrap();
        assert_eq!(config.balls.len(), 2);
        assert_eq!(config.balls[0].velocity, [-4, -4]);
    }
}
