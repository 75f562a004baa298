//! Integration tests for the bundled sprite asset

use bounce2d::config::AppConfig;
use bounce2d::systems::{ExitStatus, SimulationSystem, Startup, StartupError};
use bounce2d_render::{decode_image, TextureError};

#[test]
fn test_default_sprite_decodes() {
    let config = AppConfig::default();
    let image = decode_image(&config.sprite.path).unwrap();
    assert_eq!(image.dimensions(), (config.sprite.frame_width, config.sprite.frame_height));
}

#[test]
fn test_missing_sprite_is_a_startup_failure() {
    let err = decode_image("./Assets/nope.png").unwrap_err();
    assert!(matches!(err, TextureError::Read { .. }));

    let mut startup = Startup::default();
    let mut simulation = SimulationSystem::default();
    let platform = startup.record(Err(StartupError::from(err)), &mut simulation);

    assert!(platform.is_none());
    assert_eq!(startup.error().map(StartupError::step), Some("texture"));
    assert!(!simulation.is_running());
    assert_eq!(simulation.frame_count(), 0);
    assert_eq!(startup.exit_status(false), ExitStatus::StartupFailed);
    assert_eq!(startup.exit_status(false).code(), -1);
}
