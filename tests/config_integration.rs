//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use ricochet::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("RICOCHET_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("RICOCHET_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_physics() {
    std::env::set_var("RICOCHET_PHYSICS__TIMESTEP", "0.01");
    let config = AppConfig::load().unwrap();
    assert!((config.physics.timestep - 0.01).abs() < 1e-6);
    std::env::remove_var("RICOCHET_PHYSICS__TIMESTEP");
}

#[test]
#[serial]
fn test_default_config_loading() {
    std::env::remove_var("RICOCHET_WINDOW__TITLE");

    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.width, 800);
    assert_eq!(config.window.height, 600);
    assert_eq!(config.physics.gravity, [0.0, 300.0]);
}
