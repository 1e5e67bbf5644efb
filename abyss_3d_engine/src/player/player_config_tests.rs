use glam::Vec3;
use crate::error::Error;
use super::*;

#[test]
fn test_default_is_valid() {
    let config = PlayerConfig::default();
    assert!(config.validate().is_ok());
    assert!(config.lens().is_ok());
    assert_eq!(config.spawn_position, Vec3::new(0.0, -5.0, 0.0));
}

#[test]
fn test_spawn_above_surface_is_rejected() {
    let config = PlayerConfig {
        spawn_position: Vec3::new(0.0, 1.0, 0.0),
        ..Default::default()
    };
    assert!(matches!(config.validate(), Err(Error::InvalidParameter(_))));
}

#[test]
fn test_spawn_on_surface_is_accepted() {
    let config = PlayerConfig {
        spawn_position: Vec3::new(3.0, SURFACE_LEVEL, -2.0),
        ..Default::default()
    };
    assert!(config.validate().is_ok());
}

#[test]
fn test_negative_light_offset_is_rejected() {
    let config = PlayerConfig {
        light_offset_distance: -1.0,
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_bad_lens_is_rejected() {
    let config = PlayerConfig {
        field_of_view: 200.0,
        ..Default::default()
    };
    assert!(config.lens().is_err());
}
