use winit::keyboard::KeyCode;
use super::*;

#[test]
fn test_default_bindings() {
    let config = InputConfig::default();
    assert_eq!(config.command(KeyCode::KeyW), Some(Command::MoveForward));
    assert_eq!(config.command(KeyCode::Digit2), Some(Command::ToggleOrtho));
    assert_eq!(config.command(KeyCode::Space), Some(Command::LookDown));
    assert_eq!(config.command(KeyCode::KeyZ), None);
    assert_eq!(config.bindings.len(), 12);
    assert!(config.validate().is_ok());
}

#[test]
fn test_rebind_and_unbind() {
    let mut config = InputConfig::default();
    assert_eq!(config.bind(KeyCode::KeyW, Command::Ascend), Some(Command::MoveForward));
    assert_eq!(config.command(KeyCode::KeyW), Some(Command::Ascend));

    assert_eq!(config.bind(KeyCode::ArrowUp, Command::MoveForward), None);
    assert_eq!(config.unbind(KeyCode::ArrowUp), Some(Command::MoveForward));
    assert_eq!(config.command(KeyCode::ArrowUp), None);
}

#[test]
fn test_negative_step_is_rejected() {
    let config = InputConfig { rotation_step: -1.0, ..Default::default() };
    assert!(config.validate().is_err());

    let config = InputConfig { mouse_sensitivity: f32::NAN, ..Default::default() };
    assert!(config.validate().is_err());
}
