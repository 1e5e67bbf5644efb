/// Tests for InputDispatcher
///
/// These tests validate key routing per view mode, press/repeat/release
/// handling and the mouse drag session.

use glam::Vec3;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;
use crate::light::{DirectionLight, Light};
use crate::player::{LightLevel, Player, PlayerConfig, ViewMode};
use crate::scene::{ModelPose, Scene};
use super::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn setup() -> (InputDispatcher, Player, Scene) {
    let light = Light::with_color(Vec3::new(4.0, 11.0, -3.0), Vec3::ONE, 0.4, 0.7, 40.0).unwrap();
    let mut scene = Scene::new(DirectionLight::new(light, 1.0).unwrap());
    let key = scene.add_model(ModelPose::default());
    let player = Player::new(&PlayerConfig::default(), key, &mut scene).unwrap();
    let dispatcher = InputDispatcher::new(InputConfig::default()).unwrap();
    (dispatcher, player, scene)
}

fn press(dispatcher: &mut InputDispatcher, player: &mut Player, scene: &mut Scene, key: KeyCode) -> Response {
    dispatcher.on_key(player, scene, key, KeyAction::Press).unwrap()
}

// ============================================================================
// Keys
// ============================================================================

#[test]
fn test_unbound_key_is_ignored() {
    let (mut dispatcher, mut player, mut scene) = setup();
    let response = press(&mut dispatcher, &mut player, &mut scene, KeyCode::KeyZ);
    assert_eq!(response, Response::ignored());
}

#[test]
fn test_forward_moves_player() {
    let (mut dispatcher, mut player, mut scene) = setup();
    let response = press(&mut dispatcher, &mut player, &mut scene, KeyCode::KeyW);
    assert!(response.handled);
    assert!((player.position().z - 0.5).abs() < 1e-5);
}

#[test]
fn test_repeat_moves_again_release_does_not() {
    let (mut dispatcher, mut player, mut scene) = setup();
    dispatcher.on_key(&mut player, &mut scene, KeyCode::KeyW, KeyAction::Press).unwrap();
    dispatcher.on_key(&mut player, &mut scene, KeyCode::KeyW, KeyAction::Repeat).unwrap();
    let response = dispatcher.on_key(&mut player, &mut scene, KeyCode::KeyW, KeyAction::Release).unwrap();
    assert!(!response.handled);
    assert!((player.position().z - 1.0).abs() < 1e-5);
}

#[test]
fn test_turn_keys_use_rotation_step() {
    let (mut dispatcher, mut player, mut scene) = setup();
    press(&mut dispatcher, &mut player, &mut scene, KeyCode::KeyD);
    assert!((player.yaw() - 91.2).abs() < 1e-4);
    press(&mut dispatcher, &mut player, &mut scene, KeyCode::KeyA);
    press(&mut dispatcher, &mut player, &mut scene, KeyCode::KeyA);
    assert!((player.yaw() - 88.8).abs() < 1e-4);
}

#[test]
fn test_ascend_is_clamped_at_surface() {
    let (mut dispatcher, mut player, mut scene) = setup();
    for _ in 0..20 {
        press(&mut dispatcher, &mut player, &mut scene, KeyCode::KeyQ);
    }
    assert_eq!(player.position().y, 0.0);
    press(&mut dispatcher, &mut player, &mut scene, KeyCode::KeyE);
    assert_eq!(player.position().y, -0.5);
}

#[test]
fn test_toggles_fire_on_press_only() {
    let (mut dispatcher, mut player, mut scene) = setup();
    press(&mut dispatcher, &mut player, &mut scene, KeyCode::Digit1);
    assert_eq!(player.view_mode(), ViewMode::ThirdPerson);

    let response = dispatcher.on_key(&mut player, &mut scene, KeyCode::Digit1, KeyAction::Repeat).unwrap();
    assert!(!response.handled);
    assert_eq!(player.view_mode(), ViewMode::ThirdPerson);

    press(&mut dispatcher, &mut player, &mut scene, KeyCode::Digit2);
    assert_eq!(player.view_mode(), ViewMode::Orthographic);
}

#[test]
fn test_cycle_light_key() {
    let (mut dispatcher, mut player, mut scene) = setup();
    press(&mut dispatcher, &mut player, &mut scene, KeyCode::KeyF);
    assert_eq!(player.light_level(), LightLevel::Medium);
    dispatcher.on_key(&mut player, &mut scene, KeyCode::KeyF, KeyAction::Repeat).unwrap();
    assert_eq!(player.light_level(), LightLevel::Medium);
}

#[test]
fn test_ortho_movement_keys_pan() {
    let (mut dispatcher, mut player, mut scene) = setup();
    press(&mut dispatcher, &mut player, &mut scene, KeyCode::Digit2);

    press(&mut dispatcher, &mut player, &mut scene, KeyCode::KeyW);
    press(&mut dispatcher, &mut player, &mut scene, KeyCode::KeyD);
    assert_eq!(player.orthographic_camera().eye(), Vec3::new(0.5, 20.0, -0.5));
    assert_eq!(player.position(), Vec3::new(0.0, -5.0, 0.0));

    let response = press(&mut dispatcher, &mut player, &mut scene, KeyCode::KeyQ);
    assert!(!response.handled);
    assert_eq!(player.position().y, -5.0);
}

#[test]
fn test_look_down_only_in_ortho() {
    let (mut dispatcher, mut player, mut scene) = setup();
    let response = press(&mut dispatcher, &mut player, &mut scene, KeyCode::Space);
    assert!(!response.handled);

    press(&mut dispatcher, &mut player, &mut scene, KeyCode::Digit2);
    player.tilt_ortho(1.0, 1.0);
    let response = press(&mut dispatcher, &mut player, &mut scene, KeyCode::Space);
    assert!(response.handled);
    let ortho = player.orthographic_camera();
    assert_eq!(ortho.target().x, ortho.eye().x);
}

#[test]
fn test_scene_light_keys() {
    let (mut dispatcher, mut player, mut scene) = setup();
    press(&mut dispatcher, &mut player, &mut scene, KeyCode::ArrowRight);
    assert!((scene.direction_light().intensity - 1.012).abs() < 1e-6);

    for _ in 0..200 {
        dispatcher.on_key(&mut player, &mut scene, KeyCode::ArrowLeft, KeyAction::Repeat).unwrap();
    }
    assert_eq!(scene.direction_light().intensity, 0.0);
}

#[test]
fn test_stale_model_error_propagates() {
    let (mut dispatcher, mut player, mut scene) = setup();
    scene.remove_model(player.model_key());
    let result = dispatcher.on_key(&mut player, &mut scene, KeyCode::KeyW, KeyAction::Press);
    assert!(result.is_err());
}

// ============================================================================
// Mouse
// ============================================================================

#[test]
fn test_drag_rotates_orbit_camera() {
    let (mut dispatcher, mut player, mut scene) = setup();
    press(&mut dispatcher, &mut player, &mut scene, KeyCode::Digit1);

    let response = dispatcher.on_mouse_button(&player, MouseButton::Left, ElementState::Pressed);
    assert_eq!(response.cursor, Some(CursorMode::Grabbed));
    assert!(dispatcher.session().mouse_held);

    let before = player.third_person_camera().orientation().unwrap();
    // First move only records the cursor
    assert!(!dispatcher.on_mouse_move(&mut player, 100.0, 100.0).handled);
    assert!(dispatcher.on_mouse_move(&mut player, 120.0, 90.0).handled);

    let after = player.third_person_camera().orientation().unwrap();
    assert!((after.yaw() - (before.yaw() + 1.0)).abs() < 1e-4);
    // dragging up by 10 px looks up: orbit pitch drops
    assert!((after.pitch() - (before.pitch() - 0.5)).abs() < 1e-4);

    let distance = (player.third_person_camera().eye() - player.position()).length();
    assert!((distance - 10.0).abs() < 1e-4);
}

#[test]
fn test_move_without_drag_only_tracks() {
    let (mut dispatcher, mut player, mut scene) = setup();
    press(&mut dispatcher, &mut player, &mut scene, KeyCode::Digit1);
    let before = player.third_person_camera().clone();

    assert!(!dispatcher.on_mouse_move(&mut player, 10.0, 10.0).handled);
    assert!(!dispatcher.on_mouse_move(&mut player, 50.0, 70.0).handled);
    assert_eq!(dispatcher.session().last_cursor, Some((50.0, 70.0)));
    assert_eq!(player.third_person_camera(), &before);
}

#[test]
fn test_drag_tilts_ortho_camera_within_bounds() {
    let (mut dispatcher, mut player, mut scene) = setup();
    press(&mut dispatcher, &mut player, &mut scene, KeyCode::Digit2);
    dispatcher.on_mouse_button(&player, MouseButton::Left, ElementState::Pressed);

    dispatcher.on_mouse_move(&mut player, 0.0, 0.0);
    dispatcher.on_mouse_move(&mut player, 20.0, 0.0);
    let ortho = player.orthographic_camera();
    assert!((ortho.target().x - (ortho.eye().x - 1.0)).abs() < 1e-5);

    dispatcher.on_mouse_move(&mut player, 2000.0, -2000.0);
    let ortho = player.orthographic_camera();
    assert!((ortho.target().x - ortho.eye().x).abs() <= 3.0);
    assert!((ortho.target().z - ortho.eye().z).abs() <= 3.0);
}

#[test]
fn test_mouse_delta_orbits_camera() {
    let (mut dispatcher, mut player, mut scene) = setup();
    press(&mut dispatcher, &mut player, &mut scene, KeyCode::Digit1);
    dispatcher.on_mouse_button(&player, MouseButton::Left, ElementState::Pressed);

    let before = player.third_person_camera().orientation().unwrap();
    // No cursor position needed: each delta applies directly
    for _ in 0..4 {
        assert!(dispatcher.on_mouse_delta(&mut player, 20.0, -10.0).handled);
    }

    let after = player.third_person_camera().orientation().unwrap();
    assert!((after.yaw() - (before.yaw() + 4.0)).abs() < 1e-4);
    assert!((after.pitch() - (before.pitch() - 2.0)).abs() < 1e-4);
    assert_eq!(dispatcher.session().last_cursor, None);

    let distance = (player.third_person_camera().eye() - player.position()).length();
    assert!((distance - 10.0).abs() < 1e-4);
}

#[test]
fn test_mouse_delta_tilts_ortho_camera() {
    let (mut dispatcher, mut player, mut scene) = setup();
    press(&mut dispatcher, &mut player, &mut scene, KeyCode::Digit2);
    dispatcher.on_mouse_button(&player, MouseButton::Left, ElementState::Pressed);

    assert!(dispatcher.on_mouse_delta(&mut player, 20.0, 0.0).handled);
    let ortho = player.orthographic_camera();
    assert!((ortho.target().x - (ortho.eye().x - 1.0)).abs() < 1e-5);

    dispatcher.on_mouse_delta(&mut player, 0.0, 20.0);
    let ortho = player.orthographic_camera();
    assert!((ortho.target().z - (ortho.eye().z - 1.0)).abs() < 1e-5);
}

#[test]
fn test_mouse_delta_needs_held_button() {
    let (mut dispatcher, mut player, mut scene) = setup();
    press(&mut dispatcher, &mut player, &mut scene, KeyCode::Digit1);
    let before = player.third_person_camera().clone();

    assert_eq!(dispatcher.on_mouse_delta(&mut player, 30.0, 30.0), Response::ignored());
    assert_eq!(player.third_person_camera(), &before);

    dispatcher.on_mouse_button(&player, MouseButton::Left, ElementState::Pressed);
    dispatcher.on_mouse_button(&player, MouseButton::Left, ElementState::Released);
    assert_eq!(dispatcher.on_mouse_delta(&mut player, 30.0, 30.0), Response::ignored());
    assert_eq!(player.third_person_camera(), &before);
}

#[test]
fn test_first_person_ignores_drag() {
    let (mut dispatcher, mut player, _scene) = setup();
    let response = dispatcher.on_mouse_button(&player, MouseButton::Left, ElementState::Pressed);
    assert_eq!(response, Response::ignored());
    assert!(!dispatcher.session().mouse_held);
}

#[test]
fn test_release_restores_cursor() {
    let (mut dispatcher, mut player, mut scene) = setup();
    press(&mut dispatcher, &mut player, &mut scene, KeyCode::Digit1);
    dispatcher.on_mouse_button(&player, MouseButton::Left, ElementState::Pressed);

    let response = dispatcher.on_mouse_button(&player, MouseButton::Left, ElementState::Released);
    assert_eq!(response.cursor, Some(CursorMode::Normal));
    assert!(!dispatcher.session().mouse_held);

    let response = dispatcher.on_mouse_button(&player, MouseButton::Left, ElementState::Released);
    assert_eq!(response, Response::ignored());
}

#[test]
fn test_other_buttons_are_ignored() {
    let (mut dispatcher, mut player, mut scene) = setup();
    press(&mut dispatcher, &mut player, &mut scene, KeyCode::Digit1);
    let response = dispatcher.on_mouse_button(&player, MouseButton::Right, ElementState::Pressed);
    assert_eq!(response, Response::ignored());
}

#[test]
fn test_focus_lost_ends_drag() {
    let (mut dispatcher, mut player, mut scene) = setup();
    press(&mut dispatcher, &mut player, &mut scene, KeyCode::Digit1);
    dispatcher.on_mouse_button(&player, MouseButton::Left, ElementState::Pressed);
    dispatcher.on_mouse_move(&mut player, 5.0, 5.0);

    assert_eq!(dispatcher.on_focus_lost().cursor, Some(CursorMode::Normal));
    assert_eq!(*dispatcher.session(), InputSession::default());
    assert_eq!(dispatcher.on_focus_lost(), Response::ignored());
}
