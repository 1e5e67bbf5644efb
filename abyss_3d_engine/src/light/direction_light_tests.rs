use glam::Vec3;
use super::*;

fn create_light(position: Vec3) -> DirectionLight {
    let light = Light::with_color(position, Vec3::ONE, 0.4, 0.7, 40.0).unwrap();
    DirectionLight::new(light, 1.0).unwrap()
}

#[test]
fn test_direction_points_back_to_origin() {
    let light = create_light(Vec3::new(0.0, 10.0, 0.0));
    assert_eq!(light.direction(), Vec3::new(0.0, -1.0, 0.0));
}

#[test]
fn test_direction_is_unit() {
    let light = create_light(Vec3::new(4.0, 11.0, -3.0));
    assert!((light.direction().length() - 1.0).abs() < 1e-5);
    assert!(light.direction().dot(light.light.position) < 0.0);
}

#[test]
fn test_rejects_origin_and_negative_intensity() {
    let at_origin = Light::with_color(Vec3::ZERO, Vec3::ONE, 0.4, 0.7, 40.0).unwrap();
    assert!(DirectionLight::new(at_origin, 1.0).is_err());

    let light = Light::with_color(Vec3::Y, Vec3::ONE, 0.4, 0.7, 40.0).unwrap();
    assert!(DirectionLight::new(light, -1.0).is_err());
}

#[test]
fn test_adjust_intensity_saturates_at_zero() {
    let mut light = create_light(Vec3::Y);
    light.adjust_intensity(0.5);
    assert_eq!(light.intensity, 1.5);
    light.adjust_intensity(-5.0);
    assert_eq!(light.intensity, 0.0);
}

#[test]
fn test_uniform_layout() {
    let light = create_light(Vec3::new(0.0, 0.0, 2.0));
    let uniform = light.uniform();
    assert_eq!(std::mem::size_of::<DirectionLightUniform>(), 64);
    assert_eq!(uniform.direction, [0.0, 0.0, -1.0]);
    assert_eq!(uniform.intensity, 1.0);
}
