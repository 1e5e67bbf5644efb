use glam::{Mat4, Vec3, Vec4};
use super::*;

#[test]
fn test_default_is_identity() {
    assert_eq!(ModelPose::default().model_matrix(), Mat4::IDENTITY);
}

#[test]
fn test_translation_only() {
    let pose = ModelPose::new(Vec3::new(1.0, -5.0, 2.0), Vec3::ZERO, Vec3::ONE);
    let origin = pose.model_matrix() * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert_eq!(origin.truncate(), Vec3::new(1.0, -5.0, 2.0));
}

#[test]
fn test_scale_applies_after_rotation() {
    let pose = ModelPose::new(Vec3::ZERO, Vec3::new(0.0, 90.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
    let p = pose.model_matrix() * Vec4::new(0.0, 0.0, 1.0, 1.0);
    // +Z rotated 90 degrees about Y lands on +X, then doubled
    assert!((p.truncate() - Vec3::new(2.0, 0.0, 0.0)).length() < 1e-5);
}

#[test]
fn test_rotation_order_x_then_y() {
    let pose = ModelPose::new(Vec3::ZERO, Vec3::new(90.0, 90.0, 0.0), Vec3::ONE);
    let expected = Mat4::from_rotation_x(90f32.to_radians()) * Mat4::from_rotation_y(90f32.to_radians());
    assert!(pose.model_matrix().abs_diff_eq(expected, 1e-6));
}
