use glam::{Mat4, Vec3};
use super::*;

#[test]
fn test_camera_default() {
    let camera = Camera::default();
    assert_eq!(camera.origin, Vec3::ZERO);
    assert_eq!(camera.fov, 90.0);
    assert_eq!(camera.near_plane, 0.1);
    assert_eq!(camera.far_plane, 1024.0);
}

#[test]
fn test_forward_default_is_positive_z() {
    let forward = Camera::default().forward();
    assert!((forward - Vec3::Z).length() < 1e-6);
}

#[test]
fn test_forward_yaw_quarter_turn() {
    let camera = Camera {
        angle: Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0),
        ..Camera::default()
    };
    // Yaw of +90 degrees around Y turns +Z into +X
    assert!((camera.forward() - Vec3::X).length() < 1e-5);
}

#[test]
fn test_view_projection_is_projection_times_view() {
    let camera = Camera {
        origin: Vec3::new(1.0, 2.0, 3.0),
        ..Camera::default()
    };
    let expected = camera.projection(16.0 / 9.0) * camera.view();
    assert_eq!(camera.view_projection(16.0 / 9.0), expected);
}

#[test]
fn test_projection_matches_glam() {
    let camera = Camera::default();
    let expected = Mat4::perspective_rh(90f32.to_radians(), 1.0, 0.1, 1024.0);
    assert_eq!(camera.projection(1.0), expected);
}

#[test]
fn test_point_in_front_is_inside_frustum() {
    let frustum = Camera::default().frustum(1.0);
    assert!(frustum.is_aabb_visible(Vec3::new(-1.0, -1.0, 9.0), Vec3::new(1.0, 1.0, 11.0)));
    assert!(!frustum.is_aabb_visible(Vec3::new(-1.0, -1.0, -11.0), Vec3::new(1.0, 1.0, -9.0)));
}
