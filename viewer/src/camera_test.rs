#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

// --- Defaults ---

#[test]
fn default_position_matches_initial_eye() {
    let cam = OrbitCamera::default();
    assert!(vec_approx_eq(cam.position(), Vec3::new(0.0, 5.0, 10.0)));
}

#[test]
fn default_targets_origin() {
    let cam = OrbitCamera::default();
    assert_eq!(cam.target, Vec3::ZERO);
    assert_eq!(cam.fov_y_deg, 75.0);
}

#[test]
fn basis_is_orthonormal() {
    let (right, up, forward) = OrbitCamera::default().basis();
    assert!(approx_eq(right.length(), 1.0));
    assert!(approx_eq(up.length(), 1.0));
    assert!(approx_eq(forward.length(), 1.0));
    assert!(approx_eq(right.dot(up), 0.0));
    assert!(approx_eq(right.dot(forward), 0.0));
    assert!(approx_eq(up.dot(forward), 0.0));
}

// --- project ---

#[test]
fn target_projects_to_viewport_center() {
    let cam = OrbitCamera::default();
    let p = cam.project(Vec3::ZERO, 800.0, 400.0).unwrap();
    assert!(approx_eq(p.point.x, 400.0));
    assert!(approx_eq(p.point.y, 200.0));
    assert!(approx_eq(p.depth, cam.distance));
}

#[test]
fn positive_x_projects_right_of_center() {
    let cam = OrbitCamera::default();
    let p = cam.project(Vec3::new(1.0, 0.0, 0.0), 800.0, 400.0).unwrap();
    assert!(p.point.x > 400.0);
}

#[test]
fn positive_y_projects_above_center() {
    let cam = OrbitCamera::default();
    let p = cam.project(Vec3::new(0.0, 1.0, 0.0), 800.0, 400.0).unwrap();
    assert!(p.point.y < 200.0);
}

#[test]
fn nearer_points_have_smaller_depth() {
    let cam = OrbitCamera::default();
    let near = cam.project(Vec3::new(0.0, 0.0, 2.0), 100.0, 100.0).unwrap();
    let far = cam.project(Vec3::new(0.0, 0.0, -2.0), 100.0, 100.0).unwrap();
    assert!(near.depth < far.depth);
}

#[test]
fn points_behind_camera_are_not_projected() {
    let cam = OrbitCamera::default();
    assert!(cam.project(Vec3::new(0.0, 10.0, 20.0), 100.0, 100.0).is_none());
}

// --- orbit ---

#[test]
fn orbit_horizontal_changes_yaw_only() {
    let mut cam = OrbitCamera::default();
    let pitch = cam.pitch;
    cam.orbit(100.0, 0.0);
    assert!(approx_eq(cam.yaw, -1.0));
    assert_eq!(cam.pitch, pitch);
}

#[test]
fn orbit_pitch_is_clamped() {
    let mut cam = OrbitCamera::default();
    cam.orbit(0.0, 10_000.0);
    assert_eq!(cam.pitch, MAX_PITCH);
    cam.orbit(0.0, -20_000.0);
    assert_eq!(cam.pitch, -MAX_PITCH);
}

#[test]
fn orbit_keeps_distance() {
    let mut cam = OrbitCamera::default();
    let before = (cam.position() - cam.target).length();
    cam.orbit(37.0, -12.0);
    let after = (cam.position() - cam.target).length();
    assert!(approx_eq(before, after));
}

// --- zoom ---

#[test]
fn zoom_in_and_out() {
    let mut cam = OrbitCamera::default();
    let start = cam.distance;
    cam.zoom(-100.0);
    assert!(cam.distance < start);
    cam.zoom(100.0);
    assert!(approx_eq(cam.distance, start));
}

#[test]
fn zoom_is_clamped() {
    let mut cam = OrbitCamera::default();
    cam.zoom(-1_000_000.0);
    assert_eq!(cam.distance, MIN_DISTANCE);
    cam.zoom(1_000_000.0);
    assert_eq!(cam.distance, MAX_DISTANCE);
}

// --- frame_bounds ---

#[test]
fn frame_bounds_centers_target() {
    let mut cam = OrbitCamera::default();
    cam.frame_bounds(Vec3::new(0.0, 0.0, 0.0), Vec3::new(16.0, 32.0, 16.0));
    assert_eq!(cam.target, Vec3::new(8.0, 16.0, 8.0));
}

#[test]
fn frame_bounds_keeps_corners_in_view() {
    let mut cam = OrbitCamera::default();
    let lo = Vec3::new(-8.0, 0.0, -8.0);
    let hi = Vec3::new(8.0, 24.0, 8.0);
    cam.frame_bounds(lo, hi);
    for corner in [lo, hi, Vec3::new(lo.x, hi.y, lo.z), Vec3::new(hi.x, lo.y, hi.z)] {
        let p = cam.project(corner, 500.0, 500.0).unwrap();
        assert!((0.0..=500.0).contains(&p.point.x), "{corner:?} -> {p:?}");
        assert!((0.0..=500.0).contains(&p.point.y), "{corner:?} -> {p:?}");
    }
}

#[test]
fn frame_bounds_ignores_degenerate_box() {
    let mut cam = OrbitCamera::default();
    let distance = cam.distance;
    cam.frame_bounds(Vec3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(cam.target, Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(cam.distance, distance);
}
