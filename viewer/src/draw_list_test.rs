#![allow(clippy::float_cmp)]

use super::*;
use crate::scene::SceneBox;

fn unit_box_at(center: Vec3) -> SceneBox {
    SceneBox { center, size: Vec3::new(2.0, 2.0, 2.0), rotation_deg: Vec3::ZERO, color: Rgb::new(200, 100, 50) }
}

// --- Culling ---

#[test]
fn at_most_three_faces_of_a_box_are_visible() {
    let scene = Scene { boxes: vec![unit_box_at(Vec3::ZERO)] };
    let list = build(&scene, &OrbitCamera::default(), 640.0, 480.0);
    assert!(!list.faces.is_empty());
    assert!(list.faces.len() <= 3);
}

#[test]
fn default_camera_sees_top_and_front() {
    // Camera at (0, 5, 10): only +y and +z face it.
    let scene = Scene { boxes: vec![unit_box_at(Vec3::ZERO)] };
    let list = build(&scene, &OrbitCamera::default(), 640.0, 480.0);
    assert_eq!(list.faces.len(), 2);
}

#[test]
fn boxes_behind_camera_are_skipped() {
    let scene = Scene { boxes: vec![unit_box_at(Vec3::new(0.0, 10.0, 30.0))] };
    let list = build(&scene, &OrbitCamera::default(), 640.0, 480.0);
    assert!(list.faces.is_empty());
}

// --- Ordering ---

#[test]
fn faces_are_sorted_far_to_near() {
    let scene = Scene { boxes: vec![unit_box_at(Vec3::new(0.0, 0.0, 3.0)), unit_box_at(Vec3::new(0.0, 0.0, -6.0))] };
    let list = build(&scene, &OrbitCamera::default(), 640.0, 480.0);
    assert!(list.faces.len() >= 4);
    for pair in list.faces.windows(2) {
        assert!(pair[0].depth >= pair[1].depth);
    }
}

// --- Shading ---

#[test]
fn brightness_has_ambient_floor() {
    let light = Vec3::new(0.0, 1.0, 0.0);
    assert_eq!(face_brightness(Vec3::new(0.0, -1.0, 0.0), light), AMBIENT_LIGHT);
    assert_eq!(face_brightness(light, light), AMBIENT_LIGHT + DIFFUSE_LIGHT);
}

#[test]
fn lit_faces_are_brighter_than_base_shade() {
    let scene = Scene { boxes: vec![unit_box_at(Vec3::ZERO)] };
    let list = build(&scene, &OrbitCamera::default(), 640.0, 480.0);
    for face in &list.faces {
        assert!(face.fill.r >= Rgb::new(200, 100, 50).shade(AMBIENT_LIGHT).r);
    }
}

// --- Grid ---

#[test]
fn grid_spacing_scales_with_scene() {
    assert_eq!(grid_spacing(&Scene::default()), 1.0);
    assert_eq!(grid_spacing(&Scene::placeholder()), 1.0);
    let big = Scene {
        boxes: vec![SceneBox {
            center: Vec3::ZERO,
            size: Vec3::new(64.0, 64.0, 64.0),
            rotation_deg: Vec3::ZERO,
            color: Rgb::HOT_PINK,
        }],
    };
    // radius = 32 * sqrt(3) ~ 55.4, a fifth ~ 11.1 -> 16
    assert_eq!(grid_spacing(&big), 16.0);
}

#[test]
fn grid_includes_axis_lines() {
    let list = build(&Scene::placeholder(), &OrbitCamera::default(), 640.0, 480.0);
    assert!(list.grid.iter().any(|line| line.axis));
    assert!(list.grid.iter().any(|line| !line.axis));
}
