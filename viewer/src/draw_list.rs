//! Projection of a [`Scene`] into screen-space primitives.
//!
//! Everything here is pure so the painter's-algorithm ordering and culling can
//! be tested without a browser. [`crate::render`] only walks the result.

#[cfg(test)]
#[path = "draw_list_test.rs"]
mod draw_list_test;

use crate::camera::{OrbitCamera, Point};
use crate::color::Rgb;
use crate::consts::{AMBIENT_LIGHT, DIFFUSE_LIGHT, GRID_HALF_CELLS, LIGHT_DIRECTION};
use crate::math::Vec3;
use crate::scene::{BOX_FACES, Scene};

/// One visible box face in screen space.
#[derive(Debug, Clone, PartialEq)]
pub struct FacePolygon {
    pub points: [Point; 4],
    /// Mean view depth of the corners; larger is farther.
    pub depth: f64,
    pub fill: Rgb,
}

/// One projected ground-grid segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub from: Point,
    pub to: Point,
    /// Axis lines through the origin are emphasized.
    pub axis: bool,
}

/// Primitives to paint, in paint order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    pub grid: Vec<GridLine>,
    /// Sorted far-to-near.
    pub faces: Vec<FacePolygon>,
}

/// Build the draw list for `scene` seen by `camera` in a `width` x `height` viewport.
#[must_use]
pub fn build(scene: &Scene, camera: &OrbitCamera, width: f64, height: f64) -> DrawList {
    let eye = camera.position();
    let light = Vec3::from_array(LIGHT_DIRECTION).normalize();
    let mut faces = Vec::with_capacity(scene.boxes.len() * 3);

    for scene_box in &scene.boxes {
        let corners = scene_box.corners();
        for (face, indices) in BOX_FACES.iter().enumerate() {
            let normal = scene_box.face_normal(face);
            let face_center = indices.iter().fold(Vec3::ZERO, |acc, &i| acc + corners[i]) * 0.25;
            if normal.dot(eye - face_center) <= 0.0 {
                continue;
            }
            let mut points = [Point::new(0.0, 0.0); 4];
            let mut depth = 0.0;
            let mut visible = true;
            for (slot, &i) in indices.iter().enumerate() {
                let Some(projected) = camera.project(corners[i], width, height) else {
                    visible = false;
                    break;
                };
                points[slot] = projected.point;
                depth += projected.depth * 0.25;
            }
            if !visible {
                continue;
            }
            faces.push(FacePolygon { points, depth, fill: scene_box.color.shade(face_brightness(normal, light)) });
        }
    }

    faces.sort_by(|a, b| b.depth.total_cmp(&a.depth));

    let spacing = grid_spacing(scene);
    DrawList { grid: grid_lines(camera, spacing, width, height), faces }
}

/// Lambert term with an ambient floor.
#[must_use]
pub fn face_brightness(normal: Vec3, light: Vec3) -> f64 {
    AMBIENT_LIGHT + DIFFUSE_LIGHT * normal.dot(light).max(0.0)
}

/// Grid cell size: the smallest power of two covering a fifth of the scene radius.
#[must_use]
pub fn grid_spacing(scene: &Scene) -> f64 {
    let Some((lo, hi)) = scene.bounds() else {
        return 1.0;
    };
    let target = (hi - lo).length() * 0.5 / 5.0;
    let mut spacing = 1.0;
    while spacing < target {
        spacing *= 2.0;
    }
    spacing
}

fn grid_lines(camera: &OrbitCamera, spacing: f64, width: f64, height: f64) -> Vec<GridLine> {
    let extent = f64::from(GRID_HALF_CELLS) * spacing;
    let mut lines = Vec::new();
    for step in -GRID_HALF_CELLS..=GRID_HALF_CELLS {
        let offset = f64::from(step) * spacing;
        let segments = [
            (Vec3::new(offset, 0.0, -extent), Vec3::new(offset, 0.0, extent)),
            (Vec3::new(-extent, 0.0, offset), Vec3::new(extent, 0.0, offset)),
        ];
        for (start, end) in segments {
            let (Some(a), Some(b)) = (camera.project(start, width, height), camera.project(end, width, height)) else {
                continue;
            };
            lines.push(GridLine { from: a.point, to: b.point, axis: step == 0 });
        }
    }
    lines
}
