//! Cube extraction: turns bbmodel elements into renderable boxes.
//!
//! Each cube becomes a [`SceneBox`] centered at `origin + (from + to) / 2`
//! with extents `|to - from|`, rotated about its own center by the element's
//! Euler rotation. Non-cube elements are dropped. A document with no cubes
//! yields a single placeholder box so the viewport is never empty.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::color::Rgb;
use crate::consts::{CUBE_LIGHTNESS, CUBE_SATURATION, FALLBACK_BOX_SIZE};
use crate::file::{BBModelElement, BBModelFile};
use crate::math::Vec3;

const DEFAULT_FROM: [f64; 3] = [-1.0, -1.0, -1.0];
const DEFAULT_TO: [f64; 3] = [1.0, 1.0, 1.0];

/// Corner indices of each box face as a closed loop (see [`SceneBox::corners`]).
pub const BOX_FACES: [[usize; 4]; 6] = [
    [1, 5, 7, 3], // +x
    [4, 0, 2, 6], // -x
    [2, 3, 7, 6], // +y
    [4, 5, 1, 0], // -y
    [5, 4, 6, 7], // +z
    [0, 1, 3, 2], // -z
];

/// Outward normals matching [`BOX_FACES`], before rotation.
pub const BOX_FACE_NORMALS: [Vec3; 6] = [
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(-1.0, 0.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, -1.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(0.0, 0.0, -1.0),
];

/// One renderable box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBox {
    pub center: Vec3,
    pub size: Vec3,
    /// Euler rotation in degrees about `center`.
    pub rotation_deg: Vec3,
    pub color: Rgb,
}

impl SceneBox {
    /// Build a box from a cube element with the given hue in degrees.
    #[must_use]
    pub fn from_element(element: &BBModelElement, hue: f64) -> Self {
        let from = Vec3::from_array(element.from.unwrap_or(DEFAULT_FROM));
        let to = Vec3::from_array(element.to.unwrap_or(DEFAULT_TO));
        let origin = Vec3::from_array(element.origin.unwrap_or([0.0; 3]));
        let rotation_deg = Vec3::from_array(element.rotation.unwrap_or([0.0; 3]));
        Self {
            center: origin + (from + to) * 0.5,
            size: (to - from).abs(),
            rotation_deg,
            color: Rgb::from_hsl(hue, CUBE_SATURATION, CUBE_LIGHTNESS),
        }
    }

    /// The eight world-space corners.
    ///
    /// Index bits select the max side per axis: bit 0 = x, bit 1 = y, bit 2 = z.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let half = self.size * 0.5;
        std::array::from_fn(|i| {
            let local = Vec3::new(
                if i & 1 == 0 { -half.x } else { half.x },
                if i & 2 == 0 { -half.y } else { half.y },
                if i & 4 == 0 { -half.z } else { half.z },
            );
            self.center + local.rotate_xyz_deg(self.rotation_deg)
        })
    }

    /// World-space outward normal of face `face` (index into [`BOX_FACES`]).
    #[must_use]
    pub fn face_normal(&self, face: usize) -> Vec3 {
        BOX_FACE_NORMALS[face % BOX_FACE_NORMALS.len()].rotate_xyz_deg(self.rotation_deg)
    }
}

/// Everything the renderer draws.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub boxes: Vec<SceneBox>,
}

impl Scene {
    /// Build a scene from a document, drawing one hue per cube from `next_hue`.
    ///
    /// Falls back to [`Scene::placeholder`] when the document has no cubes.
    pub fn from_file(file: &BBModelFile, mut next_hue: impl FnMut() -> f64) -> Self {
        let boxes: Vec<SceneBox> = file
            .cubes()
            .map(|element| SceneBox::from_element(element, next_hue()))
            .collect();
        if boxes.is_empty() {
            return Self::placeholder();
        }
        Self { boxes }
    }

    /// A single hot-pink box at the origin.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            boxes: vec![SceneBox {
                center: Vec3::ZERO,
                size: Vec3::new(FALLBACK_BOX_SIZE, FALLBACK_BOX_SIZE, FALLBACK_BOX_SIZE),
                rotation_deg: Vec3::ZERO,
                color: Rgb::HOT_PINK,
            }],
        }
    }

    /// World-space bounding box over every corner, or `None` for an empty scene.
    #[must_use]
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut corners = self.boxes.iter().flat_map(SceneBox::corners);
        let first = corners.next()?;
        Some(corners.fold((first, first), |(lo, hi), c| (lo.min(c), hi.max(c))))
    }
}
