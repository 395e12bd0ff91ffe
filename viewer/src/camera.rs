#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{
    FOV_Y_DEG, FRAME_MARGIN, INITIAL_CAMERA_POSITION, MAX_DISTANCE, MAX_PITCH, MIN_DISTANCE, NEAR_PLANE,
    ORBIT_RADIANS_PER_PX, ZOOM_STEP,
};
use crate::math::Vec3;

/// A point in screen space (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A projected point with its view-space depth (distance along the view axis).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub point: Point,
    pub depth: f64,
}

/// Orbit camera circling `target`.
///
/// `yaw` rotates about the world Y axis (0 = looking down -Z), `pitch` lifts
/// the camera above the XZ plane. Both are radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub yaw: f64,
    pub pitch: f64,
    pub distance: f64,
    pub fov_y_deg: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        let [x, y, z] = INITIAL_CAMERA_POSITION;
        let horizontal = x.hypot(z);
        Self {
            target: Vec3::ZERO,
            yaw: x.atan2(z),
            pitch: y.atan2(horizontal),
            distance: Vec3::new(x, y, z).length(),
            fov_y_deg: FOV_Y_DEG,
        }
    }
}

impl OrbitCamera {
    /// World-space eye position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target + Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.distance
    }

    /// Orthonormal `(right, up, forward)` view basis.
    #[must_use]
    pub fn basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = (self.target - self.position()).normalize();
        let right = forward.cross(Vec3::UP).normalize();
        let up = right.cross(forward);
        (right, up, forward)
    }

    /// Project a world point into a `width` x `height` viewport.
    ///
    /// Returns `None` for points at or behind the near plane.
    #[must_use]
    pub fn project(&self, world: Vec3, width: f64, height: f64) -> Option<Projected> {
        let (right, up, forward) = self.basis();
        let rel = world - self.position();
        let depth = rel.dot(forward);
        if depth < NEAR_PLANE {
            return None;
        }
        let focal = (height * 0.5) / (self.fov_y_deg.to_radians() * 0.5).tan();
        Some(Projected {
            point: Point::new(
                width * 0.5 + rel.dot(right) * focal / depth,
                height * 0.5 - rel.dot(up) * focal / depth,
            ),
            depth,
        })
    }

    /// Rotate around the target by a pointer drag of `(dx, dy)` CSS pixels.
    pub fn orbit(&mut self, dx: f64, dy: f64) {
        self.yaw -= dx * ORBIT_RADIANS_PER_PX;
        self.pitch = (self.pitch + dy * ORBIT_RADIANS_PER_PX).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Dolly in (negative `wheel_delta`) or out (positive), one step per 100 units.
    pub fn zoom(&mut self, wheel_delta: f64) {
        let factor = ZOOM_STEP.powf(wheel_delta / 100.0);
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Aim at the center of `(lo, hi)` and back off until its bounding sphere fits.
    pub fn frame_bounds(&mut self, lo: Vec3, hi: Vec3) {
        self.target = (lo + hi) * 0.5;
        let radius = (hi - lo).length() * 0.5;
        if radius <= f64::EPSILON {
            return;
        }
        let half_fov = (self.fov_y_deg.to_radians() * 0.5).sin();
        self.distance = (radius / half_fov * FRAME_MARGIN).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}
