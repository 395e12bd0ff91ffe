//! Shared numeric constants for the viewer crate.

// ── Camera ──────────────────────────────────────────────────────

/// Vertical field of view in degrees.
pub const FOV_Y_DEG: f64 = 75.0;

/// Initial camera position; the camera looks at the origin from here.
pub const INITIAL_CAMERA_POSITION: [f64; 3] = [0.0, 5.0, 10.0];

/// Points closer than this (view-space depth) are not projected.
pub const NEAR_PLANE: f64 = 0.1;

/// Radians of yaw/pitch per dragged CSS pixel.
pub const ORBIT_RADIANS_PER_PX: f64 = 0.01;

/// Pitch is clamped to ±this many radians to keep the up vector stable.
pub const MAX_PITCH: f64 = 1.5;

/// Closest the camera may zoom to its target.
pub const MIN_DISTANCE: f64 = 1.0;

/// Farthest the camera may zoom from its target.
pub const MAX_DISTANCE: f64 = 2000.0;

/// Zoom factor applied per wheel notch (100 delta units).
pub const ZOOM_STEP: f64 = 1.1;

/// Extra room left around the scene when framing it.
pub const FRAME_MARGIN: f64 = 1.2;

// ── Lighting ────────────────────────────────────────────────────

/// Light contribution every face receives regardless of orientation.
pub const AMBIENT_LIGHT: f64 = 0.5;

/// Maximum directional contribution for a face pointing at the light.
pub const DIFFUSE_LIGHT: f64 = 0.5;

/// Direction towards the light (un-normalized).
pub const LIGHT_DIRECTION: [f64; 3] = [10.0, 10.0, 10.0];

// ── Grid ────────────────────────────────────────────────────────

/// Number of grid cells drawn on each side of the origin.
pub const GRID_HALF_CELLS: i32 = 10;

// ── Scene ───────────────────────────────────────────────────────

/// Saturation of generated cube colors.
pub const CUBE_SATURATION: f64 = 0.7;

/// Lightness of generated cube colors.
pub const CUBE_LIGHTNESS: f64 = 0.6;

/// Edge length of the placeholder box shown when a document has no cubes.
pub const FALLBACK_BOX_SIZE: f64 = 2.0;
