use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{OrbitCamera, Point};
use crate::draw_list::{self, DrawList};
use crate::file::BBModelFile;
use crate::render;
use crate::scene::Scene;

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// Core viewer state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Viewer` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct ViewerCore {
    pub scene: Scene,
    pub camera: OrbitCamera,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    drag_anchor: Option<Point>,
}

impl Default for ViewerCore {
    fn default() -> Self {
        Self {
            scene: Scene::placeholder(),
            camera: OrbitCamera::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
            drag_anchor: None,
        }
    }
}

impl ViewerCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the scene with the cubes of `file` and frame them.
    pub fn load_file(&mut self, file: &BBModelFile, next_hue: impl FnMut() -> f64) {
        self.set_scene(Scene::from_file(file, next_hue));
    }

    /// Replace the scene and aim the camera at its bounds.
    pub fn set_scene(&mut self, scene: Scene) {
        self.scene = scene;
        if let Some((lo, hi)) = self.scene.bounds() {
            self.camera.frame_bounds(lo, hi);
        }
    }

    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr;
    }

    // --- Orbit controls ---

    pub fn on_pointer_down(&mut self, screen_pt: Point) {
        self.drag_anchor = Some(screen_pt);
    }

    /// Orbit by the movement since the last pointer event. Returns `true` when
    /// the view changed and needs a redraw.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> bool {
        let Some(anchor) = self.drag_anchor else {
            return false;
        };
        self.camera.orbit(screen_pt.x - anchor.x, screen_pt.y - anchor.y);
        self.drag_anchor = Some(screen_pt);
        true
    }

    pub fn on_pointer_up(&mut self) {
        self.drag_anchor = None;
    }

    pub fn on_wheel(&mut self, delta_y: f64) {
        self.camera.zoom(delta_y);
    }

    /// Project the current scene for the current viewport.
    #[must_use]
    pub fn draw_list(&self) -> DrawList {
        draw_list::build(&self.scene, &self.camera, self.viewport_width, self.viewport_height)
    }
}

/// The full viewer. Wraps `ViewerCore` and owns the browser canvas element.
pub struct Viewer {
    canvas: HtmlCanvasElement,
    pub core: ViewerCore,
}

impl Viewer {
    /// Create a viewer bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: ViewerCore::new() }
    }

    /// Size the backing store to the element's CSS box times `dpr`.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            self.canvas.set_width((width_css * dpr).round().max(1.0) as u32);
            self.canvas.set_height((height_css * dpr).round().max(1.0) as u32);
        }
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(
            &ctx,
            &self.core.draw_list(),
            self.core.viewport_width,
            self.core.viewport_height,
            self.core.dpr,
        )
    }
}
