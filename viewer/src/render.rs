//! Rendering: paints a [`DrawList`] onto a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a fully projected draw list and produces pixels; it does not
//! mutate any viewer state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::view::Viewer::render`]) handles the result.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::draw_list::{DrawList, FacePolygon, GridLine};

const BACKGROUND: &str = "#f0f0f0";
const GRID_STROKE: &str = "#c8c8c8";
const AXIS_STROKE: &str = "#8a8a8a";
const EDGE_STROKE: &str = "rgba(0, 0, 0, 0.25)";

/// Draw the full frame.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    list: &DrawList,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    // Layer 1: clear with the viewport background.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, viewport_w, viewport_h);

    // Layer 2: ground grid, minor lines under axis lines.
    for line in list.grid.iter().filter(|line| !line.axis) {
        draw_grid_line(ctx, line, GRID_STROKE);
    }
    for line in list.grid.iter().filter(|line| line.axis) {
        draw_grid_line(ctx, line, AXIS_STROKE);
    }

    // Layer 3: faces, already sorted far-to-near.
    for face in &list.faces {
        draw_face(ctx, face);
    }

    Ok(())
}

fn draw_grid_line(ctx: &CanvasRenderingContext2d, line: &GridLine, stroke: &str) {
    ctx.begin_path();
    ctx.set_stroke_style_str(stroke);
    ctx.set_line_width(1.0);
    ctx.move_to(line.from.x, line.from.y);
    ctx.line_to(line.to.x, line.to.y);
    ctx.stroke();
}

fn draw_face(ctx: &CanvasRenderingContext2d, face: &FacePolygon) {
    let [first, rest @ ..] = &face.points;
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for point in rest {
        ctx.line_to(point.x, point.y);
    }
    ctx.close_path();

    ctx.set_fill_style_str(&face.fill.to_css());
    ctx.fill();
    ctx.set_stroke_style_str(EDGE_STROKE);
    ctx.set_line_width(1.0);
    ctx.stroke();
}
