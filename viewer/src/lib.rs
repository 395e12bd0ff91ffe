//! Lightweight 3D preview renderer for Blockbench `.bbmodel` documents.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It reads the
//! loosely-typed bbmodel JSON, keeps only cube elements, and draws them as
//! shaded boxes on a 2D canvas with an orbit camera. There is no GPU pipeline:
//! boxes are projected on the CPU and painted back-to-front.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`file`] | Serde types for the bbmodel document (partially interpreted) |
//! | [`scene`] | Cube extraction: centers, extents, rotation, colors |
//! | [`math`] | `Vec3` and Euler rotation helpers |
//! | [`color`] | RGB/HSL conversion and face shading |
//! | [`camera`] | Orbit camera and perspective projection |
//! | [`draw_list`] | Projected, culled, depth-sorted faces and grid lines |
//! | [`render`] | Canvas 2D drawing of a draw list |
//! | [`view`] | Testable [`view::ViewerCore`] plus the canvas-bound [`view::Viewer`] |
//! | [`consts`] | Shared numeric constants (camera limits, lighting, grid) |

pub mod camera;
pub mod color;
pub mod consts;
pub mod draw_list;
pub mod file;
pub mod math;
pub mod render;
pub mod scene;
pub mod view;
