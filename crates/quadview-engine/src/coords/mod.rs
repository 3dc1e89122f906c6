//! Geometry shared by the renderer and the viewer.
//!
//! Conventions:
//! - `Viewport` is in physical pixels (the framebuffer size).
//! - `Mat4` is column-major and multiplies column vectors, matching WGSL.
//! - Clip-space depth is `[0, 1]`.

mod color;
mod mat4;
mod viewport;

pub use color::ColorRgba;
pub use mat4::{quad_projection, Mat4};
pub use viewport::Viewport;
