//! GPU rendering.
//!
//! The only renderer draws a decoded image onto a `[-1, 1]` quad. It owns its
//! GPU resources (pipeline, buffers, texture) and creates them lazily on the
//! first frame, once a device exists.

mod ctx;
mod textured_quad;

pub use ctx::{RenderCtx, RenderTarget};
pub use textured_quad::{QuadVertex, TexturedQuadRenderer, QUAD_VERTICES};
