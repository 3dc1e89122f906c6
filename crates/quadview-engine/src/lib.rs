//! Quadview engine crate.
//!
//! Owns the window + GPU runtime and the textured quad renderer used by the
//! `quadview` binary.

pub mod core;
pub mod coords;
pub mod device;
pub mod image;
pub mod input;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
