//! Decoded image data ready for texture upload.

mod decode;

pub use decode::RgbaImage;
