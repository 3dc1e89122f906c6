use std::path::Path;

use anyhow::{Context, Result};

/// Tightly packed 8-bit RGBA pixels, row-major, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RgbaImage {
    pub const BYTES_PER_PIXEL: u32 = 4;

    /// Decodes a PNG held in memory.
    ///
    /// Every PNG color type and bit depth is expanded (or reduced, for 16-bit
    /// input) to RGBA8; images without alpha come out opaque.
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self> {
        let decoded = ::image::load_from_memory_with_format(bytes, ::image::ImageFormat::Png)
            .context("failed to decode PNG data")?
            .to_rgba8();

        let (width, height) = decoded.dimensions();
        anyhow::ensure!(width > 0 && height > 0, "PNG has zero size ({width}x{height})");

        Ok(Self {
            width,
            height,
            pixels: decoded.into_raw(),
        })
    }

    /// Reads and decodes a PNG file.
    pub fn load_png(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read image `{}`", path.display()))?;

        let image = Self::from_png_bytes(&bytes)
            .with_context(|| format!("failed to load image `{}`", path.display()))?;

        log::info!(
            "decoded `{}`: {}x{} ({} bytes)",
            path.display(),
            image.width,
            image.height,
            image.pixels.len()
        );
        Ok(image)
    }

    /// Bytes per pixel row.
    #[inline]
    pub fn bytes_per_row(&self) -> u32 {
        self.width * Self::BYTES_PER_PIXEL
    }

    /// RGBA of the pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * Self::BYTES_PER_PIXEL) as usize;
        self.pixels.get(i..i + 4)?.try_into().ok()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn encode(img: impl Into<::image::DynamicImage>) -> Vec<u8> {
        let mut out = Vec::new();
        img.into()
            .write_to(&mut Cursor::new(&mut out), ::image::ImageFormat::Png)
            .expect("encode fixture");
        out
    }

    #[test]
    fn decodes_rgba_png() {
        let src = ::image::RgbaImage::from_fn(3, 2, |x, y| ::image::Rgba([x as u8 * 10, y as u8 * 20, 7, 128]));
        let img = RgbaImage::from_png_bytes(&encode(src)).unwrap();

        assert_eq!((img.width, img.height), (3, 2));
        assert_eq!(img.pixels.len(), 3 * 2 * 4);
        assert_eq!(img.bytes_per_row(), 12);
        assert_eq!(img.pixel(2, 1), Some([20, 20, 7, 128]));
    }

    #[test]
    fn top_row_comes_first() {
        let src = ::image::RgbaImage::from_fn(1, 2, |_, y| {
            if y == 0 { ::image::Rgba([255, 0, 0, 255]) } else { ::image::Rgba([0, 0, 255, 255]) }
        });
        let img = RgbaImage::from_png_bytes(&encode(src)).unwrap();

        assert_eq!(&img.pixels[..4], &[255, 0, 0, 255]);
        assert_eq!(&img.pixels[4..], &[0, 0, 255, 255]);
    }

    #[test]
    fn grayscale_png_expands_to_opaque_rgba() {
        let src = ::image::GrayImage::from_pixel(2, 2, ::image::Luma([90]));
        let img = RgbaImage::from_png_bytes(&encode(src)).unwrap();

        assert_eq!(img.pixel(1, 1), Some([90, 90, 90, 255]));
    }

    #[test]
    fn rgb_png_gets_full_alpha() {
        let src = ::image::RgbImage::from_pixel(1, 1, ::image::Rgb([1, 2, 3]));
        let img = RgbaImage::from_png_bytes(&encode(src)).unwrap();

        assert_eq!(img.pixels, vec![1, 2, 3, 255]);
    }

    #[test]
    fn garbage_is_rejected() {
        let err = RgbaImage::from_png_bytes(b"definitely not a png").unwrap_err();
        assert!(format!("{err:#}").contains("failed to decode PNG"));
    }

    #[test]
    fn truncated_png_is_rejected() {
        let src = ::image::RgbaImage::from_pixel(16, 16, ::image::Rgba([9, 9, 9, 255]));
        let bytes = encode(src);
        assert!(RgbaImage::from_png_bytes(&bytes[..bytes.len() / 2]).is_err());
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let path = std::env::temp_dir().join("quadview-missing-fixture.png");
        let err = RgbaImage::load_png(&path).unwrap_err();
        assert!(format!("{err:#}").contains("quadview-missing-fixture.png"));
    }

    #[test]
    fn loads_png_from_disk() {
        let path = std::env::temp_dir().join(format!("quadview-fixture-{}.png", std::process::id()));
        let src = ::image::RgbaImage::from_pixel(4, 3, ::image::Rgba([10, 20, 30, 40]));
        std::fs::write(&path, encode(src)).unwrap();

        let img = RgbaImage::load_png(&path);
        let _ = std::fs::remove_file(&path);
        let img = img.unwrap();

        assert_eq!((img.width, img.height), (4, 3));
        assert_eq!(img.pixel(3, 2), Some([10, 20, 30, 40]));
        assert_eq!(img.pixel(4, 0), None);
    }
}
