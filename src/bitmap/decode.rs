//! Image decoding into the fixed `0xRRGGBBAA` pixel format

use std::path::Path;

use image::DynamicImage;

use super::{alloc_pixels, Bitmap};
use crate::color::Color;
use crate::error::{Error, Result};

impl Bitmap {
    /// Decode an image file (BMP, PNG, ...) into a new owned bitmap
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|source| {
            tracing::warn!(path = %path.display(), error = %source, "image load failed");
            Error::Decode {
                path: Some(path.to_path_buf()),
                source,
            }
        })?;
        let bmp = from_image(&img)?;
        tracing::debug!(
            path = %path.display(),
            width = bmp.width(),
            height = bmp.height(),
            "bitmap loaded"
        );
        Ok(bmp)
    }

    /// Like [`Bitmap::load`], then turn every pixel equal to `key` fully transparent
    pub fn load_with_color_key(path: impl AsRef<Path>, key: Color) -> Result<Self> {
        let mut bmp = Self::load(path)?;
        bmp.key_out(key);
        Ok(bmp)
    }

    /// Decode an in-memory encoded image
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(bytes).map_err(|source| {
            tracing::warn!(len = bytes.len(), error = %source, "image decode failed");
            Error::Decode { path: None, source }
        })?;
        from_image(&img)
    }
}

fn from_image(img: &DynamicImage) -> Result<Bitmap> {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut pixels = alloc_pixels(width, height)?;
    for (dst, px) in pixels.iter_mut().zip(rgba.as_raw().chunks_exact(4)) {
        *dst = u32::from_be_bytes([px[0], px[1], px[2], px[3]]);
    }
    Bitmap::from_pixels(pixels, width, height)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("softblit-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_decode_png_packs_rgba() {
        let img = image::RgbaImage::from_raw(2, 1, vec![10, 20, 30, 40, 255, 0, 128, 255]).unwrap();
        let mut buf = Vec::new();
        DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .unwrap();

        let bmp = Bitmap::decode(&buf).unwrap();
        assert_eq!((bmp.width(), bmp.height()), (2, 1));
        assert!(!bmp.is_shared());
        assert_eq!(bmp.get_pixel(0, 0), 0x0A14_1E28);
        assert_eq!(bmp.get_pixel(1, 0), 0xFF00_80FF);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(matches!(
            Bitmap::decode(b"not an image"),
            Err(Error::Decode { path: None, .. })
        ));
    }

    #[test]
    fn test_load_bmp_with_color_key() {
        let path = temp_path("key.bmp");
        let img = image::RgbImage::from_raw(2, 2, vec![255, 0, 255, 1, 2, 3, 4, 5, 6, 255, 0, 255])
            .unwrap();
        img.save(&path).unwrap();

        let plain = Bitmap::load(&path).unwrap();
        assert_eq!(plain.get_pixel(0, 0), 0xFF00_FFFF);
        assert_eq!(plain.get_pixel(1, 0), 0x0102_03FF);

        let keyed = Bitmap::load_with_color_key(&path, 0xFF00_FFFF).unwrap();
        assert_eq!(keyed.get_pixel(0, 0), 0);
        assert_eq!(keyed.get_pixel(1, 0), 0x0102_03FF);
        assert_eq!(keyed.get_pixel(0, 1), 0x0405_06FF);
        assert_eq!(keyed.get_pixel(1, 1), 0);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_file_is_recoverable() {
        let path = temp_path("does-not-exist.bmp");
        match Bitmap::load(&path) {
            Err(Error::Decode { path: p, .. }) => assert_eq!(p, Some(path)),
            other => panic!("expected decode error, got {:?}", other),
        }
    }
}
