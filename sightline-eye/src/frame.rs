//! Frame handling
//!
//! A `Frame` is one still image in the RGB8 layout the detector expects.
//! The conversion from whatever the caller decoded happens exactly once,
//! at construction; the pipeline echoes the frame back unchanged for
//! display.

use crate::error::VisionError;
use image::{DynamicImage, RgbImage};

/// One still image submitted for analysis, stored as 3-channel RGB.
#[derive(Debug, Clone)]
pub struct Frame {
    image: RgbImage,
}

impl Frame {
    /// Build a frame from a decoded image, converting to RGB8.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self {
            image: image.to_rgb8(),
        }
    }

    /// Build a frame from encoded bytes (PNG, JPEG, ...).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, VisionError> {
        let decoded = image::load_from_memory(bytes)?;
        Ok(Self::from_dynamic(decoded))
    }

    /// Build a frame from an already-RGB8 buffer.
    pub fn from_rgb(image: RgbImage) -> Self {
        Self { image }
    }

    /// Build a uniformly-colored frame. Handy for tests and demos.
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Result<Self, VisionError> {
        if width == 0 || height == 0 {
            return Err(VisionError::Frame(
                "Frame dimensions must be non-zero".to_string(),
            ));
        }
        Ok(Self {
            image: RgbImage::from_pixel(width, height, image::Rgb(rgb)),
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The underlying RGB pixel grid.
    pub fn as_rgb(&self) -> &RgbImage {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_from_rgb() {
        let img = RgbImage::new(4, 3);
        let frame = Frame::from_rgb(img);
        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 3);
    }

    #[test]
    fn test_frame_from_dynamic_converts_to_rgb() {
        let rgba = image::RgbaImage::new(2, 2);
        let frame = Frame::from_dynamic(DynamicImage::ImageRgba8(rgba));
        assert_eq!(frame.as_rgb().dimensions(), (2, 2));
    }

    #[test]
    fn test_frame_solid_rejects_zero_dims() {
        assert!(Frame::solid(0, 4, [0, 0, 0]).is_err());
        assert!(Frame::solid(4, 0, [0, 0, 0]).is_err());
    }

    #[test]
    fn test_frame_from_bytes_rejects_garbage() {
        let result = Frame::from_bytes(b"not an image");
        assert!(result.is_err());
    }
}
