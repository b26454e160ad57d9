//! Conversions to and from `image` crate buffers.

use crate::{PixelArray, Plane};

impl From<&image::GrayImage> for PixelArray<u8> {
    fn from(img: &image::GrayImage) -> Self {
        let (w, h) = img.dimensions();
        PixelArray {
            shape: vec![h as usize, w as usize],
            data: img.as_raw().clone(),
        }
    }
}

impl From<&image::RgbImage> for PixelArray<u8> {
    fn from(img: &image::RgbImage) -> Self {
        let (w, h) = img.dimensions();
        PixelArray {
            shape: vec![h as usize, w as usize, 3],
            data: img.as_raw().clone(),
        }
    }
}

impl From<&image::RgbaImage> for PixelArray<u8> {
    fn from(img: &image::RgbaImage) -> Self {
        let (w, h) = img.dimensions();
        PixelArray {
            shape: vec![h as usize, w as usize, 4],
            data: img.as_raw().clone(),
        }
    }
}

impl Plane<u8> {
    /// Copy into an `image::GrayImage`.
    pub fn to_gray_image(&self) -> image::GrayImage {
        image::GrayImage::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            image::Luma([self.row(y as usize)[x as usize]])
        })
    }
}
