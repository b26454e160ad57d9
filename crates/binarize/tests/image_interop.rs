#![cfg(feature = "image")]

use binarize::{adaptive_threshold, otsu_threshold, PixelArray};
use image::{GrayImage, Luma, Rgb, RgbImage};

#[test]
fn otsu_on_gray_image_roundtrips_through_image_crate() {
    let img = GrayImage::from_fn(16, 8, |x, _| Luma([if x < 8 { 30 } else { 220 }]));
    let out = otsu_threshold(&PixelArray::from(&img)).unwrap().to_gray_image();
    assert_eq!(out.dimensions(), (16, 8));
    for (x, _, px) in out.enumerate_pixels() {
        assert_eq!(px[0], if x < 8 { 0 } else { 255 });
    }
}

#[test]
fn adaptive_on_rgb_image_keeps_spatial_shape() {
    let img = RgbImage::from_fn(12, 9, |x, y| Rgb([(x * 20) as u8, (y * 25) as u8, 40]));
    let out = adaptive_threshold(&PixelArray::from(&img), 4).unwrap();
    assert_eq!(out.shape(), (9, 12));
}
