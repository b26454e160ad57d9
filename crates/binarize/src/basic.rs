//! Global fixed-threshold binarization.

use binarize_core::{normalize_levels, spatial_dims, Intensity, PixelArray, Plane, ThresholdError};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Foreground value written to binary outputs.
pub const FOREGROUND: u8 = 255;
/// Background value written to binary outputs.
pub const BACKGROUND: u8 = 0;

/// Binarize a level plane: `255` where the level is strictly above `level`,
/// `0` otherwise.
pub fn apply_level(plane: &Plane<u8>, level: u8) -> Plane<u8> {
    plane.map(|v| if v > level { FOREGROUND } else { BACKGROUND })
}

/// Binarize `image` against a fixed `threshold` in `[0, 255]`.
///
/// Rank-2 samples are compared at their own precision, so `50.5` is above
/// `50`. Rank-3 input is reduced to luminance and rounded to 8-bit levels
/// first. A pixel equal to the threshold maps to `0`.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(image), fields(shape = ?image.shape()))
)]
pub fn basic_threshold<T: Intensity>(
    image: &PixelArray<T>,
    threshold: i32,
) -> Result<Plane<u8>, ThresholdError> {
    let (height, width) = spatial_dims(image.shape())?;
    let level = u8::try_from(threshold).map_err(|_| {
        ThresholdError::invalid_argument(
            "threshold",
            format!("{threshold} is outside the 8-bit range [0, 255]"),
        )
    })?;
    if image.rank() == 3 {
        let plane = normalize_levels(image)?;
        return Ok(apply_level(&plane, level));
    }
    let data = image
        .as_slice()
        .iter()
        .map(|v| if v.exceeds(level) { FOREGROUND } else { BACKGROUND })
        .collect();
    Plane::new(height, width, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn striped_4x4() -> PixelArray<u8> {
        let row = [0u8, 0, 200, 200];
        PixelArray::gray(4, 4, row.repeat(4)).unwrap()
    }

    #[test]
    fn splits_columns_of_striped_image() {
        let out = basic_threshold(&striped_4x4(), 100).unwrap();
        assert_eq!(out.shape(), (4, 4));
        for r in 0..4 {
            assert_eq!(out.row(r), &[0, 0, 255, 255]);
        }
    }

    #[test]
    fn equal_to_threshold_is_background() {
        let img = PixelArray::gray(1, 3, vec![99u8, 100, 101]).unwrap();
        let out = basic_threshold(&img, 100).unwrap();
        assert_eq!(out.as_slice(), &[0, 0, 255]);
    }

    #[test]
    fn float_samples_keep_fractional_part() {
        let img = PixelArray::gray(1, 3, vec![50.5f32, 50.0, 50.9]).unwrap();
        assert_eq!(basic_threshold(&img, 50).unwrap().as_slice(), &[255, 0, 255]);

        let wide = PixelArray::gray(1, 3, vec![-1.0f64, 255.5, 1e9]).unwrap();
        assert_eq!(basic_threshold(&wide, 255).unwrap().as_slice(), &[0, 255, 255]);
    }

    #[test]
    fn threshold_255_is_all_background() {
        let img = PixelArray::gray(1, 2, vec![255u8, 0]).unwrap();
        let out = basic_threshold(&img, 255).unwrap();
        assert_eq!(out.as_slice(), &[0, 0]);
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        assert!(basic_threshold(&striped_4x4(), -1)
            .unwrap_err()
            .is_argument_error());
        assert!(basic_threshold(&striped_4x4(), 256)
            .unwrap_err()
            .is_argument_error());
    }

    #[test]
    fn rgb_input_is_reduced_to_gray() {
        // Luminance of (255, 0, 0) rounds to 76.
        let img = PixelArray::with_channels(1, 2, 3, vec![255u8, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(basic_threshold(&img, 75).unwrap().as_slice(), &[255, 0]);
        assert_eq!(basic_threshold(&img, 76).unwrap().as_slice(), &[0, 0]);
    }

    #[test]
    fn rank_four_fails_with_shape_error() {
        let img = PixelArray::new(vec![1, 1, 1, 1], vec![0u8]).unwrap();
        assert_eq!(
            basic_threshold(&img, 10).unwrap_err(),
            ThresholdError::InvalidShape { rank: 4 }
        );
    }
}
