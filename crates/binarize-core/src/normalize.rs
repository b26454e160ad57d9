//! Input validation and dtype normalization shared by every operation.
//!
//! Rank-2 arrays are read as-is; rank-3 arrays are reduced to luminance
//! first. Nothing here mutates the input.

use crate::grayscale::{to_grayscale, LumaWeights};
use crate::intensity::round_to_level;
use crate::{Intensity, PixelArray, Plane, ThresholdError};

/// Check that `shape` describes a rank-2 or rank-3 array.
pub fn validate_rank(shape: &[usize]) -> Result<(), ThresholdError> {
    match shape.len() {
        2 | 3 => Ok(()),
        rank => Err(ThresholdError::InvalidShape { rank }),
    }
}

/// `(height, width)` of a rank-2 or rank-3 array.
pub fn spatial_dims(shape: &[usize]) -> Result<(usize, usize), ThresholdError> {
    validate_rank(shape)?;
    Ok((shape[0], shape[1]))
}

/// Normalize to an 8-bit level plane (Otsu, and basic thresholding of
/// colour input).
pub fn normalize_levels<T: Intensity>(array: &PixelArray<T>) -> Result<Plane<u8>, ThresholdError> {
    let (height, width) = spatial_dims(array.shape())?;
    if array.rank() == 3 {
        let gray = to_grayscale(array, &LumaWeights::default())?;
        return Ok(gray.map(round_to_level));
    }
    let data = array.as_slice().iter().map(|v| v.to_level()).collect();
    Plane::new(height, width, data)
}

/// Normalize to a floating intensity plane (adaptive thresholding).
pub fn normalize_intensity<T: Intensity>(
    array: &PixelArray<T>,
) -> Result<Plane<f32>, ThresholdError> {
    let (height, width) = spatial_dims(array.shape())?;
    if array.rank() == 3 {
        return to_grayscale(array, &LumaWeights::default());
    }
    let data = array.as_slice().iter().map(|v| v.to_f32()).collect();
    Plane::new(height, width, data)
}
