//! Luminance reduction of interleaved `H x W x C` arrays.

use crate::{Intensity, PixelArray, Plane, ThresholdError};
use serde::{Deserialize, Serialize};

/// Per-channel luminance weights.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LumaWeights {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Default for LumaWeights {
    /// ITU-R BT.601 luma coefficients.
    fn default() -> Self {
        Self {
            r: 0.2989,
            g: 0.5870,
            b: 0.1140,
        }
    }
}

impl LumaWeights {
    #[inline]
    pub fn luma(&self, r: f32, g: f32, b: f32) -> f32 {
        self.r * r + self.g * g + self.b * b
    }
}

/// Reduce a rank-3 array to a single luminance plane.
///
/// One channel is squeezed, three channels are read as RGB and four as RGBA
/// with alpha ignored. The channel axis is dropped from the result.
pub fn to_grayscale<T: Intensity>(
    array: &PixelArray<T>,
    weights: &LumaWeights,
) -> Result<Plane<f32>, ThresholdError> {
    let &[height, width, channels] = array.shape() else {
        return Err(ThresholdError::InvalidShape { rank: array.rank() });
    };

    let data = array.as_slice();
    let gray: Vec<f32> = match channels {
        1 => data.iter().map(|v| v.to_f32()).collect(),
        3 | 4 => data
            .chunks_exact(channels)
            .map(|px| weights.luma(px[0].to_f32(), px[1].to_f32(), px[2].to_f32()))
            .collect(),
        _ => return Err(ThresholdError::UnsupportedChannels { channels }),
    };

    Plane::new(height, width, gray)
}
