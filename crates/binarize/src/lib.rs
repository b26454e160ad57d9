//! Image binarization: fixed global threshold, tiled adaptive-mean
//! threshold and Otsu's histogram-selected threshold.
//!
//! All three operations accept a rank-2 (`H x W`) or rank-3 (`H x W x C`)
//! [`PixelArray`], reduce colour input to luminance, and return a plane of
//! the same spatial shape holding only `0` and `255`. A pixel is foreground
//! only when it is strictly above the threshold that applies to it.
//!
//! ```
//! use binarize::{basic_threshold, otsu_threshold, PixelArray};
//!
//! # fn main() -> Result<(), binarize::ThresholdError> {
//! let img = PixelArray::gray(2, 4, vec![0u8, 0, 200, 200, 0, 0, 200, 200])?;
//! let fixed = basic_threshold(&img, 100)?;
//! assert_eq!(fixed.row(0), &[0, 0, 255, 255]);
//! assert_eq!(otsu_threshold(&img)?, fixed);
//! # Ok(())
//! # }
//! ```
//!
//! Operations are pure: every buffer (histogram, prefix sums, output) is
//! owned by a single call, so independent inputs can be processed from
//! several threads at once.

mod adaptive;
mod basic;
mod otsu;
mod params;

pub use adaptive::{adaptive_threshold, tiles, Tiles};
pub use basic::{apply_level, basic_threshold, BACKGROUND, FOREGROUND};
pub use otsu::{otsu_level, otsu_threshold, select_level, Histogram, PrefixSums, LEVELS};
pub use params::{binarize, BinaryOutput, ConfigError, ThresholdMethod};

pub use binarize_core::{
    init_with_level, to_grayscale, Intensity, LumaWeights, PixelArray, Plane, Region,
    ThresholdError,
};

#[cfg(feature = "tracing")]
pub use binarize_core::init_tracing;
