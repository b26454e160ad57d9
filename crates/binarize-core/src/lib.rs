//! Core types for image binarization.
//!
//! This crate owns the pixel containers, the luminance reduction and the
//! rank/dtype normalization that every thresholding operation in `binarize`
//! runs before doing any work. It knows nothing about thresholds.

mod array;
mod error;
mod grayscale;
mod intensity;
#[cfg(feature = "image")]
mod interop;
mod logger;
mod normalize;

pub use array::{PixelArray, Plane, Region};
pub use error::ThresholdError;
pub use grayscale::{to_grayscale, LumaWeights};
pub use intensity::{round_to_level, Intensity};
pub use normalize::{normalize_intensity, normalize_levels, spatial_dims, validate_rank};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
