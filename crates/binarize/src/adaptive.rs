//! Tiled adaptive-mean thresholding.
//!
//! The plane is cut into non-overlapping `window x window` tiles, stepping
//! from the top-left corner. Tiles on the bottom and right borders are
//! clipped to the image instead of padded. Each tile is binarized against
//! the mean of its own pixels and written back by region assignment.

use binarize_core::{
    normalize_intensity, spatial_dims, Intensity, PixelArray, Plane, Region, ThresholdError,
};
use log::debug;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Iterator over the tile partition of a `height x width` grid.
#[derive(Clone, Debug)]
pub struct Tiles {
    height: usize,
    width: usize,
    window: usize,
    row: usize,
    col: usize,
}

/// Partition a `height x width` grid into row-major tiles of edge `window`.
///
/// Every pixel lies in exactly one tile. A zero `window` is rejected.
pub fn tiles(height: usize, width: usize, window: usize) -> Result<Tiles, ThresholdError> {
    if window == 0 {
        return Err(ThresholdError::invalid_argument(
            "window",
            "window size must be positive",
        ));
    }
    Ok(Tiles {
        height,
        width,
        window,
        row: 0,
        col: 0,
    })
}

impl Tiles {
    /// Total number of tiles in the partition.
    pub fn tile_count(&self) -> usize {
        self.height.div_ceil(self.window) * self.width.div_ceil(self.window)
    }
}

impl Iterator for Tiles {
    type Item = Region;

    fn next(&mut self) -> Option<Region> {
        if self.row >= self.height || self.width == 0 {
            return None;
        }
        let rows = self.row..(self.row + self.window).min(self.height);
        let cols = self.col..(self.col + self.window).min(self.width);

        self.col += self.window;
        if self.col >= self.width {
            self.col = 0;
            self.row += self.window;
        }
        Some(Region::new(rows, cols))
    }
}

/// Arithmetic mean of the pixels in `region`, accumulated in `f64`.
fn region_mean(plane: &Plane<f32>, region: &Region) -> f64 {
    let sum: f64 = plane
        .region_rows(region)
        .flat_map(|row| row.iter())
        .map(|&v| v as f64)
        .sum();
    sum / region.len() as f64
}

/// Binarize `image` tile by tile against each tile's mean intensity.
///
/// `window` must lie in `[1, min(H, W)]`. The output holds `255.0` where a
/// pixel is strictly above its tile mean and `0.0` elsewhere, so a
/// single-pixel tile is always `0.0`.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(image), fields(shape = ?image.shape()))
)]
pub fn adaptive_threshold<T: Intensity>(
    image: &PixelArray<T>,
    window: usize,
) -> Result<Plane<f32>, ThresholdError> {
    let (height, width) = spatial_dims(image.shape())?;
    let partition = tiles(height, width, window)?;
    if window > height.min(width) {
        return Err(ThresholdError::invalid_argument(
            "window",
            format!("window size {window} exceeds the image size {height}x{width}"),
        ));
    }

    let plane = normalize_intensity(image)?;
    let mut out = Plane::filled(height, width, 0.0f32);
    debug!(
        "adaptive threshold: {height}x{width}, window {window}, {} tiles",
        partition.tile_count()
    );

    for region in partition {
        let mean = region_mean(&plane, &region);
        for (src, dst) in plane.region_rows(&region).zip(out.region_rows_mut(&region)) {
            for (&v, o) in src.iter().zip(dst.iter_mut()) {
                *o = if v as f64 > mean { 255.0 } else { 0.0 };
            }
        }
    }

    Ok(out)
}
