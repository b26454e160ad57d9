//! Otsu's global threshold selection.
//!
//! A 256-bin histogram is turned into cumulative count and weighted-count
//! tables so that both class means of any candidate split come out in
//! constant time. The candidate with the largest between-class variance wins.

use crate::basic::apply_level;
use binarize_core::{normalize_levels, Intensity, PixelArray, Plane, ThresholdError};
use log::debug;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Number of intensity levels.
pub const LEVELS: usize = 256;

/// Per-level pixel counts of an 8-bit plane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; LEVELS],
}

impl Histogram {
    /// Count every level in `levels`.
    pub fn from_levels(levels: &[u8]) -> Self {
        let mut counts = [0u64; LEVELS];
        for &v in levels {
            counts[v as usize] += 1;
        }
        Self { counts }
    }

    /// Pixel count per level, indexed by level.
    #[inline]
    pub fn counts(&self) -> &[u64; LEVELS] {
        &self.counts
    }

    /// Number of pixels counted.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

/// Cumulative tables over a histogram.
///
/// `count[t]` is the number of pixels at level `<= t`; `weighted[t]` is the
/// sum of their levels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixSums {
    count: [u64; LEVELS],
    weighted: [u64; LEVELS],
}

impl PrefixSums {
    /// Accumulate `hist`; `weighted[0]` is always `0`.
    pub fn from_histogram(hist: &Histogram) -> Self {
        let h = hist.counts();
        let mut count = [0u64; LEVELS];
        let mut weighted = [0u64; LEVELS];
        count[0] = h[0];
        for i in 1..LEVELS {
            count[i] = count[i - 1] + h[i];
            weighted[i] = weighted[i - 1] + i as u64 * h[i];
        }
        Self { count, weighted }
    }

    /// Cumulative pixel counts.
    #[inline]
    pub fn count(&self) -> &[u64; LEVELS] {
        &self.count
    }

    /// Cumulative level-weighted counts.
    #[inline]
    pub fn weighted(&self) -> &[u64; LEVELS] {
        &self.weighted
    }
}

/// Select the level that maximizes the between-class variance.
///
/// Ties keep the lowest level. Scanning stops at the first level above
/// which no pixels remain, and an empty histogram selects `0`.
pub fn select_level(hist: &Histogram) -> u8 {
    let sums = PrefixSums::from_histogram(hist);
    let total = hist.total();
    let weighted_total = sums.weighted[LEVELS - 1] as f64;

    let mut best_var = 0f64;
    let mut best_t = 0u8;

    for t in 0..LEVELS {
        let below = sums.count[t];
        let above = total - below;
        if above == 0 {
            break;
        }

        let weighted_below = sums.weighted[t] as f64;
        let mean_below = if below == 0 {
            0.0
        } else {
            weighted_below / below as f64
        };
        let mean_above = (weighted_total - weighted_below) / above as f64;
        let d = mean_below - mean_above;
        let var_between = above as f64 * below as f64 * d * d;

        if var_between > best_var {
            best_var = var_between;
            best_t = t as u8;
        }
    }

    best_t
}

/// The level Otsu's method selects for `image`.
pub fn otsu_level<T: Intensity>(image: &PixelArray<T>) -> Result<u8, ThresholdError> {
    let plane = normalize_levels(image)?;
    Ok(select_level(&Histogram::from_levels(plane.as_slice())))
}

/// Binarize `image` at the level selected by Otsu's method.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(image), fields(shape = ?image.shape()))
)]
pub fn otsu_threshold<T: Intensity>(image: &PixelArray<T>) -> Result<Plane<u8>, ThresholdError> {
    let plane = normalize_levels(image)?;
    let hist = Histogram::from_levels(plane.as_slice());
    let level = select_level(&hist);
    debug!(
        "otsu level {level} over {} pixels ({}x{})",
        hist.total(),
        plane.height(),
        plane.width()
    );
    Ok(apply_level(&plane, level))
}
