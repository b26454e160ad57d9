//! Owned pixel containers.
//!
//! `PixelArray` carries an arbitrary shape so that rank checks happen at the
//! transform boundary. `Plane` is the validated single-channel buffer every
//! operation works on and returns.

use crate::ThresholdError;
use serde::Serialize;
use std::ops::Range;

/// Row-major pixel array of rank 2 (`H x W`) or 3 (`H x W x C`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PixelArray<T> {
    pub(crate) shape: Vec<usize>,
    pub(crate) data: Vec<T>,
}

impl<T> PixelArray<T> {
    /// Wrap `data` with the given shape. The buffer length must equal the
    /// product of the shape.
    pub fn new(shape: Vec<usize>, data: Vec<T>) -> Result<Self, ThresholdError> {
        let expected: usize = shape.iter().product();
        if data.len() != expected {
            return Err(ThresholdError::BufferLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Single-channel `height x width` array.
    pub fn gray(height: usize, width: usize, data: Vec<T>) -> Result<Self, ThresholdError> {
        Self::new(vec![height, width], data)
    }

    /// Interleaved `height x width x channels` array.
    pub fn with_channels(
        height: usize,
        width: usize,
        channels: usize,
        data: Vec<T>,
    ) -> Result<Self, ThresholdError> {
        Self::new(vec![height, width, channels], data)
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Copy> From<Plane<T>> for PixelArray<T> {
    fn from(plane: Plane<T>) -> Self {
        Self {
            shape: vec![plane.height, plane.width],
            data: plane.data,
        }
    }
}

/// Half-open rectangular sub-region `[rows) x [cols)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    pub rows: Range<usize>,
    pub cols: Range<usize>,
}

impl Region {
    pub fn new(rows: Range<usize>, cols: Range<usize>) -> Self {
        Self { rows, cols }
    }

    /// Number of pixels covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len() * self.cols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.rows.contains(&row) && self.cols.contains(&col)
    }
}

/// Owned single-channel `height x width` buffer, row-major.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Plane<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Copy> Plane<T> {
    pub fn new(height: usize, width: usize, data: Vec<T>) -> Result<Self, ThresholdError> {
        let expected = height * width;
        if data.len() != expected {
            return Err(ThresholdError::BufferLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn filled(height: usize, width: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; height * width],
        }
    }

    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(height, width)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.data[row * self.width + col])
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.width;
        &self.data[start..start + self.width]
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn map<U: Copy>(&self, f: impl Fn(T) -> U) -> Plane<U> {
        Plane {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Row slices of `region`, top to bottom.
    ///
    /// Panics if the region is out of bounds.
    pub fn region_rows<'a>(&'a self, region: &'a Region) -> impl Iterator<Item = &'a [T]> + 'a {
        assert!(region.rows.end <= self.height && region.cols.end <= self.width);
        region.rows.clone().map(move |r| {
            let start = r * self.width;
            &self.data[start + region.cols.start..start + region.cols.end]
        })
    }

    /// Mutable row slices of `region`, top to bottom.
    ///
    /// Panics if the region is out of bounds.
    pub fn region_rows_mut<'a>(
        &'a mut self,
        region: &'a Region,
    ) -> impl Iterator<Item = &'a mut [T]> + 'a {
        assert!(region.rows.end <= self.height && region.cols.end <= self.width);
        let width = self.width.max(1);
        self.data
            .chunks_mut(width)
            .skip(region.rows.start)
            .take(region.rows.len())
            .map(move |row| &mut row[region.cols.clone()])
    }

    /// Assign `value` to every pixel of `region`.
    pub fn fill_region(&mut self, region: &Region, value: T) {
        for row in self.region_rows_mut(region) {
            row.fill(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_buffer() {
        let err = PixelArray::gray(2, 3, vec![0u8; 5]).unwrap_err();
        assert_eq!(
            err,
            ThresholdError::BufferLength {
                expected: 6,
                got: 5
            }
        );
        assert!(Plane::new(2, 2, vec![0u8; 3]).is_err());
    }

    #[test]
    fn pixel_array_keeps_any_rank() {
        let arr = PixelArray::new(vec![2, 2, 2, 2], vec![0u8; 16]).unwrap();
        assert_eq!(arr.rank(), 4);
        assert_eq!(arr.shape(), &[2, 2, 2, 2]);
    }

    #[test]
    fn region_rows_read_sub_rectangle() {
        let plane = Plane::from_fn(3, 4, |r, c| (r * 4 + c) as u8);
        let region = Region::new(1..3, 1..3);
        let rows: Vec<Vec<u8>> = plane.region_rows(&region).map(|r| r.to_vec()).collect();
        assert_eq!(rows, vec![vec![5, 6], vec![9, 10]]);
    }

    #[test]
    fn fill_region_touches_only_region() {
        let mut plane = Plane::filled(3, 3, 0u8);
        plane.fill_region(&Region::new(0..2, 2..3), 7);
        assert_eq!(plane.as_slice(), &[0, 0, 7, 0, 0, 7, 0, 0, 0]);
    }

    #[test]
    fn region_geometry() {
        let region = Region::new(2..5, 0..2);
        assert_eq!(region.len(), 6);
        assert!(region.contains(4, 1));
        assert!(!region.contains(5, 1));
        assert!(Region::new(1..1, 0..3).is_empty());
    }
}
