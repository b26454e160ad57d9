//! Serializable method selection and the dispatching entry point.

use crate::{adaptive_threshold, basic_threshold, otsu_threshold};
use binarize_core::{Intensity, PixelArray, Plane, ThresholdError};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Which binarization to run, with its parameters.
///
/// JSON form: `{"method": "basic", "threshold": 100}`,
/// `{"method": "adaptive", "window": 16}` or `{"method": "otsu"}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ThresholdMethod {
    /// Fixed global threshold.
    Basic { threshold: u8 },
    /// Per-tile mean threshold with tile edge `window`.
    Adaptive { window: usize },
    /// Histogram-selected global threshold.
    #[default]
    Otsu,
}

impl ThresholdMethod {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Output of [`binarize`]: 8-bit levels for the global methods, floats for
/// the adaptive one. Every sample is `0` or `255` either way.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum BinaryOutput {
    Levels(Plane<u8>),
    Intensity(Plane<f32>),
}

impl BinaryOutput {
    /// `(height, width)` of the output.
    pub fn shape(&self) -> (usize, usize) {
        match self {
            BinaryOutput::Levels(p) => p.shape(),
            BinaryOutput::Intensity(p) => p.shape(),
        }
    }

    /// Collapse into an 8-bit plane.
    pub fn into_levels(self) -> Plane<u8> {
        match self {
            BinaryOutput::Levels(p) => p,
            BinaryOutput::Intensity(p) => p.map(|v| if v > 0.0 { 255 } else { 0 }),
        }
    }
}

/// Run the method described by `method` on `image`.
pub fn binarize<T: Intensity>(
    image: &PixelArray<T>,
    method: &ThresholdMethod,
) -> Result<BinaryOutput, ThresholdError> {
    match *method {
        ThresholdMethod::Basic { threshold } => {
            basic_threshold(image, i32::from(threshold)).map(BinaryOutput::Levels)
        }
        ThresholdMethod::Adaptive { window } => {
            adaptive_threshold(image, window).map(BinaryOutput::Intensity)
        }
        ThresholdMethod::Otsu => otsu_threshold(image).map(BinaryOutput::Levels),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_methods() {
        assert_eq!(
            ThresholdMethod::from_json_str(r#"{"method": "basic", "threshold": 100}"#).unwrap(),
            ThresholdMethod::Basic { threshold: 100 }
        );
        assert_eq!(
            ThresholdMethod::from_json_str(r#"{"method": "adaptive", "window": 8}"#).unwrap(),
            ThresholdMethod::Adaptive { window: 8 }
        );
        assert_eq!(
            ThresholdMethod::from_json_str(r#"{"method": "otsu"}"#).unwrap(),
            ThresholdMethod::Otsu
        );
    }

    #[test]
    fn rejects_non_integer_parameters() {
        assert!(ThresholdMethod::from_json_str(r#"{"method": "basic", "threshold": 100.5}"#)
            .is_err());
        assert!(ThresholdMethod::from_json_str(r#"{"method": "basic", "threshold": 300}"#)
            .is_err());
        assert!(ThresholdMethod::from_json_str(r#"{"method": "adaptive", "window": "8"}"#)
            .is_err());
    }

    #[test]
    fn dispatches_to_each_method() {
        let img = PixelArray::gray(2, 4, vec![0u8, 0, 200, 200, 0, 0, 200, 200]).unwrap();

        let basic = binarize(&img, &ThresholdMethod::Basic { threshold: 100 }).unwrap();
        assert_eq!(basic.into_levels().row(1), &[0, 0, 255, 255]);

        let adaptive = binarize(&img, &ThresholdMethod::Adaptive { window: 2 }).unwrap();
        assert!(matches!(adaptive, BinaryOutput::Intensity(_)));
        assert_eq!(adaptive.shape(), (2, 4));

        let otsu = binarize(&img, &ThresholdMethod::default()).unwrap();
        assert_eq!(otsu.into_levels().row(0), &[0, 0, 255, 255]);
    }

    #[test]
    fn config_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("method.json");
        let method = ThresholdMethod::Adaptive { window: 12 };
        method.write_json(&path).unwrap();
        assert_eq!(ThresholdMethod::load_json(&path).unwrap(), method);
        assert!(matches!(
            ThresholdMethod::load_json(dir.path().join("missing.json")),
            Err(ConfigError::Io(_))
        ));
    }
}
