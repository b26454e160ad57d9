//! Sample types accepted as pixel intensities.
//!
//! Intensities live on the 8-bit scale `[0, 255]` regardless of the storage
//! type; floats are not rescaled from `[0, 1]`.

/// A numeric sample that can be read as an intensity.
pub trait Intensity: Copy + Send + Sync + 'static {
    /// Intensity as a float on the `[0, 255]` scale.
    fn to_f32(self) -> f32;

    /// Intensity as an 8-bit level. Floats are truncated like a cast, and all
    /// types saturate into `[0, 255]`.
    fn to_level(self) -> u8;

    /// True when the sample is strictly above `level`, compared at the
    /// sample's own precision.
    fn exceeds(self, level: u8) -> bool;
}

impl Intensity for u8 {
    #[inline]
    fn to_f32(self) -> f32 {
        self as f32
    }

    #[inline]
    fn to_level(self) -> u8 {
        self
    }

    #[inline]
    fn exceeds(self, level: u8) -> bool {
        self > level
    }
}

macro_rules! impl_integer_intensity {
    ($($t:ty),*) => {
        $(
            impl Intensity for $t {
                #[inline]
                fn to_f32(self) -> f32 {
                    self as f32
                }

                #[inline]
                fn to_level(self) -> u8 {
                    self.clamp(0 as $t, 255 as $t) as u8
                }

                #[inline]
                fn exceeds(self, level: u8) -> bool {
                    self > level as $t
                }
            }
        )*
    };
}

impl_integer_intensity!(u16, u32, i32);

impl Intensity for f32 {
    #[inline]
    fn to_f32(self) -> f32 {
        self
    }

    #[inline]
    fn to_level(self) -> u8 {
        // `as` saturates and maps NaN to 0.
        self as u8
    }

    #[inline]
    fn exceeds(self, level: u8) -> bool {
        self > level as f32
    }
}

impl Intensity for f64 {
    #[inline]
    fn to_f32(self) -> f32 {
        self as f32
    }

    #[inline]
    fn to_level(self) -> u8 {
        self as u8
    }

    #[inline]
    fn exceeds(self, level: u8) -> bool {
        self > level as f64
    }
}

/// Round a luminance value to the nearest 8-bit level.
#[inline]
pub fn round_to_level(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_levels_saturate() {
        assert_eq!(300u16.to_level(), 255);
        assert_eq!((-5i32).to_level(), 0);
        assert_eq!(128u32.to_level(), 128);
    }

    #[test]
    fn float_levels_truncate() {
        assert_eq!(100.9f32.to_level(), 100);
        assert_eq!((-1.0f64).to_level(), 0);
        assert_eq!(1e6f64.to_level(), 255);
        assert_eq!(f32::NAN.to_level(), 0);
    }

    #[test]
    fn exceeds_keeps_fractional_part() {
        assert!(50.5f32.exceeds(50));
        assert!(!50.0f32.exceeds(50));
        assert!(255.000_000_1f64.exceeds(255));
        assert!(!f64::NAN.exceeds(0));
        assert!(300u16.exceeds(255));
        assert!(!(-3i32).exceeds(0));
    }

    #[test]
    fn luminance_rounds_to_nearest() {
        assert_eq!(round_to_level(76.5), 77);
        assert_eq!(round_to_level(76.49), 76);
        assert_eq!(round_to_level(256.0), 255);
    }
}
