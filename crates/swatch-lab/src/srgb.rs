//! Decoding of sRGB channel values to linear light.
//!
//! Hex colors carry gamma-encoded 8-bit channels. Before they can be mixed
//! by the XYZ matrix each channel is scaled to [0, 1] and decoded: a
//! straight line below 0.04045, a 2.4 power curve above it.
//!
//! Works in `f64` throughout; [`eotf_u8`] takes the raw channel byte.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

use crate::constants::{SRGB_BREAK, SRGB_GAMMA, SRGB_LINEAR_SLOPE, SRGB_OFFSET, SRGB_SCALE};

/// sRGB EOTF: Decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V > 0.04045:
///     L = ((V + 0.055) / 1.055)^2.4
/// else:
///     L = V / 12.92
/// ```
///
/// # Example
///
/// ```rust
/// use swatch_lab::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v > SRGB_BREAK {
        ((v + SRGB_OFFSET) / SRGB_SCALE).powf(SRGB_GAMMA)
    } else {
        v / SRGB_LINEAR_SLOPE
    }
}

/// Applies the sRGB EOTF to an 8-bit channel, `v / 255` first.
#[inline]
pub fn eotf_u8(v: u8) -> f64 {
    eotf(f64::from(v) / 255.0)
}

/// Applies sRGB EOTF to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [eotf(rgb[0]), eotf(rgb[1]), eotf(rgb[2])]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_boundaries() {
        assert_eq!(eotf(0.0), 0.0);
        assert_abs_diff_eq!(eotf(1.0), 1.0, epsilon = 1e-12);
        assert_eq!(eotf_u8(0), 0.0);
        assert_abs_diff_eq!(eotf_u8(255), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_segment() {
        // 10/255 = 0.0392 sits below the breakpoint.
        assert_abs_diff_eq!(eotf_u8(10), 10.0 / 255.0 / 12.92, epsilon = 1e-15);
        assert_eq!(eotf(SRGB_BREAK), SRGB_BREAK / 12.92);
    }

    #[test]
    fn test_midpoint() {
        assert_abs_diff_eq!(eotf(0.5), 0.214041, epsilon = 1e-6);
    }

    #[test]
    fn test_monotonic() {
        let mut prev = -1.0;
        for v in 0..=255u8 {
            let l = eotf_u8(v);
            assert!(l > prev, "not increasing at {v}");
            prev = l;
        }
    }

    #[test]
    fn test_rgb() {
        let out = eotf_rgb([0.0, 0.5, 1.0]);
        assert_eq!(out[0], 0.0);
        assert_abs_diff_eq!(out[1], eotf(0.5));
        assert_abs_diff_eq!(out[2], 1.0, epsilon = 1e-12);
    }
}
