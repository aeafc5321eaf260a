//! CIE XYZ to CIE L*a*b*.
//!
//! # Formula
//!
//! ```text
//! t = X/Xn, Y/Yn, Z/Zn            (D65: 95.047, 100.000, 108.883)
//! f(t) = t^(1/3)                  if t > 0.008856
//!        7.787*t + 16/116         otherwise
//!
//! L = 116*f(Y) - 16
//! a = 500*(f(X) - f(Y))
//! b = 200*(f(Y) - f(Z))
//! ```

use glam::DVec3;
use swatch_core::{HexColor, Rgb};

use crate::constants::{D65_WHITE, LAB_EPSILON, LAB_KAPPA_SLOPE, LAB_OFFSET};
use crate::xyz::{Xyz, rgb_to_xyz};

/// A CIE L*a*b* triple (D65).
///
/// `l` is roughly [0, 100]; `a` and `b` roughly [-128, 127].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    /// Lightness
    pub l: f64,
    /// Green (-) to red (+)
    pub a: f64,
    /// Blue (-) to yellow (+)
    pub b: f64,
}

impl Lab {
    /// Creates a triple from its components.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Components as `[l, a, b]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Euclidean distance to `other` (simplified Delta-E).
    ///
    /// ```rust
    /// use swatch_lab::Lab;
    ///
    /// let d = Lab::new(50.0, 0.0, 0.0).distance(&Lab::new(53.0, 4.0, 0.0));
    /// assert_eq!(d, 5.0);
    /// ```
    #[inline]
    pub fn distance(&self, other: &Lab) -> f64 {
        let dl = other.l - self.l;
        let da = other.a - self.a;
        let db = other.b - self.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    // powf rather than cbrt: the two differ in the last bits.
    if t > LAB_EPSILON {
        t.powf(1.0 / 3.0)
    } else {
        LAB_KAPPA_SLOPE * t + LAB_OFFSET
    }
}

/// Converts XYZ (Y of white = 100) to Lab relative to D65.
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let t: DVec3 = xyz.to_vec() / D65_WHITE;
    let (fx, fy, fz) = (lab_f(t.x), lab_f(t.y), lab_f(t.z));

    Lab::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Converts an 8-bit sRGB triple to Lab.
#[inline]
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb))
}

/// Converts a hex color to Lab.
///
/// Recomputed on every call; nothing is cached.
///
/// # Example
///
/// ```rust
/// use swatch_core::HexColor;
/// use swatch_lab::to_lab;
///
/// let lab = to_lab(&HexColor::parse("#FFFFFF").unwrap());
/// assert!((lab.l - 100.0).abs() < 1e-9);
/// ```
#[inline]
pub fn to_lab(color: &HexColor) -> Lab {
    rgb_to_lab(color.rgb())
}

/// Conversion of color values into XYZ and Lab.
pub trait ToLab {
    /// Converts to CIE XYZ.
    fn to_xyz(&self) -> Xyz;

    /// Converts to CIE L*a*b*.
    fn to_lab(&self) -> Lab {
        xyz_to_lab(self.to_xyz())
    }
}

impl ToLab for Rgb {
    fn to_xyz(&self) -> Xyz {
        rgb_to_xyz(*self)
    }
}

impl ToLab for HexColor {
    fn to_xyz(&self) -> Xyz {
        rgb_to_xyz(self.rgb())
    }
}

impl From<&HexColor> for Lab {
    fn from(color: &HexColor) -> Self {
        to_lab(color)
    }
}

impl From<Rgb> for Lab {
    fn from(rgb: Rgb) -> Self {
        rgb_to_lab(rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn lab(hex: &str) -> Lab {
        to_lab(&HexColor::parse(hex).unwrap())
    }

    fn assert_lab(actual: Lab, expected: [f64; 3]) {
        assert_abs_diff_eq!(actual.l, expected[0], epsilon = 1e-9);
        assert_abs_diff_eq!(actual.a, expected[1], epsilon = 1e-9);
        assert_abs_diff_eq!(actual.b, expected[2], epsilon = 1e-9);
    }

    #[test]
    fn test_black() {
        // f(0) = 16/116 for all three, so L = 0 and a = b = 0 exactly.
        assert_eq!(lab("#000000"), Lab::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_white() {
        // The four-digit matrix does not land exactly on D65, hence tiny a/b.
        assert_lab(
            lab("#FFFFFF"),
            [100.0, 0.00526049995830391, -0.010408184525267927],
        );
    }

    #[test]
    fn test_red() {
        assert_lab(
            lab("#FF0000"),
            [53.23288178584245, 80.10930952982204, 67.22006831026425],
        );
    }

    #[test]
    fn test_linear_segment() {
        // Y/Yn for #010101 is far below the epsilon.
        assert_lab(
            lab("#010101"),
            [0.2741734960237956, 3.730098721566044e-05, -7.380509088883436e-05],
        );
    }

    #[test]
    fn test_xyz_to_lab_direct() {
        let l = xyz_to_lab(Xyz::new(95.047, 100.0, 108.883));
        assert_abs_diff_eq!(l.l, 100.0, epsilon = 1e-12);
        assert_abs_diff_eq!(l.a, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(l.b, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trait_matches_free_fn() {
        let c = HexColor::parse("#123456").unwrap();
        assert_eq!(c.to_lab(), to_lab(&c));
        assert_eq!(c.rgb().to_lab(), to_lab(&c));
        assert_eq!(Lab::from(&c), to_lab(&c));
    }

    #[test]
    fn test_distance_basic() {
        let a = Lab::new(1.0, 2.0, 3.0);
        let b = Lab::new(4.0, 6.0, 3.0);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&a), 0.0);
    }
}
