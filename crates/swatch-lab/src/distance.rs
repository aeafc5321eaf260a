//! Perceptual distance between hex colors.
//!
//! Euclidean distance in Lab space, i.e. the CIE76 Delta-E:
//!
//! ```text
//! dE = sqrt((L2-L1)^2 + (a2-a1)^2 + (b2-b1)^2)
//! ```

use swatch_core::HexColor;

use crate::lab::to_lab;

/// Lab-space distance between two colors.
///
/// Both colors are converted from scratch. Symmetric and non-negative;
/// zero when both produce the same Lab triple.
///
/// # Example
///
/// ```rust
/// use swatch_core::HexColor;
/// use swatch_lab::lab_distance;
///
/// let red = HexColor::parse("#FF0000").unwrap();
/// let near = HexColor::parse("#FE0101").unwrap();
/// assert!(lab_distance(&red, &near) < 1.0);
/// assert_eq!(lab_distance(&red, &red), 0.0);
/// ```
#[inline]
pub fn lab_distance(c1: &HexColor, c2: &HexColor) -> f64 {
    to_lab(c1).distance(&to_lab(c2))
}
