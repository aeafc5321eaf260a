//! Numeric constants for the sRGB -> XYZ -> Lab chain.
//!
//! These are the four-digit sRGB matrix and the classic CIE piecewise
//! thresholds. Changing any of them moves distance rankings for colors
//! near a decision boundary, so they must match the reference outputs.

use glam::{DMat3, DVec3};

/// sRGB EOTF breakpoint (encoded value).
pub const SRGB_BREAK: f64 = 0.04045;

/// sRGB EOTF linear-segment divisor.
pub const SRGB_LINEAR_SLOPE: f64 = 12.92;

/// sRGB EOTF power-segment offset.
pub const SRGB_OFFSET: f64 = 0.055;

/// sRGB EOTF power-segment divisor, `1 + SRGB_OFFSET`.
pub const SRGB_SCALE: f64 = 1.055;

/// sRGB EOTF power-segment exponent.
pub const SRGB_GAMMA: f64 = 2.4;

/// Linear RGB (0-100) to XYZ, D65.
///
/// ```text
/// X = 0.4124*R + 0.3576*G + 0.1805*B
/// Y = 0.2126*R + 0.7152*G + 0.0722*B
/// Z = 0.0193*R + 0.1192*G + 0.9505*B
/// ```
///
/// Stored column-major (one column per RGB channel).
pub const SRGB_TO_XYZ: DMat3 = DMat3::from_cols(
    DVec3::new(0.4124, 0.2126, 0.0193),
    DVec3::new(0.3576, 0.7152, 0.1192),
    DVec3::new(0.1805, 0.0722, 0.9505),
);

/// D65 reference white, Y = 100.
pub const D65_WHITE: DVec3 = DVec3::new(95.047, 100.000, 108.883);

/// CIE epsilon: below this ratio the cube root is replaced by a line.
pub const LAB_EPSILON: f64 = 0.008856;

/// Slope of the linear segment below [`LAB_EPSILON`].
pub const LAB_KAPPA_SLOPE: f64 = 7.787;

/// Offset of the linear segment below [`LAB_EPSILON`].
pub const LAB_OFFSET: f64 = 16.0 / 116.0;
