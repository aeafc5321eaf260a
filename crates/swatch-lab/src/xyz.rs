//! sRGB to CIE XYZ.

use glam::DVec3;
use swatch_core::Rgb;

use crate::constants::SRGB_TO_XYZ;
use crate::srgb;

/// A CIE XYZ triple, scaled so the D65 white has Y = 100.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    /// X tristimulus
    pub x: f64,
    /// Y tristimulus (luminance)
    pub y: f64,
    /// Z tristimulus
    pub z: f64,
}

impl Xyz {
    /// Creates a triple from its components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Components as a [`DVec3`].
    #[inline]
    pub fn to_vec(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }
}

impl From<DVec3> for Xyz {
    #[inline]
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// Converts an 8-bit sRGB triple to XYZ.
///
/// Each channel is decoded with the sRGB EOTF, scaled to 0-100, then
/// multiplied by [`SRGB_TO_XYZ`].
///
/// # Example
///
/// ```rust
/// use swatch_core::Rgb;
/// use swatch_lab::rgb_to_xyz;
///
/// let white = rgb_to_xyz(Rgb::new(255, 255, 255));
/// assert!((white.y - 100.0).abs() < 1e-9);
/// ```
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    let linear = DVec3::new(
        srgb::eotf_u8(rgb.r),
        srgb::eotf_u8(rgb.g),
        srgb::eotf_u8(rgb.b),
    ) * 100.0;
    Xyz::from(SRGB_TO_XYZ * linear)
}
