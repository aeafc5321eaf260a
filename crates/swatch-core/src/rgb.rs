//! 8-bit RGB triples.

/// An sRGB color with 8-bit channels in [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Creates a triple from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_conversions() {
        let rgb = Rgb::from([1, 2, 3]);
        assert_eq!(rgb, Rgb::new(1, 2, 3));
        assert_eq!(<[u8; 3]>::from(rgb), [1, 2, 3]);
        assert_eq!(Rgb::default().to_array(), [0, 0, 0]);
    }
}
