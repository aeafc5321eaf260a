//! Validated, non-empty palettes.

use std::ops::Index;

use swatch_core::{HexColor, Result, validate_and_normalize_palette};

use crate::search::find_closest_index;

/// An ordered, non-empty list of canonical hex colors.
///
/// Construction validates and normalizes every entry; duplicates and
/// order are kept. Because a `Palette` is never empty, [`Palette::closest`]
/// cannot fail.
///
/// # Example
///
/// ```rust
/// use swatch::{HexColor, Palette};
///
/// let palette = Palette::new(&["#abc", "#123456"]).unwrap();
/// assert_eq!(palette.as_slice(), ["#AABBCC", "#123456"]);
///
/// let input: HexColor = "#102030".parse().unwrap();
/// assert_eq!(palette.closest(&input), "#123456");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<String>", into = "Vec<HexColor>")
)]
pub struct Palette {
    colors: Vec<HexColor>,
}

impl Palette {
    /// Validates and normalizes `entries` into a palette.
    ///
    /// # Errors
    ///
    /// Returns [`swatch_core::Error::InvalidPalette`] if `entries` is empty
    /// or any entry is not a hex color.
    pub fn new<S: AsRef<str>>(entries: &[S]) -> Result<Self> {
        let colors = validate_and_normalize_palette(entries)?;
        Ok(Self { colors })
    }

    /// Number of entries (at least 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The first entry.
    #[inline]
    pub fn first(&self) -> &HexColor {
        &self.colors[0]
    }

    /// Entries in order.
    #[inline]
    pub fn as_slice(&self) -> &[HexColor] {
        &self.colors
    }

    /// Iterates over entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, HexColor> {
        self.colors.iter()
    }

    /// Position of the entry closest to `input`; the earliest on ties.
    pub fn closest_index(&self, input: &HexColor) -> usize {
        find_closest_index(input, &self.colors).unwrap_or(0)
    }

    /// The entry closest to `input`; the earliest on ties.
    pub fn closest(&self, input: &HexColor) -> &HexColor {
        &self.colors[self.closest_index(input)]
    }

    /// Consumes the palette, returning its entries.
    pub fn into_vec(self) -> Vec<HexColor> {
        self.colors
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = swatch_core::Error;

    fn try_from(entries: Vec<String>) -> Result<Self> {
        Self::new(&entries)
    }
}

impl From<Palette> for Vec<HexColor> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

impl Index<usize> for Palette {
    type Output = HexColor;

    fn index(&self, index: usize) -> &HexColor {
        &self.colors[index]
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a HexColor;
    type IntoIter = std::slice::Iter<'a, HexColor>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}
