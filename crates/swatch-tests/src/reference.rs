//! Reference table for golden tests.
//!
//! `data/reference.json` holds, for a fixed set of colors, the expected
//! RGB, XYZ and Lab values, and a set of searches with their expected
//! winners. Values were produced in double precision with the same
//! constants and formulas as `swatch-lab`.

use serde::Deserialize;

/// Absolute tolerance for XYZ/Lab comparisons.
///
/// Only last-bit differences between `pow` implementations are expected.
pub const EPSILON: f64 = 1e-9;

const REFERENCE_JSON: &str = include_str!("../data/reference.json");

/// Expected conversions for one color.
#[derive(Debug, Clone, Deserialize)]
pub struct ColorEntry {
    /// Canonical hex color
    pub hex: String,
    /// Expected 8-bit channels
    pub rgb: [u8; 3],
    /// Expected XYZ (Y of white = 100)
    pub xyz: [f64; 3],
    /// Expected L*a*b*
    pub lab: [f64; 3],
}

/// One nearest-color search and its expected answer.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchCase {
    /// Input color, as a caller would pass it
    pub input: String,
    /// Palette, as a caller would pass it
    pub palette: Vec<String>,
    /// Position of the expected winner
    pub index: usize,
    /// Canonical form of the expected winner
    pub expected: String,
}

/// The full reference table.
#[derive(Debug, Clone, Deserialize)]
pub struct Reference {
    /// Conversion cases
    pub colors: Vec<ColorEntry>,
    /// Search cases
    pub searches: Vec<SearchCase>,
}

/// Parses the embedded reference table.
///
/// # Panics
///
/// Panics if the embedded JSON is malformed (a broken test fixture).
pub fn load() -> Reference {
    serde_json::from_str(REFERENCE_JSON).expect("reference.json is valid")
}
