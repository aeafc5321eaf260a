//! Hex color parsing and normalization.
//!
//! Accepts exactly two external forms, case-insensitive:
//!
//! | Form | Example | Canonical |
//! |------|---------|-----------|
//! | `#RGB` | `#1a3` | `#11AA33` |
//! | `#RRGGBB` | `#12abef` | `#12ABEF` |
//!
//! Anything else (surrounding whitespace, alpha, named colors, `rgb()`)
//! is rejected. A [`HexColor`] always holds the canonical 7-character
//! uppercase form, so code downstream of parsing never re-validates.
//!
//! # Example
//!
//! ```rust
//! use swatch_core::{HexColor, is_valid_color};
//!
//! assert!(is_valid_color("#1a3"));
//! assert!(!is_valid_color("red"));
//!
//! let c: HexColor = "#1a3".parse().unwrap();
//! assert_eq!(c.as_str(), "#11AA33");
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::rgb::Rgb;

static HEX_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("valid regex")
});

/// Returns `true` iff `input` is `#` followed by exactly 3 or 6 hex digits.
#[inline]
pub fn is_valid_color(input: &str) -> bool {
    HEX_PATTERN.is_match(input)
}

/// Validates and normalizes `input` to its canonical form.
///
/// Short forms expand each digit (`#1A3` -> `#11AA33`), then all digits
/// are uppercased. Returns `None` when `input` is not a valid hex color.
pub fn normalize_color(input: &str) -> Option<HexColor> {
    if !is_valid_color(input) {
        return None;
    }

    // Pattern guarantees ASCII, so byte slicing is safe.
    let digits = &input[1..];
    let mut canonical = String::with_capacity(7);
    canonical.push('#');
    if digits.len() == 3 {
        for c in digits.chars() {
            let c = c.to_ascii_uppercase();
            canonical.push(c);
            canonical.push(c);
        }
    } else {
        canonical.extend(digits.chars().map(|c| c.to_ascii_uppercase()));
    }

    Some(HexColor(canonical))
}

/// A validated hex color in canonical `#RRGGBB` uppercase form.
///
/// The only way to obtain one is through validation ([`HexColor::parse`],
/// [`FromStr`], [`TryFrom`]) or from an [`Rgb`] triple, so the inner
/// string is always exactly 7 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct HexColor(String);

impl HexColor {
    /// Parses and normalizes a hex color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if `input` is not `#RGB` or `#RRGGBB`.
    pub fn parse(input: &str) -> Result<Self> {
        normalize_color(input).ok_or_else(|| Error::invalid_color(input))
    }

    /// The canonical `#RRGGBB` string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the color into its 8-bit channels.
    ///
    /// ```rust
    /// use swatch_core::{HexColor, Rgb};
    ///
    /// let c = HexColor::parse("#123456").unwrap();
    /// assert_eq!(c.rgb(), Rgb::new(0x12, 0x34, 0x56));
    /// ```
    pub fn rgb(&self) -> Rgb {
        let b = self.0.as_bytes();
        Rgb::new(
            channel(b[1], b[2]),
            channel(b[3], b[4]),
            channel(b[5], b[6]),
        )
    }
}

/// Combines two canonical hex digits into one channel value.
#[inline]
fn channel(hi: u8, lo: u8) -> u8 {
    (nibble(hi) << 4) | nibble(lo)
}

#[inline]
fn nibble(d: u8) -> u8 {
    // Canonical digits are 0-9 or A-F.
    match d {
        b'0'..=b'9' => d - b'0',
        b'A'..=b'F' => d - b'A' + 10,
        _ => 0,
    }
}

impl From<Rgb> for HexColor {
    fn from(rgb: Rgb) -> Self {
        HexColor(format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b))
    }
}

impl FromStr for HexColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for HexColor {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<HexColor> for String {
    fn from(c: HexColor) -> Self {
        c.0
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for HexColor {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
