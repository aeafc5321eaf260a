//! Input validation for colors and palettes.
//!
//! Validation is two-stage: the type system guarantees strings (or an
//! explicit `Option` for values that may be absent), and these functions
//! check that the strings are well-formed hex colors. Palettes are checked
//! entry by entry; one bad entry rejects the whole palette.
//!
//! Normalization never touches the caller's data: a fresh `Vec` of
//! canonical colors is returned.
//!
//! # Example
//!
//! ```rust
//! use swatch_core::validate::validate_and_normalize_palette;
//!
//! let palette = validate_and_normalize_palette(&["#abc", "#123456"]).unwrap();
//! assert_eq!(palette[0].as_str(), "#AABBCC");
//! assert_eq!(palette[1].as_str(), "#123456");
//! ```

use tracing::debug;

use crate::error::{Error, PaletteError, Result};
use crate::hex::{HexColor, normalize_color};

/// Validates `raw` and returns its canonical form.
///
/// # Errors
///
/// Returns [`Error::InvalidColor`] if `raw` is not `#RGB` or `#RRGGBB`.
pub fn validate_and_normalize_color(raw: &str) -> Result<HexColor> {
    HexColor::parse(raw)
}

/// Like [`validate_and_normalize_color`], treating `None` as invalid.
///
/// # Errors
///
/// Returns [`Error::InvalidColor`] for `None` or a malformed value.
pub fn validate_optional_color(raw: Option<&str>) -> Result<HexColor> {
    match raw {
        Some(s) => validate_and_normalize_color(s),
        None => Err(Error::invalid_color("<none>")),
    }
}

/// Validates every entry of `raw` and returns the canonical palette.
///
/// Order and duplicates are preserved.
///
/// # Errors
///
/// Returns [`Error::InvalidPalette`] if `raw` is empty or any entry is
/// not a valid hex color. The error names the first offending entry.
pub fn validate_and_normalize_palette<S: AsRef<str>>(raw: &[S]) -> Result<Vec<HexColor>> {
    if raw.is_empty() {
        return Err(PaletteError::Empty.into());
    }

    let palette = raw
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let entry = entry.as_ref();
            normalize_color(entry).ok_or_else(|| PaletteError::Entry {
                index,
                value: entry.to_owned(),
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    debug!(len = palette.len(), "palette validated");
    Ok(palette)
}

/// Like [`validate_and_normalize_palette`], treating `None` as invalid.
///
/// # Errors
///
/// Returns [`Error::InvalidPalette`] for `None`, an empty palette, or any
/// malformed entry.
pub fn validate_optional_palette<S: AsRef<str>>(raw: Option<&[S]>) -> Result<Vec<HexColor>> {
    match raw {
        Some(entries) => validate_and_normalize_palette(entries),
        None => Err(PaletteError::Missing.into()),
    }
}
