//! # swatch
//!
//! Finds the color in a palette that looks closest to a given color.
//!
//! "Closest" means smallest Euclidean distance in CIE L*a*b*, a
//! perceptually uniform color space, so the answer tracks what the eye
//! sees rather than raw RGB differences.
//!
//! # Architecture
//!
//! ```text
//!          swatch
//!            |
//!        swatch-lab      (sRGB -> XYZ -> Lab, distance)
//!            |
//!        swatch-core     (HexColor, Rgb, validation, errors)
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use swatch::get_closest_color;
//!
//! let palette = ["#FF0000", "#00FF00", "#0000FF"];
//! assert_eq!(get_closest_color("#FE0101", &palette).unwrap(), "#FF0000");
//!
//! // Short and lowercase forms are accepted; the result is canonical.
//! assert_eq!(get_closest_color("#0f0", &["#abc", "#0e1"]).unwrap(), "#00EE11");
//! ```
//!
//! # Errors
//!
//! ```rust
//! use swatch::{ErrorKind, get_closest_color};
//!
//! let err = get_closest_color("blue", &["#000"]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidColor);
//!
//! let err = get_closest_color("#000", &["#FFF", "notacolor"]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidPalette);
//! ```
//!
//! # Features
//!
//! - `serde` - Serialization for [`HexColor`], [`Palette`], [`Rgb`], [`Lab`]
//!
//! # Dependencies
//!
//! - [`swatch-core`] - Core types and validation
//! - [`swatch-lab`] - Color conversion and distance
//! - [`tracing`] - Diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod palette;
pub mod search;

use tracing::debug;

pub use palette::Palette;
pub use search::{find_closest, find_closest_index};
pub use swatch_core::{
    Error, ErrorKind, HexColor, PaletteError, Result, Rgb, is_valid_color, normalize_color,
    validate_and_normalize_color, validate_and_normalize_palette,
};
pub use swatch_lab::{Lab, ToLab, Xyz, lab_distance, to_lab};
pub use swatch_lab::{constants, srgb};

/// Returns the canonical form of the `palette` entry closest to
/// `input_color`.
///
/// The input color is validated first, then every palette entry; nothing
/// is computed until both pass. Among equally close entries the earliest
/// wins. `palette` itself is never modified.
///
/// # Errors
///
/// - [`Error::InvalidColor`] if `input_color` is not `#RGB` or `#RRGGBB`
/// - [`Error::InvalidPalette`] if `palette` is empty or has an invalid entry
pub fn get_closest_color<S: AsRef<str>>(input_color: &str, palette: &[S]) -> Result<HexColor> {
    let input = validate_and_normalize_color(input_color)?;
    let palette = Palette::new(palette)?;

    let closest = palette.closest(&input).clone();
    debug!(input = %input, palette_len = palette.len(), closest = %closest, "closest color");
    Ok(closest)
}

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        Error, ErrorKind, HexColor, Lab, Palette, Rgb, ToLab, get_closest_color, lab_distance,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_point() {
        let palette = vec!["#000000".to_string(), "#FFFFFF".to_string()];
        assert_eq!(get_closest_color("#777777", &palette).unwrap(), "#FFFFFF");
        assert_eq!(get_closest_color("#444", &palette).unwrap(), "#000000");
    }

    #[test]
    fn test_color_checked_before_palette() {
        let empty: [&str; 0] = [];
        let err = get_closest_color("nope", &empty).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidColor);
    }

    #[test]
    fn test_caller_palette_untouched() {
        let palette = ["#abc", "#123456"];
        let result = get_closest_color("#ABC", &palette).unwrap();
        assert_eq!(result, "#AABBCC");
        assert_eq!(palette, ["#abc", "#123456"]);
    }
}
