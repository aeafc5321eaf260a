//! # swatch-core
//!
//! Core types for swatch: validated hex colors, RGB triples and errors.
//!
//! # Overview
//!
//! - [`HexColor`] - A hex color in canonical `#RRGGBB` uppercase form
//! - [`Rgb`] - 8-bit RGB triple
//! - [`Error`] - The two error kinds: invalid color, invalid palette
//! - [`validate`] - Color and palette validation/normalization
//!
//! # Usage
//!
//! ```rust
//! use swatch_core::{HexColor, Rgb};
//!
//! let c = HexColor::parse("#f80").unwrap();
//! assert_eq!(c.as_str(), "#FF8800");
//! assert_eq!(c.rgb(), Rgb::new(255, 136, 0));
//! ```
//!
//! # Features
//!
//! - `serde` - `Serialize`/`Deserialize` for [`HexColor`] (as its canonical
//!   string, validated on input) and [`Rgb`]
//!
//! # Dependencies
//!
//! - [`regex`] - Hex color pattern
//! - [`thiserror`] - Error derive
//! - [`tracing`] - Diagnostics
//!
//! # Used By
//!
//! - `swatch-lab` - Lab conversion from [`HexColor`]/[`Rgb`]
//! - `swatch` - Palette search and the `get_closest_color` entry point

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod hex;
mod rgb;
pub mod validate;

pub use error::{Error, ErrorKind, PaletteError, Result};
pub use hex::{HexColor, is_valid_color, normalize_color};
pub use rgb::Rgb;
pub use validate::{validate_and_normalize_color, validate_and_normalize_palette};
