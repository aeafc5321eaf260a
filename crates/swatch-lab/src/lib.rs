//! # swatch-lab
//!
//! sRGB to CIE XYZ to CIE L*a*b* conversion and Lab-space distance.
//!
//! # Pipeline
//!
//! ```text
//! HexColor --rgb()--> Rgb --sRGB EOTF, x100, matrix--> Xyz --D65, f(t)--> Lab
//! ```
//!
//! All math is `f64`. The constants in [`constants`] are the four-digit
//! sRGB matrix and the classic CIE thresholds; they are part of the
//! contract, not an approximation to be improved.
//!
//! # Usage
//!
//! ```rust
//! use swatch_core::HexColor;
//! use swatch_lab::{ToLab, lab_distance};
//!
//! let a = HexColor::parse("#FF0000").unwrap();
//! let b = HexColor::parse("#00F").unwrap();
//!
//! let lab = a.to_lab();
//! assert!((lab.l - 53.23).abs() < 0.01);
//! assert!(lab_distance(&a, &b) > 100.0);
//! ```
//!
//! # Dependencies
//!
//! - [`swatch-core`] - `HexColor`, `Rgb`
//! - [`glam`] - Matrix and vector math
//!
//! # Used By
//!
//! - `swatch` - Nearest-color search

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod constants;
pub mod srgb;
mod xyz;
mod lab;
mod distance;

pub use xyz::{Xyz, rgb_to_xyz};
pub use lab::{Lab, ToLab, rgb_to_lab, to_lab, xyz_to_lab};
pub use distance::lab_distance;
