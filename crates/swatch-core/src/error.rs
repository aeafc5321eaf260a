//! Error types for swatch operations.
//!
//! Every failure in the system reduces to one of two kinds: the input color
//! was not a hex color, or the palette was not a non-empty list of hex colors.
//! Both are raised before any color math runs.
//!
//! # Usage
//!
//! ```rust
//! use swatch_core::{Error, ErrorKind, HexColor};
//!
//! let err = "blue".parse::<HexColor>().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::InvalidColor);
//! assert!(err.to_string().contains("blue"));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating colors and palettes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The value is not `#RGB` or `#RRGGBB`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use swatch_core::Error;
    ///
    /// let err = Error::InvalidColor { value: "#12345".into() };
    /// assert_eq!(err.to_string(), "invalid input color: \"#12345\"");
    /// ```
    #[error("invalid input color: {value:?}")]
    InvalidColor {
        /// The rejected value, as given.
        value: String,
    },

    /// The palette is missing, empty, or holds an invalid entry.
    #[error("invalid input palette: {0}")]
    InvalidPalette(#[from] PaletteError),
}

/// Why a palette was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// No palette was supplied.
    #[error("palette is missing")]
    Missing,

    /// The palette has no entries.
    #[error("palette is empty")]
    Empty,

    /// An entry failed color validation.
    #[error("entry {index} is not a hex color: {value:?}")]
    Entry {
        /// Position of the first invalid entry.
        index: usize,
        /// The rejected entry, as given.
        value: String,
    },
}

/// The two error kinds, for matching without inspecting payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`Error::InvalidColor`].
    InvalidColor,
    /// See [`Error::InvalidPalette`].
    InvalidPalette,
}

impl Error {
    /// Creates an [`Error::InvalidColor`] for the given value.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Error::InvalidColor { value: value.into() }
    }

    /// Returns the kind of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidColor { .. } => ErrorKind::InvalidColor,
            Error::InvalidPalette(_) => ErrorKind::InvalidPalette,
        }
    }
}
