//! Nearest-color search.
//!
//! A plain linear scan: every candidate is converted to Lab and compared
//! with the input. The first entry starts as the best match and is only
//! replaced by a strictly closer one, so among equally close entries the
//! earliest wins.

use swatch_core::HexColor;
use swatch_lab::to_lab;
use tracing::trace;

/// Returns the position of the entry in `palette` closest to `input`.
///
/// `None` only when `palette` is empty.
///
/// # Example
///
/// ```rust
/// use swatch::HexColor;
/// use swatch::search::find_closest_index;
///
/// let palette: Vec<HexColor> = ["#FFF", "#000", "#000"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let input: HexColor = "#111".parse().unwrap();
///
/// // Duplicates tie; the first one wins.
/// assert_eq!(find_closest_index(&input, &palette), Some(1));
/// ```
pub fn find_closest_index(input: &HexColor, palette: &[HexColor]) -> Option<usize> {
    let target = to_lab(input);
    let mut entries = palette.iter().enumerate();

    let (_, first) = entries.next()?;
    let mut best = 0;
    let mut best_distance = target.distance(&to_lab(first));
    trace!(index = 0, candidate = %first, distance = best_distance, "candidate");

    for (index, candidate) in entries {
        let distance = target.distance(&to_lab(candidate));
        trace!(index, candidate = %candidate, distance, "candidate");
        // Strict: ties keep the earlier entry.
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }

    Some(best)
}

/// Returns the entry in `palette` closest to `input`.
///
/// `None` only when `palette` is empty. See [`find_closest_index`].
#[inline]
pub fn find_closest<'a>(input: &HexColor, palette: &'a [HexColor]) -> Option<&'a HexColor> {
    find_closest_index(input, palette).map(|i| &palette[i])
}
