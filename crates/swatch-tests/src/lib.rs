//! Integration tests for swatch crates.
//!
//! Checks the full chain (parse -> Lab -> search) against a reference
//! table computed in double precision with the same formulas, and the
//! public entry point against its documented properties.
//!
//! Set `RUST_LOG=swatch=trace` to see per-candidate search output.

pub mod reference;

/// Installs a test-friendly tracing subscriber, once.
///
/// Honors `RUST_LOG`; silent by default.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use swatch::{ErrorKind, HexColor, Palette, get_closest_color, lab_distance, to_lab};
    use swatch_core::validate::{validate_optional_color, validate_optional_palette};
    use swatch_core::{Error, PaletteError};
    use swatch_lab::rgb_to_xyz;

    use super::init_tracing;
    use super::reference::{self, EPSILON};

    #[test]
    fn test_reference_rgb_xyz_lab() {
        init_tracing();
        let table = reference::load();
        assert!(!table.colors.is_empty());

        for entry in &table.colors {
            let color = HexColor::parse(&entry.hex).unwrap();
            let rgb = color.rgb();
            assert_eq!(rgb.to_array(), entry.rgb, "{}", entry.hex);

            let xyz = rgb_to_xyz(rgb);
            for (got, want) in [xyz.x, xyz.y, xyz.z].into_iter().zip(entry.xyz) {
                assert_abs_diff_eq!(got, want, epsilon = EPSILON);
            }

            let lab = to_lab(&color);
            for (got, want) in lab.to_array().into_iter().zip(entry.lab) {
                assert_abs_diff_eq!(got, want, epsilon = EPSILON);
            }
        }
    }

    #[test]
    fn test_reference_searches() {
        init_tracing();
        let table = reference::load();

        for case in &table.searches {
            let result = get_closest_color(&case.input, &case.palette).unwrap();
            assert_eq!(result.as_str(), case.expected, "input {}", case.input);

            let palette = Palette::new(&case.palette).unwrap();
            let input = HexColor::parse(&case.input).unwrap();
            assert_eq!(palette.closest_index(&input), case.index);
        }
    }

    #[test]
    fn test_result_is_minimal() {
        let table = reference::load();

        for case in &table.searches {
            let input = HexColor::parse(&case.input).unwrap();
            let palette = Palette::new(&case.palette).unwrap();
            let best = lab_distance(&input, palette.closest(&input));
            for candidate in &palette {
                assert!(best <= lab_distance(&input, candidate));
            }
        }
    }

    #[test]
    fn test_normalize_long_form_is_uppercase() {
        for entry in reference::load().colors {
            let lower = entry.hex.to_ascii_lowercase();
            assert_eq!(HexColor::parse(&lower).unwrap().as_str(), entry.hex);
        }
    }

    #[test]
    fn test_normalize_short_form_expands() {
        let digits = "0123456789abcdefABCDEF";
        for x in digits.chars().step_by(3) {
            for y in digits.chars().step_by(5) {
                for z in digits.chars().step_by(7) {
                    let short = format!("#{x}{y}{z}");
                    let long = format!("#{x}{x}{y}{y}{z}{z}").to_ascii_uppercase();
                    let color = HexColor::parse(&short).unwrap();
                    assert_eq!(color.as_str(), long);
                    // Idempotent.
                    assert_eq!(HexColor::parse(color.as_str()).unwrap(), color);
                }
            }
        }
    }

    #[test]
    fn test_entry_point_examples() {
        init_tracing();
        assert_eq!(
            get_closest_color("#FE0101", &["#FF0000", "#00FF00", "#0000FF"]).unwrap(),
            "#FF0000"
        );
        assert_eq!(
            get_closest_color("#777777", &["#000000", "#FFFFFF"]).unwrap(),
            "#FFFFFF"
        );
        assert_eq!(
            get_closest_color("#123456", &["#abc", "#123456"]).unwrap(),
            "#123456"
        );
        assert_eq!(get_closest_color("#abc", &["#abc", "#123456"]).unwrap(), "#AABBCC");
    }

    #[test]
    fn test_single_entry_always_wins() {
        for entry in reference::load().colors {
            assert_eq!(
                get_closest_color(&entry.hex, &["#5a5"]).unwrap(),
                "#55AA55"
            );
        }
    }

    #[test]
    fn test_optional_inputs() {
        let err = validate_optional_color(None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidColor);
        assert_eq!(validate_optional_color(Some("#abc")).unwrap(), "#AABBCC");

        assert_eq!(
            validate_optional_palette::<String>(None).unwrap_err(),
            Error::InvalidPalette(PaletteError::Missing)
        );
        let raw = vec!["#abc".to_string(), "#123456".to_string()];
        let palette = validate_optional_palette(Some(raw.as_slice())).unwrap();
        assert_eq!(palette, ["#AABBCC", "#123456"]);
    }

    #[test]
    fn test_errors() {
        let empty: [&str; 0] = [];
        assert_eq!(
            get_closest_color("#000", &empty).unwrap_err().kind(),
            ErrorKind::InvalidPalette
        );
        assert_eq!(
            get_closest_color("#000", &["#FFF", "notacolor"]).unwrap_err().kind(),
            ErrorKind::InvalidPalette
        );
        assert_eq!(
            get_closest_color("blue", &["#FFF"]).unwrap_err().kind(),
            ErrorKind::InvalidColor
        );
        for bad in ["red", "#12345", "#GGGGGG", "123456", ""] {
            assert!(!swatch::is_valid_color(bad));
        }
    }

    #[test]
    fn test_distance_properties() {
        let colors: Vec<HexColor> = reference::load()
            .colors
            .iter()
            .map(|e| HexColor::parse(&e.hex).unwrap())
            .collect();

        for a in &colors {
            assert_eq!(lab_distance(a, a), 0.0);
            for b in &colors {
                let d = lab_distance(a, b);
                assert!(d >= 0.0);
                assert_eq!(d, lab_distance(b, a));
            }
        }
    }

    #[test]
    fn test_serde_palette_roundtrip() {
        let palette: Palette = serde_json::from_str(r##"["#abc", "#123456"]"##).unwrap();
        let json = serde_json::to_string(&palette).unwrap();
        assert_eq!(json, r##"["#AABBCC","#123456"]"##);

        let lab = to_lab(palette.first());
        let back: swatch::Lab = serde_json::from_str(&serde_json::to_string(&lab).unwrap()).unwrap();
        assert_eq!(back, lab);
    }

    #[test]
    fn test_concurrent_calls() {
        let palette: Vec<String> = reference::load()
            .colors
            .into_iter()
            .map(|e| e.hex.to_ascii_lowercase())
            .collect();
        let expected = get_closest_color("#FE0101", &palette).unwrap();

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| get_closest_color("#FE0101", &palette).unwrap()))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap(), expected);
            }
        });
        assert!(palette.iter().all(|c| c.chars().all(|ch| !ch.is_ascii_uppercase())));
    }
}
