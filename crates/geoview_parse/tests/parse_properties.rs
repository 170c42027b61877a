//! Property tests for the description parser

use geoview_core::{ShapeKind, ShapeParams, MAX_DIMENSION};
use geoview_parse::{parse_description, FieldSource, ParseError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_never_panics(text in "\\PC{0,80}") {
        let _ = parse_description(&text);
    }

    #[test]
    fn prop_never_panics_on_shape_like_text(
        words in prop::collection::vec(
            prop::sample::select(vec![
                "cube", "cone", "round", "radius", "height", "4d", "legs", "and", "x", "units",
                "diameter", "high", "0", "3", "12.5", "7", "wide", "nested", ",",
            ]),
            0..12,
        )
    ) {
        let text = words.join(" ");
        if let Ok(parsed) = parse_description(&text) {
            prop_assert!(parsed.params.validate().is_ok());
        }
    }

    #[test]
    fn prop_labelled_cylinder_round_trips(r in 0.1f64..10.0, h in 0.1f64..20.0) {
        let text = format!("cylinder with radius {} and height {}", r, h);
        let parsed = parse_description(&text).unwrap();
        prop_assert_eq!(parsed.params, ShapeParams::cylinder(r, h));
        prop_assert_eq!(parsed.source_of("radius"), Some(FieldSource::Labelled));
        prop_assert_eq!(parsed.source_of("height"), Some(FieldSource::Labelled));
        prop_assert!(parsed.ambiguities.is_empty());
    }

    #[test]
    fn prop_unit_suffix_keeps_the_whole_value(
        tenths in 1u32..=200,
        unit in prop::sample::select(vec!["", "m", "cm", "mm", "ft", "in", " units"]),
    ) {
        let number = format!("{:.1}", tenths as f64 / 10.0);
        let parsed = parse_description(&format!("cube {}{}", number, unit)).unwrap();
        prop_assert_eq!(parsed.params, ShapeParams::cube(number.parse().unwrap()));
    }

    #[test]
    fn prop_negative_dimensions_are_rejected(size in 0.1f64..20.0) {
        let err = parse_description(&format!("sphere radius -{}", size / 2.0)).unwrap_err();
        prop_assert_eq!(err, ParseError::NonPositiveDimension { field: "radius" });
    }

    #[test]
    fn prop_oversize_is_rejected(size in 20.01f64..1000.0) {
        let text = format!("cube {}", size);
        match parse_description(&text) {
            Err(ParseError::DimensionExceedsMax { field, value, max, .. }) => {
                prop_assert_eq!(field, "size");
                prop_assert_eq!(value, size);
                prop_assert_eq!(max, MAX_DIMENSION);
            }
            other => prop_assert!(false, "expected DimensionExceedsMax, got {:?}", other),
        }
    }

    #[test]
    fn prop_three_numbers_fill_height_width_length(
        h in 1u32..=20,
        w in 1u32..=20,
        l in 1u32..=20,
    ) {
        let parsed = parse_description(&format!("{} {} {}", h, w, l)).unwrap();
        prop_assert_eq!(parsed.kind(), ShapeKind::RectangularPrism);
        prop_assert_eq!(
            parsed.params,
            ShapeParams::rectangular_prism(w as f64, h as f64, l as f64)
        );
    }
}

#[test]
fn test_errors_carry_hints() {
    for text in ["", "hello", "cylinder radius 2", "sphere radius 11", "cube 0"] {
        let err = parse_description(text).unwrap_err();
        assert!(!err.hint().is_empty(), "{}", text);
        assert!(!err.to_string().is_empty());
    }
}
