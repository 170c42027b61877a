//! Parser error types

use std::fmt;

use geoview_core::{ShapeError, ShapeKind, MAX_DIMENSION};

/// Why a description could not be turned into shape parameters
///
/// Every variant is recoverable: show the original input together with
/// [`ParseError::hint`] and ask again. The parser never substitutes a
/// default shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// No keyword, cue or usable number count identified a kind
    NoShapeKindRecognized { input: String },
    /// A dimension (or the diameter of a radius) is above the limit
    DimensionExceedsMax {
        field: &'static str,
        value: f64,
        extent: f64,
        max: f64,
    },
    /// A dimension given as zero
    NonPositiveDimension { field: &'static str },
    /// The kind is known but some of its fields have no number
    InsufficientNumbers { kind: ShapeKind, missing: Vec<&'static str> },
    /// The parsed parameters broke another shape invariant
    Shape(ShapeError),
}

impl ParseError {
    /// A short, user-facing example of input that would parse
    pub fn hint(&self) -> String {
        match self {
            ParseError::NoShapeKindRecognized { .. } => {
                "Name a shape and its sizes, e.g. \"cylinder with radius 2 and height 4\" \
                 or \"cube 3 units on each side\""
                    .to_string()
            }
            ParseError::DimensionExceedsMax { .. } => format!(
                "Every dimension must be at most {} units (a radius at most {})",
                MAX_DIMENSION,
                MAX_DIMENSION / 2.0
            ),
            ParseError::NonPositiveDimension { .. } => {
                "Every dimension must be greater than zero".to_string()
            }
            ParseError::InsufficientNumbers { kind, .. } => {
                format!("Try \"{}\"", example_for(*kind))
            }
            ParseError::Shape(_) => "Check the tessellation settings".to_string(),
        }
    }
}

fn example_for(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::TriangularPrism => "triangular prism with height 5 and legs 3 and 4",
        ShapeKind::RectangularPrism => "box 4 wide, 6 high and 3 long",
        ShapeKind::Cube => "cube with side length 3",
        ShapeKind::Cylinder => "cylinder with radius 2 and height 4",
        ShapeKind::Cone => "cone with radius 2 and height 5",
        ShapeKind::Sphere => "sphere with radius 3",
        ShapeKind::Tesseract => "tesseract with size 3",
    }
}

impl From<ShapeError> for ParseError {
    fn from(e: ShapeError) -> Self {
        match e {
            ShapeError::DimensionExceedsMax { field, value, extent, max } => {
                ParseError::DimensionExceedsMax { field, value, extent, max }
            }
            ShapeError::NonPositiveDimension { field, .. } => ParseError::NonPositiveDimension { field },
            other => ParseError::Shape(other),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::NoShapeKindRecognized { input } => {
                write!(f, "Could not recognise a shape in '{}'", input)
            }
            ParseError::DimensionExceedsMax { field, value, extent, max } => {
                if value == extent {
                    write!(f, "{} of {} exceeds the maximum dimension {}", field, value, max)
                } else {
                    write!(
                        f,
                        "{} of {} spans {}, exceeding the maximum dimension {}",
                        field, value, extent, max
                    )
                }
            }
            ParseError::NonPositiveDimension { field } => {
                write!(f, "{} must be greater than zero", field)
            }
            ParseError::InsufficientNumbers { kind, missing } => {
                write!(f, "Not enough numbers for a {}: missing {}", kind.display_name(), missing.join(", "))
            }
            ParseError::Shape(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Shape(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_field() {
        let e = ParseError::DimensionExceedsMax { field: "size", value: 25.0, extent: 25.0, max: 20.0 };
        assert_eq!(e.to_string(), "size of 25 exceeds the maximum dimension 20");

        let e = ParseError::DimensionExceedsMax { field: "radius", value: 12.0, extent: 24.0, max: 20.0 };
        assert!(e.to_string().contains("spans 24"));
    }

    #[test]
    fn test_hint_mentions_kind_format() {
        let e = ParseError::InsufficientNumbers { kind: ShapeKind::Cone, missing: vec!["height"] };
        assert!(e.hint().contains("cone with radius"));
        assert!(e.to_string().ends_with("missing height"));
    }

    #[test]
    fn test_from_shape_error() {
        let e: ParseError = ShapeError::TooFewSegments { field: "radial_segments", value: 2 }.into();
        assert!(matches!(e, ParseError::Shape(_)));
        let e: ParseError = ShapeError::NonPositiveDimension { field: "height", value: 0.0 }.into();
        assert_eq!(e, ParseError::NonPositiveDimension { field: "height" });
    }
}
