//! Shape error types
//!
//! Errors raised while validating parameters or dispatching on a kind.
//! Every failure is local to the single request that produced it.

use std::fmt;

use crate::kind::ShapeKind;

/// Error type for shape operations
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A kind name that is not one of the supported solids
    UnsupportedShapeKind(String),
    /// A linear dimension (or the diameter of a radius) is above the limit
    DimensionExceedsMax {
        /// Parameter name (`"height"`, `"radius"`, ...)
        field: &'static str,
        /// The parameter value as given
        value: f64,
        /// The quantity compared with the limit (`2 * radius` for radii)
        extent: f64,
        /// The limit that was exceeded
        max: f64,
    },
    /// A linear dimension that is zero, negative or not finite
    NonPositiveDimension { field: &'static str, value: f64 },
    /// A tessellation count below the minimum of 3
    TooFewSegments { field: &'static str, value: u32 },
    /// The requested kind does not match the parameter variant
    KindMismatch { expected: ShapeKind, found: ShapeKind },
    /// The kind has no planar unfolding
    NetUndefined(ShapeKind),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::UnsupportedShapeKind(name) => {
                write!(f, "Unsupported shape kind: '{}'", name)
            }
            ShapeError::DimensionExceedsMax { field, value, extent, max } => {
                if value == extent {
                    write!(f, "{} of {} exceeds the maximum dimension {}", field, value, max)
                } else {
                    write!(
                        f,
                        "{} of {} gives an extent of {}, exceeding the maximum dimension {}",
                        field, value, extent, max
                    )
                }
            }
            ShapeError::NonPositiveDimension { field, value } => {
                write!(f, "{} must be a positive finite number, got {}", field, value)
            }
            ShapeError::TooFewSegments { field, value } => {
                write!(f, "{} must be at least 3, got {}", field, value)
            }
            ShapeError::KindMismatch { expected, found } => {
                write!(f, "Expected {} parameters, found {}", expected, found)
            }
            ShapeError::NetUndefined(kind) => {
                write!(f, "No net is defined for {}", kind)
            }
        }
    }
}

impl std::error::Error for ShapeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_kind_display() {
        let msg = ShapeError::UnsupportedShapeKind("torus".to_string()).to_string();
        assert!(msg.contains("Unsupported"));
        assert!(msg.contains("torus"));
    }

    #[test]
    fn test_exceeds_max_display_names_field_and_value() {
        let err = ShapeError::DimensionExceedsMax {
            field: "size",
            value: 25.0,
            extent: 25.0,
            max: 20.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("size"));
        assert!(msg.contains("25"));
        assert!(msg.contains("20"));
    }

    #[test]
    fn test_exceeds_max_display_mentions_extent_for_radius() {
        let err = ShapeError::DimensionExceedsMax {
            field: "radius",
            value: 12.0,
            extent: 24.0,
            max: 20.0,
        };
        assert!(err.to_string().contains("extent of 24"));
    }

    #[test]
    fn test_net_undefined_display() {
        let msg = ShapeError::NetUndefined(ShapeKind::Tesseract).to_string();
        assert!(msg.contains("tesseract"));
    }
}
