//! Shape parameters
//!
//! [`ShapeParams`] is the canonical `{kind, params}` value every engine in the
//! crate consumes. Each variant carries exactly the construction parameters of
//! its kind, so dispatch is a `match` instead of string comparisons.
//!
//! The engines assume validated input. Anything that crosses a trust
//! boundary (parsed text, preset files) goes through [`ShapeParams::validate`].

use serde::{Serialize, Deserialize};

use crate::error::ShapeError;
use crate::kind::ShapeKind;

/// Upper bound for every linear dimension (diameter for radius-based shapes)
pub const MAX_DIMENSION: f64 = 20.0;

/// Minimum tessellation count for curved solids
pub const MIN_SEGMENTS: u32 = 3;

pub const DEFAULT_RADIAL_SEGMENTS: u32 = 32;
pub const DEFAULT_WIDTH_SEGMENTS: u32 = 32;
pub const DEFAULT_HEIGHT_SEGMENTS: u32 = 16;

/// Edge of the tesseract's inner cube relative to the outer cube
pub const TESSERACT_INNER_RATIO: f64 = 0.6;

fn default_radial_segments() -> u32 {
    DEFAULT_RADIAL_SEGMENTS
}

fn default_width_segments() -> u32 {
    DEFAULT_WIDTH_SEGMENTS
}

fn default_height_segments() -> u32 {
    DEFAULT_HEIGHT_SEGMENTS
}

/// Kind-tagged construction parameters
///
/// All lengths are in abstract "units". Segment counts are tessellation
/// hints and never change the analytic metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ShapeParams {
    /// Right-angled triangular base with legs `side1`, `side2`, extruded by `height`
    TriangularPrism { height: f64, side1: f64, side2: f64 },
    /// Box with `width` on X, `height` on Y, `length` on Z
    RectangularPrism { width: f64, height: f64, length: f64 },
    /// Box with all edges equal to `size`
    Cube { size: f64 },
    Cylinder {
        radius: f64,
        height: f64,
        #[serde(default = "default_radial_segments")]
        radial_segments: u32,
    },
    Cone {
        radius: f64,
        height: f64,
        #[serde(default = "default_radial_segments")]
        radial_segments: u32,
    },
    Sphere {
        radius: f64,
        #[serde(default = "default_width_segments")]
        width_segments: u32,
        #[serde(default = "default_height_segments")]
        height_segments: u32,
    },
    /// Outer cube edge; the inner cube is always `TESSERACT_INNER_RATIO * size`
    Tesseract { size: f64 },
}

/// A linear dimension of a shape, as checked against [`MAX_DIMENSION`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    pub field: &'static str,
    pub value: f64,
    /// The extent the value spans in space (`2 * radius` for radii)
    pub extent: f64,
}

impl Dimension {
    fn linear(field: &'static str, value: f64) -> Self {
        Self { field, value, extent: value }
    }

    fn radius(field: &'static str, value: f64) -> Self {
        Self { field, value, extent: value * 2.0 }
    }
}

impl ShapeParams {
    pub fn triangular_prism(height: f64, side1: f64, side2: f64) -> Self {
        ShapeParams::TriangularPrism { height, side1, side2 }
    }

    pub fn rectangular_prism(width: f64, height: f64, length: f64) -> Self {
        ShapeParams::RectangularPrism { width, height, length }
    }

    pub fn cube(size: f64) -> Self {
        ShapeParams::Cube { size }
    }

    /// Cylinder with the default radial tessellation
    pub fn cylinder(radius: f64, height: f64) -> Self {
        ShapeParams::Cylinder { radius, height, radial_segments: DEFAULT_RADIAL_SEGMENTS }
    }

    /// Cone with the default radial tessellation
    pub fn cone(radius: f64, height: f64) -> Self {
        ShapeParams::Cone { radius, height, radial_segments: DEFAULT_RADIAL_SEGMENTS }
    }

    /// Sphere with the default width/height tessellation
    pub fn sphere(radius: f64) -> Self {
        ShapeParams::Sphere {
            radius,
            width_segments: DEFAULT_WIDTH_SEGMENTS,
            height_segments: DEFAULT_HEIGHT_SEGMENTS,
        }
    }

    pub fn tesseract(size: f64) -> Self {
        ShapeParams::Tesseract { size }
    }

    /// Replace the tessellation counts of a curved solid
    ///
    /// `radial` applies to cylinders and cones and is the sphere's width
    /// count; `height` is only used by spheres. Flat solids are returned
    /// unchanged.
    pub fn with_segments(self, radial: u32, height: u32) -> Self {
        match self {
            ShapeParams::Cylinder { radius, height: h, .. } => {
                ShapeParams::Cylinder { radius, height: h, radial_segments: radial }
            }
            ShapeParams::Cone { radius, height: h, .. } => {
                ShapeParams::Cone { radius, height: h, radial_segments: radial }
            }
            ShapeParams::Sphere { radius, .. } => {
                ShapeParams::Sphere { radius, width_segments: radial, height_segments: height }
            }
            other => other,
        }
    }

    /// Reasonable starting parameters for a kind
    pub fn default_for(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::TriangularPrism => Self::triangular_prism(5.0, 3.0, 4.0),
            ShapeKind::RectangularPrism => Self::rectangular_prism(4.0, 6.0, 3.0),
            ShapeKind::Cube => Self::cube(3.0),
            ShapeKind::Cylinder => Self::cylinder(2.0, 4.0),
            ShapeKind::Cone => Self::cone(2.0, 5.0),
            ShapeKind::Sphere => Self::sphere(3.0),
            ShapeKind::Tesseract => Self::tesseract(3.0),
        }
    }

    /// The kind tag of this value
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeParams::TriangularPrism { .. } => ShapeKind::TriangularPrism,
            ShapeParams::RectangularPrism { .. } => ShapeKind::RectangularPrism,
            ShapeParams::Cube { .. } => ShapeKind::Cube,
            ShapeParams::Cylinder { .. } => ShapeKind::Cylinder,
            ShapeParams::Cone { .. } => ShapeKind::Cone,
            ShapeParams::Sphere { .. } => ShapeKind::Sphere,
            ShapeParams::Tesseract { .. } => ShapeKind::Tesseract,
        }
    }

    /// Linear dimensions in declaration order
    pub fn dimensions(&self) -> Vec<Dimension> {
        match *self {
            ShapeParams::TriangularPrism { height, side1, side2 } => vec![
                Dimension::linear("height", height),
                Dimension::linear("side1", side1),
                Dimension::linear("side2", side2),
            ],
            ShapeParams::RectangularPrism { width, height, length } => vec![
                Dimension::linear("width", width),
                Dimension::linear("height", height),
                Dimension::linear("length", length),
            ],
            ShapeParams::Cube { size } | ShapeParams::Tesseract { size } => {
                vec![Dimension::linear("size", size)]
            }
            ShapeParams::Cylinder { radius, height, .. } | ShapeParams::Cone { radius, height, .. } => {
                vec![Dimension::radius("radius", radius), Dimension::linear("height", height)]
            }
            ShapeParams::Sphere { radius, .. } => vec![Dimension::radius("radius", radius)],
        }
    }

    /// Tessellation counts, empty for flat solids
    pub fn segments(&self) -> Vec<(&'static str, u32)> {
        match *self {
            ShapeParams::Cylinder { radial_segments, .. } | ShapeParams::Cone { radial_segments, .. } => {
                vec![("radial_segments", radial_segments)]
            }
            ShapeParams::Sphere { width_segments, height_segments, .. } => vec![
                ("width_segments", width_segments),
                ("height_segments", height_segments),
            ],
            _ => Vec::new(),
        }
    }

    /// Check the parameter invariants, reporting the first violation
    ///
    /// Dimensions must be finite and positive, their extent at most
    /// [`MAX_DIMENSION`], and segment counts at least [`MIN_SEGMENTS`].
    /// Nothing is clamped.
    pub fn validate(&self) -> Result<(), ShapeError> {
        for dim in self.dimensions() {
            if !dim.value.is_finite() || dim.value <= 0.0 {
                return Err(ShapeError::NonPositiveDimension { field: dim.field, value: dim.value });
            }
            if dim.extent > MAX_DIMENSION {
                return Err(ShapeError::DimensionExceedsMax {
                    field: dim.field,
                    value: dim.value,
                    extent: dim.extent,
                    max: MAX_DIMENSION,
                });
            }
        }
        for (field, value) in self.segments() {
            if value < MIN_SEGMENTS {
                return Err(ShapeError::TooFewSegments { field, value });
            }
        }
        Ok(())
    }

    /// Hypotenuse of a triangular prism's base, `None` for other kinds
    pub fn side3(&self) -> Option<f64> {
        match *self {
            ShapeParams::TriangularPrism { side1, side2, .. } => Some(side1.hypot(side2)),
            _ => None,
        }
    }
}
