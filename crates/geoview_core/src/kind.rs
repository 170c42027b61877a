//! Shape kinds
//!
//! The closed set of solids the engine knows how to build. Every per-kind
//! decision in the crate is an exhaustive `match`, so adding a variant here
//! surfaces every place that needs a new arm.

use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ShapeError;

/// One of the seven supported solids
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ShapeKind {
    TriangularPrism,
    RectangularPrism,
    Cube,
    Cylinder,
    Cone,
    Sphere,
    Tesseract,
}

impl ShapeKind {
    /// Every kind, in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::TriangularPrism,
        ShapeKind::RectangularPrism,
        ShapeKind::Cube,
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Sphere,
        ShapeKind::Tesseract,
    ];

    /// Canonical camelCase name (`"triangularPrism"`, `"cube"`, ...)
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::TriangularPrism => "triangularPrism",
            ShapeKind::RectangularPrism => "rectangularPrism",
            ShapeKind::Cube => "cube",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Cone => "cone",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Tesseract => "tesseract",
        }
    }

    /// Human readable name for labels
    pub fn display_name(self) -> &'static str {
        match self {
            ShapeKind::TriangularPrism => "Triangular Prism",
            ShapeKind::RectangularPrism => "Rectangular Prism",
            ShapeKind::Cube => "Cube",
            ShapeKind::Cylinder => "Cylinder",
            ShapeKind::Cone => "Cone",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Tesseract => "Tesseract",
        }
    }

    /// Flat-faced solids, for which Euler's formula holds
    pub fn is_polyhedral(self) -> bool {
        matches!(
            self,
            ShapeKind::TriangularPrism | ShapeKind::RectangularPrism | ShapeKind::Cube
        )
    }

    /// Solids built by revolving a profile around the Y axis
    pub fn is_solid_of_revolution(self) -> bool {
        matches!(self, ShapeKind::Cylinder | ShapeKind::Cone | ShapeKind::Sphere)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    /// Accepts the camelCase name in any case, plus `snake_case`,
    /// `kebab-case` and space separated spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name().to_lowercase() == normalized)
            .ok_or_else(|| ShapeError::UnsupportedShapeKind(s.to_string()))
    }
}
