//! Analytic metrics
//!
//! Closed-form volume, area and topology for every kind. These are the
//! authoritative numbers; the tessellated meshes only approximate them for
//! curved solids.

use serde::{Serialize, Deserialize};
use std::f64::consts::PI;

use crate::error::ShapeError;
use crate::kind::ShapeKind;
use crate::params::{ShapeParams, TESSERACT_INNER_RATIO};

/// Derived numbers for one shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub kind: ShapeKind,
    pub volume: f64,
    pub surface_area: f64,
    /// Area of the side faces, excluding bases
    pub lateral_area: Option<f64>,
    /// Area of one base
    pub base_area: Option<f64>,
    pub faces: u32,
    pub edges: u32,
    pub vertices: u32,
    /// Kind-specific extras
    pub detail: MetricDetail,
}

/// Kind-specific metric fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MetricDetail {
    TriangularPrism {
        side3: f64,
        perimeter: f64,
    },
    /// Shared by rectangular prisms and cubes
    Box {
        space_diagonal: f64,
        /// Only a cube has a single face diagonal
        face_diagonal: Option<f64>,
    },
    Cylinder {
        base_circumference: f64,
    },
    Cone {
        slant_height: f64,
        /// Full opening angle at the apex, degrees
        apex_angle_deg: f64,
        /// Sweep of the unrolled lateral surface, degrees
        sector_angle_deg: f64,
    },
    Sphere {
        diameter: f64,
        great_circle_area: f64,
        great_circle_circumference: f64,
    },
    /// Informational only; totals above describe the outer cube
    Tesseract {
        inner_size: f64,
        cells: u32,
        hypervolume: f64,
    },
}

impl Metrics {
    /// `V - E + F`
    pub fn euler_characteristic(&self) -> i64 {
        self.vertices as i64 - self.edges as i64 + self.faces as i64
    }

    /// True for flat-faced solids, where `V - E + F == 2` must hold
    pub fn is_polyhedral(&self) -> bool {
        self.kind.is_polyhedral()
    }

    /// The cone's sector angle, if this is a cone
    pub fn sector_angle_deg(&self) -> Option<f64> {
        match self.detail {
            MetricDetail::Cone { sector_angle_deg, .. } => Some(sector_angle_deg),
            _ => None,
        }
    }

    /// The cone's slant height, if this is a cone
    pub fn slant_height(&self) -> Option<f64> {
        match self.detail {
            MetricDetail::Cone { slant_height, .. } => Some(slant_height),
            _ => None,
        }
    }
}

/// Compute the metrics of a shape
///
/// Total over valid parameters. No guards: non-positive or non-finite input
/// yields meaningless numbers, so validate first.
pub fn compute_metrics(params: &ShapeParams) -> Metrics {
    let kind = params.kind();
    match *params {
        ShapeParams::TriangularPrism { height, side1, side2 } => {
            let side3 = side1.hypot(side2);
            let base_area = side1 * side2 / 2.0;
            let perimeter = side1 + side2 + side3;
            let lateral_area = perimeter * height;
            Metrics {
                kind,
                volume: base_area * height,
                surface_area: 2.0 * base_area + lateral_area,
                lateral_area: Some(lateral_area),
                base_area: Some(base_area),
                faces: 5,
                edges: 9,
                vertices: 6,
                detail: MetricDetail::TriangularPrism { side3, perimeter },
            }
        }
        ShapeParams::RectangularPrism { width, height, length } => {
            box_metrics(kind, width, height, length)
        }
        ShapeParams::Cube { size } => {
            let mut m = box_metrics(kind, size, size, size);
            m.detail = MetricDetail::Box {
                space_diagonal: size * 3f64.sqrt(),
                face_diagonal: Some(size * 2f64.sqrt()),
            };
            m
        }
        ShapeParams::Cylinder { radius, height, .. } => {
            let base_area = PI * radius * radius;
            let lateral_area = 2.0 * PI * radius * height;
            Metrics {
                kind,
                volume: base_area * height,
                surface_area: lateral_area + 2.0 * base_area,
                lateral_area: Some(lateral_area),
                base_area: Some(base_area),
                faces: 3,
                edges: 2,
                vertices: 0,
                detail: MetricDetail::Cylinder { base_circumference: 2.0 * PI * radius },
            }
        }
        ShapeParams::Cone { radius, height, .. } => {
            let slant_height = radius.hypot(height);
            let base_area = PI * radius * radius;
            let lateral_area = PI * radius * slant_height;
            Metrics {
                kind,
                volume: base_area * height / 3.0,
                surface_area: lateral_area + base_area,
                lateral_area: Some(lateral_area),
                base_area: Some(base_area),
                faces: 2,
                edges: 1,
                vertices: 1,
                detail: MetricDetail::Cone {
                    slant_height,
                    apex_angle_deg: 2.0 * (radius / height).atan().to_degrees(),
                    sector_angle_deg: cone_sector_angle_deg(radius, height),
                },
            }
        }
        ShapeParams::Sphere { radius, .. } => {
            let great_circle_area = PI * radius * radius;
            Metrics {
                kind,
                volume: 4.0 / 3.0 * PI * radius.powi(3),
                surface_area: 4.0 * great_circle_area,
                lateral_area: None,
                base_area: None,
                faces: 1,
                edges: 0,
                vertices: 0,
                detail: MetricDetail::Sphere {
                    diameter: 2.0 * radius,
                    great_circle_area,
                    great_circle_circumference: 2.0 * PI * radius,
                },
            }
        }
        ShapeParams::Tesseract { size } => Metrics {
            kind,
            volume: size.powi(3),
            surface_area: 6.0 * size * size,
            lateral_area: None,
            base_area: None,
            faces: 24,
            edges: 32,
            vertices: 16,
            detail: MetricDetail::Tesseract {
                inner_size: size * TESSERACT_INNER_RATIO,
                cells: 8,
                hypervolume: size.powi(4),
            },
        },
    }
}

/// Kind-checked variant of [`compute_metrics`]
///
/// Fails with [`ShapeError::KindMismatch`] when the caller's kind and the
/// parameter variant disagree, instead of guessing which one was meant.
pub fn compute_metrics_for(kind: ShapeKind, params: &ShapeParams) -> Result<Metrics, ShapeError> {
    if params.kind() != kind {
        return Err(ShapeError::KindMismatch { expected: kind, found: params.kind() });
    }
    Ok(compute_metrics(params))
}

/// Sweep of a cone's unrolled lateral surface, `360 * r / slant` degrees
///
/// Shared with the net layout so both report the identical value.
pub fn cone_sector_angle_deg(radius: f64, height: f64) -> f64 {
    360.0 * radius / radius.hypot(height)
}

fn box_metrics(
    kind: ShapeKind,
    width: f64,
    height: f64,
    length: f64,
) -> Metrics {
    Metrics {
        kind,
        volume: width * height * length,
        surface_area: 2.0 * (width * length + width * height + height * length),
        lateral_area: Some(2.0 * height * (width + length)),
        base_area: Some(width * length),
        faces: 6,
        edges: 12,
        vertices: 8,
        detail: MetricDetail::Box {
            space_diagonal: (width * width + height * height + length * length).sqrt(),
            face_diagonal: None,
        },
    }
}
