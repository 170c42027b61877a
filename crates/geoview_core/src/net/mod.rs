//! Net (unfolding) layouts
//!
//! [`compute_net`] lays the faces of a solid out flat for a pedagogical
//! diagram. Diagram coordinates have Y up and are the real dimensions
//! multiplied by one per-net `scale`, so every face keeps its true
//! proportions. Faces are separated by [`NET_GAP`] to avoid ambiguous
//! touching edges; the fold edges are still recorded with their real
//! lengths so a renderer can draw them dashed.

mod curved;
mod polyhedral;

use serde::{Serialize, Deserialize};
use geoview_math::{signed_area, Bounds2, Vec2};
use std::collections::VecDeque;
use std::f64::consts::PI;

use crate::error::ShapeError;
use crate::kind::ShapeKind;
use crate::params::ShapeParams;

/// Spacing between neighbouring faces, in diagram units
pub const NET_GAP: f64 = 4.0;

/// Points used to sample a full circle outline
pub const CURVE_SAMPLES: usize = 64;

pub const TRIANGULAR_PRISM_SCALE: f64 = 20.0;
pub const RECTANGULAR_PRISM_SCALE: f64 = 18.0;
pub const CUBE_SCALE: f64 = 30.0;
pub const REVOLUTION_SCALE: f64 = 10.0;

/// Exact geometry of a face
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "camelCase")]
pub enum FaceShape {
    /// The outline itself is exact
    Polygon,
    Circle { center: Vec2, radius: f64 },
    /// Circular sector with its apex at `center`, angles in degrees
    Sector { center: Vec2, radius: f64, start_deg: f64, sweep_deg: f64 },
}

/// One face of the unfolding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetFace {
    pub label: String,
    pub shape: FaceShape,
    /// Counter-clockwise outline; curved faces are sampled
    pub outline: Vec<Vec2>,
}

impl NetFace {
    fn polygon(label: impl Into<String>, outline: Vec<Vec2>) -> Self {
        Self { label: label.into(), shape: FaceShape::Polygon, outline }
    }

    /// Axis-aligned rectangle with its lower-left corner at `origin`
    fn rect(label: impl Into<String>, origin: Vec2, width: f64, height: f64) -> Self {
        Self::polygon(label, rect_outline(origin, width, height))
    }

    fn circle(label: impl Into<String>, center: Vec2, radius: f64) -> Self {
        Self {
            label: label.into(),
            shape: FaceShape::Circle { center, radius },
            outline: arc_points(center, radius, 0.0, 360.0, CURVE_SAMPLES, false),
        }
    }

    fn sector(label: impl Into<String>, center: Vec2, radius: f64, start_deg: f64, sweep_deg: f64) -> Self {
        let mut outline = vec![center];
        outline.extend(arc_points(center, radius, start_deg, sweep_deg, CURVE_SAMPLES, true));
        Self {
            label: label.into(),
            shape: FaceShape::Sector { center, radius, start_deg, sweep_deg },
            outline,
        }
    }

    /// Face area in diagram units (exact for circles and sectors)
    pub fn area(&self) -> f64 {
        match self.shape {
            FaceShape::Polygon => signed_area(&self.outline).abs(),
            FaceShape::Circle { radius, .. } => PI * radius * radius,
            FaceShape::Sector { radius, sweep_deg, .. } => sweep_deg / 360.0 * PI * radius * radius,
        }
    }

    pub fn bounds(&self) -> Bounds2 {
        Bounds2::from_points(&self.outline)
    }
}

/// A shared edge of two faces, drawn along the boundary of `faces[0]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoldEdge {
    pub faces: [usize; 2],
    pub path: Vec<Vec2>,
    /// Length of the edge on the real solid, in units
    pub real_length: f64,
}

/// Text placed on the diagram; values are real units, not diagram units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetLabel {
    pub text: String,
    pub position: Vec2,
}

/// A complete net diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetLayout {
    pub kind: ShapeKind,
    /// Diagram units per real unit
    pub scale: f64,
    /// False when the drawing only illustrates a surface with no true net
    pub exact: bool,
    pub faces: Vec<NetFace>,
    pub fold_edges: Vec<FoldEdge>,
    /// Illustrative lines (meridians, map graticule)
    pub guides: Vec<Vec<Vec2>>,
    pub labels: Vec<NetLabel>,
    pub note: Option<String>,
}

impl NetLayout {
    fn new(kind: ShapeKind, scale: f64) -> Self {
        Self {
            kind,
            scale,
            exact: true,
            faces: Vec::new(),
            fold_edges: Vec::new(),
            guides: Vec::new(),
            labels: Vec::new(),
            note: None,
        }
    }

    /// Add a face and return its index
    fn push_face(&mut self, face: NetFace) -> usize {
        self.faces.push(face);
        self.faces.len() - 1
    }

    fn push_fold(&mut self, a: usize, b: usize, path: Vec<Vec2>, real_length: f64) {
        self.fold_edges.push(FoldEdge { faces: [a, b], path, real_length });
    }

    fn push_label(&mut self, text: String, position: Vec2) {
        self.labels.push(NetLabel { text, position });
    }

    /// Convert a diagram length to real units
    #[inline]
    pub fn to_real(&self, diagram_length: f64) -> f64 {
        diagram_length / self.scale
    }

    /// Diagram distance of one real unit, for drawing a unit grid
    #[inline]
    pub fn grid_step(&self) -> f64 {
        self.scale
    }

    pub fn bounds(&self) -> Bounds2 {
        self.faces
            .iter()
            .fold(Bounds2::empty(), |acc, f| acc.merge(&f.bounds()))
    }

    /// Total face area converted back to real square units
    ///
    /// For exact nets this equals the solid's surface area.
    pub fn real_area(&self) -> f64 {
        self.faces.iter().map(NetFace::area).sum::<f64>() / (self.scale * self.scale)
    }

    /// Whether the fold edges connect every face into one piece
    pub fn is_connected(&self) -> bool {
        if self.faces.is_empty() {
            return false;
        }
        let mut seen = vec![false; self.faces.len()];
        let mut queue = VecDeque::from([0usize]);
        seen[0] = true;
        while let Some(face) = queue.pop_front() {
            for fold in &self.fold_edges {
                let other = match fold.faces {
                    [a, b] if a == face => b,
                    [a, b] if b == face => a,
                    _ => continue,
                };
                if !seen[other] {
                    seen[other] = true;
                    queue.push_back(other);
                }
            }
        }
        seen.iter().all(|&s| s)
    }
}

/// Compute the net of a shape
///
/// Fails with [`ShapeError::NetUndefined`] for the tesseract, which has no
/// unfolding in this engine; callers must handle that case explicitly.
pub fn compute_net(params: &ShapeParams) -> Result<NetLayout, ShapeError> {
    let net = match *params {
        ShapeParams::TriangularPrism { height, side1, side2 } => {
            polyhedral::triangular_prism(height, side1, side2)
        }
        ShapeParams::RectangularPrism { width, height, length } => polyhedral::box_cross(
            ShapeKind::RectangularPrism,
            RECTANGULAR_PRISM_SCALE,
            width,
            height,
            length,
        ),
        ShapeParams::Cube { size } => {
            polyhedral::box_cross(ShapeKind::Cube, CUBE_SCALE, size, size, size)
        }
        ShapeParams::Cylinder { radius, height, .. } => curved::cylinder(radius, height),
        ShapeParams::Cone { radius, height, .. } => curved::cone(radius, height),
        ShapeParams::Sphere { radius, .. } => curved::sphere(radius),
        ShapeParams::Tesseract { .. } => return Err(ShapeError::NetUndefined(ShapeKind::Tesseract)),
    };

    log::debug!(
        "Net for {}: {} faces, {} folds, scale {}",
        net.kind,
        net.faces.len(),
        net.fold_edges.len(),
        net.scale
    );

    Ok(net)
}

/// Format a real length for labels
pub fn units(value: f64) -> String {
    format!("{:.2} units", value)
}

fn rect_outline(origin: Vec2, width: f64, height: f64) -> Vec<Vec2> {
    vec![
        origin,
        origin + Vec2::new(width, 0.0),
        origin + Vec2::new(width, height),
        origin + Vec2::new(0.0, height),
    ]
}

/// Points along an arc, counter-clockwise from `start_deg`
///
/// With `closed_end` the final point at `start_deg + sweep_deg` is included;
/// full circles leave it out so the first point is not repeated.
fn arc_points(
    center: Vec2,
    radius: f64,
    start_deg: f64,
    sweep_deg: f64,
    samples: usize,
    closed_end: bool,
) -> Vec<Vec2> {
    let count = if closed_end { samples + 1 } else { samples };
    (0..count)
        .map(|i| {
            let angle = start_deg + sweep_deg * i as f64 / samples as f64;
            center + Vec2::from_angle_deg(angle) * radius
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::compute_metrics;

    fn exact_nets() -> Vec<ShapeParams> {
        vec![
            ShapeParams::triangular_prism(5.0, 3.0, 4.0),
            ShapeParams::rectangular_prism(4.0, 6.0, 3.0),
            ShapeParams::cube(3.0),
            ShapeParams::cylinder(2.0, 4.0),
            ShapeParams::cone(2.0, 5.0),
        ]
    }

    #[test]
    fn test_tesseract_has_no_net() {
        assert_eq!(
            compute_net(&ShapeParams::tesseract(2.0)),
            Err(ShapeError::NetUndefined(ShapeKind::Tesseract))
        );
    }

    #[test]
    fn test_exact_net_area_matches_surface_area() {
        for params in exact_nets() {
            let net = compute_net(&params).unwrap();
            let m = compute_metrics(&params);
            assert!(net.exact);
            assert!(
                (net.real_area() - m.surface_area).abs() < 1e-6 * m.surface_area,
                "{}: net area {} vs surface {}",
                params.kind(),
                net.real_area(),
                m.surface_area
            );
        }
    }

    #[test]
    fn test_exact_nets_are_connected() {
        for params in exact_nets() {
            assert!(compute_net(&params).unwrap().is_connected(), "{}", params.kind());
        }
    }

    #[test]
    fn test_faces_do_not_overlap() {
        for params in exact_nets() {
            let net = compute_net(&params).unwrap();
            for i in 0..net.faces.len() {
                for j in (i + 1)..net.faces.len() {
                    // Sector bounding boxes are loose; only check polygon/circle pairs
                    let skip = |f: &NetFace| matches!(f.shape, FaceShape::Sector { .. });
                    if skip(&net.faces[i]) || skip(&net.faces[j]) {
                        continue;
                    }
                    assert!(
                        !net.faces[i].bounds().overlaps(&net.faces[j].bounds()),
                        "{}: faces {} and {} overlap",
                        params.kind(),
                        net.faces[i].label,
                        net.faces[j].label
                    );
                }
            }
        }
    }

    #[test]
    fn test_outlines_are_counter_clockwise() {
        for params in exact_nets() {
            for face in compute_net(&params).unwrap().faces {
                assert!(signed_area(&face.outline) > 0.0, "{} is clockwise", face.label);
            }
        }
    }

    #[test]
    fn test_fold_indices_valid() {
        for params in exact_nets() {
            let net = compute_net(&params).unwrap();
            for fold in &net.fold_edges {
                assert!(fold.faces.iter().all(|&f| f < net.faces.len()));
                assert_ne!(fold.faces[0], fold.faces[1]);
                assert!(fold.path.len() >= 2);
            }
        }
    }

    #[test]
    fn test_to_real_inverts_scale() {
        let net = compute_net(&ShapeParams::cube(2.0)).unwrap();
        assert_eq!(net.to_real(60.0), 2.0);
        assert_eq!(net.grid_step(), CUBE_SCALE);
    }

    #[test]
    fn test_net_is_deterministic() {
        for params in exact_nets() {
            assert_eq!(compute_net(&params), compute_net(&params));
        }
    }

    #[test]
    fn test_arc_points_endpoints() {
        let pts = arc_points(Vec2::ZERO, 2.0, 0.0, 90.0, 4, true);
        assert_eq!(pts.len(), 5);
        assert!((pts[0] - Vec2::new(2.0, 0.0)).length() < 1e-12);
        assert!((pts[4] - Vec2::new(0.0, 2.0)).length() < 1e-12);
    }
}
