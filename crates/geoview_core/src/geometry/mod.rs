//! Solid geometry generation
//!
//! [`generate_solid`] turns validated [`ShapeParams`] into an indexed
//! triangle mesh plus a list of feature edges. It is a pure function: no
//! state is kept between calls, and the same parameters always produce the
//! same mesh.
//!
//! Conventions shared by every generator:
//! - Y is up, solids are centred on the origin
//! - triangles wind counter-clockwise seen from outside (normals point out)
//! - `edges` are the edges a viewer would draw as lines (true polyhedral
//!   edges, circular rims, the tesseract's 32 edges), not every triangle edge

mod prism;
mod revolution;
mod tesseract;
pub mod projection;

use serde::{Serialize, Deserialize};
use geoview_math::{Bounds3, Vec3};

use crate::error::ShapeError;
use crate::kind::ShapeKind;
use crate::params::ShapeParams;

pub use projection::{project, project_all, project_front, project_side, project_top, Projection2D, View};

/// Boundary representation of a solid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolidGeometry {
    pub kind: ShapeKind,
    /// Vertex positions
    pub vertices: Vec<Vec3>,
    /// Triangles as indices into `vertices`
    pub triangles: Vec<[u32; 3]>,
    /// Feature edges as index pairs into `vertices`
    pub edges: Vec<[u32; 2]>,
}

impl SolidGeometry {
    fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            vertices: Vec::new(),
            triangles: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Append a vertex, returning its index
    fn push_vertex(&mut self, v: Vec3) -> u32 {
        self.vertices.push(v);
        (self.vertices.len() - 1) as u32
    }

    fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.triangles.push([a, b, c]);
    }

    /// Append a planar quad given counter-clockwise from outside
    fn push_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.triangles.push([a, b, c]);
        self.triangles.push([a, c, d]);
    }

    fn push_edge(&mut self, a: u32, b: u32) {
        self.edges.push([a, b]);
    }

    /// Edges closing a ring of consecutive vertex indices
    fn push_edge_loop(&mut self, first: u32, count: u32) {
        for i in 0..count {
            self.push_edge(first + i, first + (i + 1) % count);
        }
    }

    /// Shift every vertex by `-offset`
    fn recenter(&mut self, offset: Vec3) {
        for v in &mut self.vertices {
            *v -= offset;
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn bounds(&self) -> Bounds3 {
        Bounds3::from_points(&self.vertices)
    }

    /// Enclosed volume of the triangle mesh (divergence theorem)
    ///
    /// Equals the analytic volume for flat solids and approaches it from
    /// below for tessellated curved solids.
    pub fn mesh_volume(&self) -> f64 {
        let sum: f64 = self
            .triangles
            .iter()
            .map(|t| {
                let [a, b, c] = self.corners(t);
                a[0] * (b[1] * c[2] - b[2] * c[1]) - a[1] * (b[0] * c[2] - b[2] * c[0])
                    + a[2] * (b[0] * c[1] - b[1] * c[0])
            })
            .sum();
        sum / 6.0
    }

    /// Total triangle area
    pub fn mesh_surface_area(&self) -> f64 {
        self.triangles
            .iter()
            .map(|t| {
                let [a, b, c] = self.corners(t);
                let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
                let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
                let n = [
                    u[1] * v[2] - u[2] * v[1],
                    u[2] * v[0] - u[0] * v[2],
                    u[0] * v[1] - u[1] * v[0],
                ];
                0.5 * (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt()
            })
            .sum()
    }

    fn corners(&self, t: &[u32; 3]) -> [[f64; 3]; 3] {
        [
            self.vertices[t[0] as usize].to_f64(),
            self.vertices[t[1] as usize].to_f64(),
            self.vertices[t[2] as usize].to_f64(),
        ]
    }
}

/// Build the mesh for a shape
///
/// Expects validated parameters (see [`ShapeParams::validate`]).
pub fn generate_solid(params: &ShapeParams) -> SolidGeometry {
    let geometry = match *params {
        ShapeParams::TriangularPrism { height, side1, side2 } => {
            prism::triangular_prism(height, side1, side2)
        }
        ShapeParams::RectangularPrism { width, height, length } => {
            prism::rectangular_prism(ShapeKind::RectangularPrism, width, height, length)
        }
        ShapeParams::Cube { size } => prism::rectangular_prism(ShapeKind::Cube, size, size, size),
        ShapeParams::Cylinder { radius, height, radial_segments } => {
            revolution::cylinder(radius, height, radial_segments)
        }
        ShapeParams::Cone { radius, height, radial_segments } => {
            revolution::cone(radius, height, radial_segments)
        }
        ShapeParams::Sphere { radius, width_segments, height_segments } => {
            revolution::sphere(radius, width_segments, height_segments)
        }
        ShapeParams::Tesseract { size } => tesseract::nested_cubes(size),
    };

    log::debug!(
        "Generated {}: {} vertices, {} triangles, {} edges",
        geometry.kind,
        geometry.vertex_count(),
        geometry.triangle_count(),
        geometry.edge_count()
    );

    geometry
}

/// Build the mesh for a shape named by string
///
/// The name must be one of the supported kinds and agree with the parameter
/// variant; an unknown name fails with [`ShapeError::UnsupportedShapeKind`]
/// rather than falling back to some default solid.
pub fn generate_solid_named(kind: &str, params: &ShapeParams) -> Result<SolidGeometry, ShapeError> {
    let kind: ShapeKind = kind.parse()?;
    if kind != params.kind() {
        return Err(ShapeError::KindMismatch { expected: kind, found: params.kind() });
    }
    Ok(generate_solid(params))
}
