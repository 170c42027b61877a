//! Orthographic projections
//!
//! Each view flattens an already generated [`SolidGeometry`] by dropping one
//! axis. Nothing is re-derived per view, so the four projections are always
//! consistent with the 3D solid and no view code looks at the shape kind.
//!
//! Screen axes (right, up) per view:
//! - `Top`:   ( x, -z) seen from +Y, front of the solid at the bottom
//! - `Front`: ( x,  y) seen from +Z
//! - `Right`: (-z,  y) seen from +X
//! - `Left`:  ( z,  y) seen from -X

use serde::{Serialize, Deserialize};
use geoview_math::{convex_hull, signed_area, Bounds2, Vec2, Vec3};

use super::SolidGeometry;

/// One of the four orthographic directions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Top,
    Front,
    Left,
    Right,
}

impl View {
    pub const ALL: [View; 4] = [View::Top, View::Front, View::Left, View::Right];

    /// Flatten a point onto this view's screen plane
    #[inline]
    pub fn flatten(self, v: Vec3) -> Vec2 {
        let (x, y, z) = (v.x as f64, v.y as f64, v.z as f64);
        match self {
            View::Top => Vec2::new(x, -z),
            View::Front => Vec2::new(x, y),
            View::Right => Vec2::new(-z, y),
            View::Left => Vec2::new(z, y),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            View::Top => "top",
            View::Front => "front",
            View::Left => "left",
            View::Right => "right",
        }
    }
}

/// A solid flattened onto one view plane
///
/// Indices refer to `points` and match the source geometry one to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection2D {
    pub view: View,
    pub points: Vec<Vec2>,
    pub triangles: Vec<[u32; 3]>,
    pub edges: Vec<[u32; 2]>,
}

impl Projection2D {
    pub fn bounds(&self) -> Bounds2 {
        Bounds2::from_points(&self.points)
    }

    /// Outline of the projected solid, counter-clockwise
    ///
    /// Every supported solid is convex, so the silhouette is the convex
    /// hull of the projected vertices.
    pub fn silhouette(&self) -> Vec<Vec2> {
        convex_hull(&self.points)
    }

    /// Area enclosed by the silhouette
    pub fn silhouette_area(&self) -> f64 {
        signed_area(&self.silhouette())
    }

    /// Endpoints of every projected feature edge
    pub fn edge_segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.edges
            .iter()
            .map(|[a, b]| (self.points[*a as usize], self.points[*b as usize]))
    }
}

/// Project a solid onto one view
pub fn project(geometry: &SolidGeometry, view: View) -> Projection2D {
    Projection2D {
        view,
        points: geometry.vertices.iter().map(|v| view.flatten(*v)).collect(),
        triangles: geometry.triangles.clone(),
        edges: geometry.edges.clone(),
    }
}

/// Plan view (drops Y)
pub fn project_top(geometry: &SolidGeometry) -> Projection2D {
    project(geometry, View::Top)
}

/// Elevation (drops Z)
pub fn project_front(geometry: &SolidGeometry) -> Projection2D {
    project(geometry, View::Front)
}

/// Right side elevation (drops X)
pub fn project_side(geometry: &SolidGeometry) -> Projection2D {
    project(geometry, View::Right)
}

/// Top, front, left and right, in that order
pub fn project_all(geometry: &SolidGeometry) -> [Projection2D; 4] {
    View::ALL.map(|view| project(geometry, view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::generate_solid;
    use crate::params::ShapeParams;

    fn extent(p: &Projection2D) -> (f64, f64) {
        let b = p.bounds();
        (b.width(), b.height())
    }

    #[test]
    fn test_box_views_drop_one_axis() {
        let g = generate_solid(&ShapeParams::rectangular_prism(4.0, 6.0, 3.0));
        assert_eq!(extent(&project_top(&g)), (4.0, 3.0));
        assert_eq!(extent(&project_front(&g)), (4.0, 6.0));
        assert_eq!(extent(&project_side(&g)), (3.0, 6.0));
        assert_eq!(extent(&project(&g, View::Left)), (3.0, 6.0));
    }

    #[test]
    fn test_box_silhouettes_are_rectangles() {
        let g = generate_solid(&ShapeParams::rectangular_prism(4.0, 6.0, 3.0));
        let [top, front, left, right] = project_all(&g);
        assert!((top.silhouette_area() - 12.0).abs() < 1e-6);
        assert!((front.silhouette_area() - 24.0).abs() < 1e-6);
        assert!((left.silhouette_area() - 18.0).abs() < 1e-6);
        assert!((right.silhouette_area() - 18.0).abs() < 1e-6);
        assert_eq!(top.silhouette().len(), 4);
    }

    #[test]
    fn test_cylinder_top_is_circle_front_is_rectangle() {
        let g = generate_solid(&ShapeParams::cylinder(2.0, 4.0).with_segments(64, 0));
        let top = project_top(&g);
        let front = project_front(&g);
        assert_eq!(top.silhouette().len(), 64);
        assert!((front.silhouette_area() - 16.0).abs() < 1e-4);
        for p in top.silhouette() {
            assert!((p.length() - 2.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_triangular_prism_top_view_is_right_triangle() {
        let g = generate_solid(&ShapeParams::triangular_prism(5.0, 3.0, 4.0));
        let top = project_top(&g);
        assert_eq!(top.silhouette().len(), 3);
        assert!((top.silhouette_area() - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_left_and_right_are_mirror_images() {
        let g = generate_solid(&ShapeParams::triangular_prism(5.0, 3.0, 4.0));
        let left = project(&g, View::Left);
        let right = project(&g, View::Right);
        for (l, r) in left.points.iter().zip(&right.points) {
            assert_eq!(l.x, -r.x);
            assert_eq!(l.y, r.y);
        }
    }

    #[test]
    fn test_projection_keeps_topology() {
        let g = generate_solid(&ShapeParams::tesseract(2.0));
        let p = project_front(&g);
        assert_eq!(p.points.len(), g.vertex_count());
        assert_eq!(p.edges, g.edges);
        assert_eq!(p.edge_segments().count(), 32);
    }
}
