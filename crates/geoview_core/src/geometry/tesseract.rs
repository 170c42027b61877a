//! Tesseract (4D hypercube) depiction
//!
//! A tesseract has 16 vertices, 32 edges, 24 square faces and 8 cubic cells.
//! This is NOT a 4D projection. It is the Schlegel-style picture: an outer
//! cube, an inner cube scaled by [`TESSERACT_INNER_RATIO`], and 8 edges
//! joining corresponding corners. The vertex and edge counts match the real
//! hypercube; the proportions do not.

use super::prism::push_box;
use super::SolidGeometry;
use crate::kind::ShapeKind;
use crate::params::TESSERACT_INNER_RATIO;

/// Outer cube at indices 0..8, inner cube at 8..16
///
/// Both cubes use the same binary corner indexing, so outer corner `i`
/// connects to inner corner `i + 8` (the bit that would be `w` on a real
/// hypercube).
pub(super) fn nested_cubes(size: f64) -> SolidGeometry {
    let mut g = SolidGeometry::new(ShapeKind::Tesseract);

    let h = size / 2.0;
    let inner_h = h * TESSERACT_INNER_RATIO;

    let outer = push_box(&mut g, h, h, h);
    let inner = push_box(&mut g, inner_h, inner_h, inner_h);

    for i in 0..8 {
        g.push_edge(outer + i, inner + i);
    }

    g
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tesseract_vertex_and_edge_count() {
        let g = nested_cubes(2.0);
        assert_eq!(g.vertex_count(), 16);
        assert_eq!(g.edge_count(), 32);
        assert_eq!(g.triangle_count(), 24);
    }

    #[test]
    fn test_inner_cube_scale() {
        let g = nested_cubes(10.0);
        assert_eq!(g.vertices[7].x, 5.0);
        assert!((g.vertices[15].x - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_connecting_edges_join_matching_corners() {
        let g = nested_cubes(2.0);
        for [a, b] in &g.edges[24..] {
            assert_eq!(*b, *a + 8);
            let outer = g.vertices[*a as usize];
            let inner = g.vertices[*b as usize];
            // Same direction from the centre, different distance
            let cos = outer.normalized().dot(inner.normalized());
            assert!((cos - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_every_vertex_has_degree_four() {
        let g = nested_cubes(2.0);
        let mut degree = [0u32; 16];
        for [a, b] in &g.edges {
            degree[*a as usize] += 1;
            degree[*b as usize] += 1;
        }
        assert!(degree.iter().all(|&d| d == 4));
    }
}
