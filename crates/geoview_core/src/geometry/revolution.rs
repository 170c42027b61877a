//! Solids of revolution around the Y axis
//!
//! Rim points use `x = r sin(theta)`, `z = r cos(theta)` so that increasing
//! theta walks counter-clockwise seen from +Y. Rings never duplicate a seam
//! vertex; the closing triangle wraps to index 0 of the ring.

use std::f64::consts::{PI, TAU};

use geoview_math::Vec3;

use super::SolidGeometry;
use crate::kind::ShapeKind;

/// Append `segments` rim vertices of radius `radius` at height `y`
fn push_ring(g: &mut SolidGeometry, radius: f64, y: f64, segments: u32) -> u32 {
    let first = g.vertices.len() as u32;
    for i in 0..segments {
        let theta = TAU * i as f64 / segments as f64;
        g.push_vertex(Vec3::from_f64(radius * theta.sin(), y, radius * theta.cos()));
    }
    first
}

/// Fan a ring to a centre vertex below it (cap facing -Y)
fn push_bottom_cap(g: &mut SolidGeometry, ring: u32, segments: u32, center: u32) {
    for i in 0..segments {
        let next = (i + 1) % segments;
        g.push_triangle(center, ring + next, ring + i);
    }
}

/// Fan a ring to a vertex above it (flat cap, cone apex or sphere pole)
fn push_top_fan(g: &mut SolidGeometry, ring: u32, segments: u32, tip: u32) {
    for i in 0..segments {
        let next = (i + 1) % segments;
        g.push_triangle(ring + i, ring + next, tip);
    }
}

/// Quads between a lower and an upper ring of equal size
fn push_band(g: &mut SolidGeometry, lower: u32, upper: u32, segments: u32) {
    for i in 0..segments {
        let next = (i + 1) % segments;
        g.push_quad(lower + i, lower + next, upper + next, upper + i);
    }
}

pub(super) fn cylinder(radius: f64, height: f64, segments: u32) -> SolidGeometry {
    let mut g = SolidGeometry::new(ShapeKind::Cylinder);
    let half = height / 2.0;

    let bottom = push_ring(&mut g, radius, -half, segments);
    let top = push_ring(&mut g, radius, half, segments);
    let bottom_center = g.push_vertex(Vec3::from_f64(0.0, -half, 0.0));
    let top_center = g.push_vertex(Vec3::from_f64(0.0, half, 0.0));

    push_band(&mut g, bottom, top, segments);
    push_bottom_cap(&mut g, bottom, segments, bottom_center);
    push_top_fan(&mut g, top, segments, top_center);

    g.push_edge_loop(bottom, segments);
    g.push_edge_loop(top, segments);
    g
}

pub(super) fn cone(radius: f64, height: f64, segments: u32) -> SolidGeometry {
    let mut g = SolidGeometry::new(ShapeKind::Cone);
    let half = height / 2.0;

    let rim = push_ring(&mut g, radius, -half, segments);
    let apex = g.push_vertex(Vec3::from_f64(0.0, half, 0.0));
    let base_center = g.push_vertex(Vec3::from_f64(0.0, -half, 0.0));

    push_top_fan(&mut g, rim, segments, apex);
    push_bottom_cap(&mut g, rim, segments, base_center);

    g.push_edge_loop(rim, segments);
    g
}

/// UV sphere with poles on the Y axis
///
/// `height_segments` latitude bands give `height_segments - 1` rings of
/// `width_segments` vertices between the two poles.
pub(super) fn sphere(radius: f64, width_segments: u32, height_segments: u32) -> SolidGeometry {
    let mut g = SolidGeometry::new(ShapeKind::Sphere);

    let north = g.push_vertex(Vec3::from_f64(0.0, radius, 0.0));
    let rings: Vec<u32> = (1..height_segments)
        .map(|j| {
            let phi = PI * j as f64 / height_segments as f64;
            push_ring(&mut g, radius * phi.sin(), radius * phi.cos(), width_segments)
        })
        .collect();
    let south = g.push_vertex(Vec3::from_f64(0.0, -radius, 0.0));

    if let (Some(&first), Some(&last)) = (rings.first(), rings.last()) {
        push_top_fan(&mut g, first, width_segments, north);
        for pair in rings.windows(2) {
            // rings run north to south, so the later ring is the lower one
            push_band(&mut g, pair[1], pair[0], width_segments);
        }
        push_bottom_cap(&mut g, last, width_segments, south);
    }

    g
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cylinder_counts() {
        let g = cylinder(1.0, 2.0, 12);
        assert_eq!(g.vertex_count(), 2 * 12 + 2);
        assert_eq!(g.triangle_count(), 4 * 12);
        assert_eq!(g.edge_count(), 2 * 12);
    }

    #[test]
    fn test_cone_counts_and_apex() {
        let g = cone(1.0, 3.0, 10);
        assert_eq!(g.vertex_count(), 12);
        assert_eq!(g.triangle_count(), 20);
        assert_eq!(g.vertices[10], Vec3::new(0.0, 1.5, 0.0));
    }

    #[test]
    fn test_sphere_counts() {
        let g = sphere(1.0, 8, 4);
        assert_eq!(g.vertex_count(), 2 + 3 * 8);
        assert_eq!(g.triangle_count(), 2 * 8 + 2 * 2 * 8);
        assert!(g.edges.is_empty());
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let g = sphere(2.0, 16, 8);
        for v in &g.vertices {
            assert!((v.length() - 2.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_rims_have_radius() {
        let g = cylinder(3.0, 1.0, 7);
        for v in &g.vertices[..14] {
            assert!(((v.x * v.x + v.z * v.z).sqrt() - 3.0).abs() < 1e-5);
        }
    }
}
