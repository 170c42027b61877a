//! Flat-faced solids: triangular prism and boxes

use geoview_math::Vec3;

use super::SolidGeometry;
use crate::kind::ShapeKind;

/// Right triangular prism
///
/// The right angle sits at the origin with leg `side1` along +X and leg
/// `side2` along +Z; the triangle is extruded `height` along +Y and the
/// result is moved so its centroid `(side1/3, height/2, side2/3)` is at the
/// origin.
pub(super) fn triangular_prism(height: f64, side1: f64, side2: f64) -> SolidGeometry {
    let mut g = SolidGeometry::new(ShapeKind::TriangularPrism);

    // 0..3 = bottom A, B, C; 3..6 = top A', B', C'
    for y in [0.0, height] {
        g.push_vertex(Vec3::from_f64(0.0, y, 0.0));
        g.push_vertex(Vec3::from_f64(side1, y, 0.0));
        g.push_vertex(Vec3::from_f64(0.0, y, side2));
    }

    g.push_triangle(0, 1, 2); // bottom, -Y
    g.push_triangle(3, 5, 4); // top, +Y
    g.push_quad(0, 3, 4, 1); // leg side1, -Z
    g.push_quad(1, 4, 5, 2); // hypotenuse
    g.push_quad(0, 2, 5, 3); // leg side2, -X

    g.push_edge_loop(0, 3);
    g.push_edge_loop(3, 3);
    for i in 0..3 {
        g.push_edge(i, i + 3);
    }

    g.recenter(Vec3::from_f64(side1 / 3.0, height / 2.0, side2 / 3.0));
    g
}

/// Axis-aligned box centred on the origin
pub(super) fn rectangular_prism(kind: ShapeKind, width: f64, height: f64, length: f64) -> SolidGeometry {
    let mut g = SolidGeometry::new(kind);
    push_box(&mut g, width / 2.0, height / 2.0, length / 2.0);
    g
}

/// Append a centred box with the given half extents
///
/// Vertex `base + i` uses binary indexing: bit 0 = x, bit 1 = y, bit 2 = z,
/// a set bit meaning the positive half extent. Returns `base`.
pub(super) fn push_box(g: &mut SolidGeometry, hx: f64, hy: f64, hz: f64) -> u32 {
    let base = g.vertices.len() as u32;
    for i in 0..8u32 {
        let sx = if i & 1 != 0 { hx } else { -hx };
        let sy = if i & 2 != 0 { hy } else { -hy };
        let sz = if i & 4 != 0 { hz } else { -hz };
        g.push_vertex(Vec3::from_f64(sx, sy, sz));
    }

    let quads = [
        [0, 4, 6, 2], // -X
        [1, 3, 7, 5], // +X
        [0, 1, 5, 4], // -Y
        [2, 6, 7, 3], // +Y
        [0, 2, 3, 1], // -Z
        [4, 5, 7, 6], // +Z
    ];
    for [a, b, c, d] in quads {
        g.push_quad(base + a, base + b, base + c, base + d);
    }

    // Box edges join corners differing in exactly one bit
    for i in 0u32..8 {
        for j in (i + 1)..8 {
            if (i ^ j).count_ones() == 1 {
                g.push_edge(base + i, base + j);
            }
        }
    }

    base
}
