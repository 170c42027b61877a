//! Nets of solids of revolution

use geoview_math::Vec2;
use std::f64::consts::PI;

use super::{arc_points, rect_outline, units, NetFace, NetLayout, CURVE_SAMPLES, NET_GAP, REVOLUTION_SCALE};
use crate::kind::ShapeKind;
use crate::metrics::cone_sector_angle_deg;

/// Meridians drawn on the sphere's globe illustration
const GLOBE_MERIDIANS: usize = 6;

/// Graticule divisions on the sphere's map rectangle
const MAP_COLUMNS: usize = 12;
const MAP_ROWS: usize = 6;

/// Rectangle of width `2πr` between the two circular bases
///
/// Circle radius and rectangle width use the same scale, so the unrolled
/// side exactly wraps the rims.
pub(super) fn cylinder(radius: f64, height: f64) -> NetLayout {
    let s = REVOLUTION_SCALE;
    let g = NET_GAP;
    let mut net = NetLayout::new(ShapeKind::Cylinder, s);

    let r = radius * s;
    let h = height * s;
    let circumference = 2.0 * PI * radius;
    let c = circumference * s;

    let top = net.push_face(NetFace::circle("Top", Vec2::new(c / 2.0, h + g + r), r));
    let side = net.push_face(NetFace::rect("Curved surface", Vec2::ZERO, c, h));
    let bottom = net.push_face(NetFace::circle("Bottom", Vec2::new(c / 2.0, -g - r), r));

    net.push_fold(side, top, vec![Vec2::new(0.0, h), Vec2::new(c, h)], circumference);
    net.push_fold(side, bottom, vec![Vec2::ZERO, Vec2::new(c, 0.0)], circumference);

    net.push_label(format!("r = {}", units(radius)), Vec2::new(c / 2.0, h + g + r));
    net.push_label(format!("r = {}", units(radius)), Vec2::new(c / 2.0, -g - r));
    net.push_label(
        format!("{} (2πr) × {}", units(circumference), units(height)),
        Vec2::new(c / 2.0, h / 2.0),
    );

    net
}

/// Sector of radius `slant` and sweep `360·r/slant` above the base circle
///
/// The sector's apex is at the origin and its arc is centred on straight
/// down, with the base circle tangent below the arc's midpoint.
pub(super) fn cone(radius: f64, height: f64) -> NetLayout {
    let s = REVOLUTION_SCALE;
    let g = NET_GAP;
    let mut net = NetLayout::new(ShapeKind::Cone, s);

    let slant = radius.hypot(height);
    let sweep = cone_sector_angle_deg(radius, height);
    let start = 270.0 - sweep / 2.0;
    let l = slant * s;
    let r = radius * s;

    let sector = net.push_face(NetFace::sector("Curved surface", Vec2::ZERO, l, start, sweep));
    let base_center = Vec2::new(0.0, -l - g - r);
    let base = net.push_face(NetFace::circle("Base", base_center, r));

    let arc = arc_points(Vec2::ZERO, l, start, sweep, CURVE_SAMPLES, true);
    net.push_fold(sector, base, arc, 2.0 * PI * radius);

    net.push_label(format!("slant = {}", units(slant)), Vec2::new(0.0, -l / 2.0));
    net.push_label(format!("sector {:.2}°", sweep), Vec2::new(0.0, -l / 4.0));
    net.push_label(format!("r = {}", units(radius)), base_center);

    net
}

/// Illustration only: a sphere has no flat net
///
/// Produces a globe with meridians and latitude lines plus an
/// equirectangular map rectangle of width `2πr` and height `πr`. Both are
/// marked as approximations (`exact == false`) and have no fold edges.
pub(super) fn sphere(radius: f64) -> NetLayout {
    let s = REVOLUTION_SCALE;
    let g = NET_GAP;
    let mut net = NetLayout::new(ShapeKind::Sphere, s);
    net.exact = false;
    net.note = Some(
        "A sphere cannot be flattened without distortion; these drawings are illustrations, not a net"
            .to_string(),
    );

    let r = radius * s;
    net.push_face(NetFace::circle("Globe (illustrative)", Vec2::ZERO, r));

    // Meridians seen from the front are ellipses with a shrinking x axis
    for k in 0..GLOBE_MERIDIANS {
        let longitude = PI * k as f64 / GLOBE_MERIDIANS as f64;
        let semi_x = r * longitude.cos();
        let meridian = (0..=CURVE_SAMPLES)
            .map(|i| {
                let t = 2.0 * PI * i as f64 / CURVE_SAMPLES as f64;
                Vec2::new(semi_x * t.sin(), r * t.cos())
            })
            .collect();
        net.guides.push(meridian);
    }
    for latitude_deg in [-45.0f64, 0.0, 45.0] {
        let lat = latitude_deg.to_radians();
        let y = r * lat.sin();
        let half = r * lat.cos();
        net.guides.push(vec![Vec2::new(-half, y), Vec2::new(half, y)]);
    }

    let circumference = 2.0 * PI * radius;
    let map_w = circumference * s;
    let map_h = PI * radius * s;
    let origin = Vec2::new(r + g, -map_h / 2.0);
    net.push_face(NetFace::polygon(
        "Map projection (approximate)",
        rect_outline(origin, map_w, map_h),
    ));
    for col in 1..MAP_COLUMNS {
        let x = origin.x + map_w * col as f64 / MAP_COLUMNS as f64;
        net.guides.push(vec![Vec2::new(x, origin.y), Vec2::new(x, origin.y + map_h)]);
    }
    for row in 1..MAP_ROWS {
        let y = origin.y + map_h * row as f64 / MAP_ROWS as f64;
        net.guides.push(vec![Vec2::new(origin.x, y), Vec2::new(origin.x + map_w, y)]);
    }

    net.push_label(format!("r = {}", units(radius)), Vec2::ZERO);
    net.push_label(
        format!("{} (2πr) × {} (πr), approximate", units(circumference), units(PI * radius)),
        Vec2::new(origin.x + map_w / 2.0, 0.0),
    );

    net
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::compute_metrics;
    use crate::net::FaceShape;
    use crate::params::ShapeParams;

    #[test]
    fn test_cylinder_rectangle_width_is_circumference() {
        let net = cylinder(2.0, 4.0);
        let rect = net.faces[1].bounds();
        let circle_radius = match net.faces[0].shape {
            FaceShape::Circle { radius, .. } => radius,
            ref other => panic!("Expected circle, got {:?}", other),
        };
        assert!((rect.width() - 2.0 * PI * circle_radius).abs() < 1e-9);
        assert!((net.to_real(rect.width()) - 4.0 * PI).abs() < 1e-9);
        assert!((net.to_real(rect.height()) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_cone_sector_matches_metrics() {
        let net = cone(3.0, 4.0);
        let metrics = compute_metrics(&ShapeParams::cone(3.0, 4.0));
        match net.faces[0].shape {
            FaceShape::Sector { radius, sweep_deg, .. } => {
                assert_eq!(sweep_deg, metrics.sector_angle_deg().unwrap());
                assert!((net.to_real(radius) - 5.0).abs() < 1e-9);
            }
            ref other => panic!("Expected sector, got {:?}", other),
        }
    }

    #[test]
    fn test_cone_arc_length_is_base_circumference() {
        let net = cone(2.0, 5.0);
        let fold = &net.fold_edges[0];
        let drawn: f64 = fold.path.windows(2).map(|w| w[0].distance(w[1])).sum();
        // Sampled polyline is slightly shorter than the true arc
        assert!((net.to_real(drawn) - fold.real_length).abs() < 1e-2);
        assert!((fold.real_length - 4.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_cone_base_clears_sector() {
        let net = cone(2.0, 5.0);
        assert!(!net.faces[0].bounds().overlaps(&net.faces[1].bounds()));
    }

    #[test]
    fn test_sphere_is_marked_approximate() {
        let net = sphere(2.0);
        assert!(!net.exact);
        assert!(net.note.is_some());
        assert!(net.fold_edges.is_empty());
        assert!(net.faces.iter().all(|f| !f.label.is_empty()));
        assert!(net.faces[1].label.contains("approximate"));
    }

    #[test]
    fn test_sphere_map_width_is_great_circle() {
        let net = sphere(2.0);
        let map = net.faces[1].bounds();
        assert!((net.to_real(map.width()) - 4.0 * PI).abs() < 1e-9);
        assert!((net.to_real(map.height()) - 2.0 * PI).abs() < 1e-9);
        assert!(!net.faces[0].bounds().overlaps(&map));
    }
}
