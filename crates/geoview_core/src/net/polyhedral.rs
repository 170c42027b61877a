//! Nets of flat-faced solids

use geoview_math::Vec2;

use super::{units, NetFace, NetLayout, NET_GAP, TRIANGULAR_PRISM_SCALE};
use crate::kind::ShapeKind;

/// Lateral strip with both triangular bases hinged on the first rectangle
///
/// The strip follows the base boundary A→B→C→A, so the rectangles are
/// `side1` (AB), `side3` (BC, the hypotenuse) and `side2` (CA). The right
/// angle of each base triangle sits at A, the strip's left end.
pub(super) fn triangular_prism(height: f64, side1: f64, side2: f64) -> NetLayout {
    let s = TRIANGULAR_PRISM_SCALE;
    let g = NET_GAP;
    let side3 = side1.hypot(side2);
    let mut net = NetLayout::new(ShapeKind::TriangularPrism, s);

    let h = height * s;
    let widths = [side1 * s, side3 * s, side2 * s];
    let real_widths = [side1, side3, side2];
    let names = ["Side 1", "Side 3", "Side 2"];

    let mut x = 0.0;
    let mut strip = Vec::with_capacity(3);
    for i in 0..3 {
        let face = net.push_face(NetFace::rect(names[i], Vec2::new(x, 0.0), widths[i], h));
        net.push_label(
            format!("{} × {}", units(real_widths[i]), units(height)),
            Vec2::new(x + widths[i] / 2.0, h / 2.0),
        );
        strip.push((face, x));
        x += widths[i] + g;
    }

    // Vertical hinges between consecutive strip rectangles
    for pair in strip.windows(2) {
        let ((a, xa), (b, _)) = (pair[0], pair[1]);
        let right = xa + widths[a];
        net.push_fold(a, b, vec![Vec2::new(right, 0.0), Vec2::new(right, h)], height);
    }

    let a = widths[0];
    let c = side2 * s;
    let top = net.push_face(NetFace::polygon(
        "Top base",
        vec![Vec2::new(0.0, h + g), Vec2::new(a, h + g), Vec2::new(0.0, h + g + c)],
    ));
    let bottom = net.push_face(NetFace::polygon(
        "Bottom base",
        vec![Vec2::new(0.0, -g), Vec2::new(0.0, -g - c), Vec2::new(a, -g)],
    ));
    net.push_fold(strip[0].0, top, vec![Vec2::new(0.0, h), Vec2::new(a, h)], side1);
    net.push_fold(strip[0].0, bottom, vec![Vec2::new(0.0, 0.0), Vec2::new(a, 0.0)], side1);

    let base_text = format!("legs {} and {}", units(side1), units(side2));
    net.push_label(base_text.clone(), Vec2::new(a / 3.0, h + g + c / 3.0));
    net.push_label(base_text, Vec2::new(a / 3.0, -g - c / 3.0));

    net
}

/// Cross-shaped hexomino: Left, Front, Right, Back in a row, Top above and
/// Bottom below Front
///
/// Width runs along the row for Front/Back, length for Left/Right and
/// vertically for Top/Bottom.
pub(super) fn box_cross(kind: ShapeKind, scale: f64, width: f64, height: f64, length: f64) -> NetLayout {
    let g = NET_GAP;
    let mut net = NetLayout::new(kind, scale);

    let w = width * scale;
    let h = height * scale;
    let l = length * scale;

    let front_x = l + g;
    let right_x = front_x + w + g;
    let back_x = right_x + l + g;

    let top = net.push_face(NetFace::rect("Top", Vec2::new(front_x, h + g), w, l));
    let left = net.push_face(NetFace::rect("Left", Vec2::new(0.0, 0.0), l, h));
    let front = net.push_face(NetFace::rect("Front", Vec2::new(front_x, 0.0), w, h));
    let right = net.push_face(NetFace::rect("Right", Vec2::new(right_x, 0.0), l, h));
    let back = net.push_face(NetFace::rect("Back", Vec2::new(back_x, 0.0), w, h));
    let bottom = net.push_face(NetFace::rect("Bottom", Vec2::new(front_x, -g - l), w, l));

    let vertical = |x: f64| vec![Vec2::new(x, 0.0), Vec2::new(x, h)];
    net.push_fold(left, front, vertical(l), height);
    net.push_fold(front, right, vertical(front_x + w), height);
    net.push_fold(right, back, vertical(right_x + l), height);
    net.push_fold(front, top, vec![Vec2::new(front_x, h), Vec2::new(front_x + w, h)], width);
    net.push_fold(front, bottom, vec![Vec2::new(front_x, 0.0), Vec2::new(front_x + w, 0.0)], width);

    let face_labels = [
        (top, width, length),
        (left, length, height),
        (front, width, height),
        (right, length, height),
        (back, width, height),
        (bottom, width, length),
    ];
    for (face, a, b) in face_labels {
        let center = net.faces[face].bounds().center();
        net.push_label(format!("{} × {}", units(a), units(b)), center);
    }

    net
}
