//! Plain-text rendering of a derived shape
//!
//! [`TextReport`] is the command line's [`ShapeDisplay`]: metrics and view
//! extents. The remaining helpers format the parts a display never sees
//! (parameters, parse provenance and the net).

use std::fmt::Write;

use geoview_core::{
    MetricDetail, Metrics, NetLayout, ShapeDisplay, ShapeError, ShapeParams, SolidGeometry,
    ViewExtents,
};
use geoview_parse::{Ambiguity, FieldSource, KindSource, ParsedShape};

/// Text display of metrics and orthographic extents
#[derive(Debug, Clone, Copy)]
pub struct TextReport {
    /// Digits after the decimal point
    pub precision: usize,
}

impl Default for TextReport {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

impl TextReport {
    fn num(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }
}

impl ShapeDisplay for TextReport {
    type Output = String;

    fn display(&mut self, geometry: &SolidGeometry, metrics: &Metrics) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Metrics");
        let _ = writeln!(out, "  volume          {} units³", self.num(metrics.volume));
        let _ = writeln!(out, "  surface area    {} units²", self.num(metrics.surface_area));
        if let Some(lateral) = metrics.lateral_area {
            let _ = writeln!(out, "  lateral area    {} units²", self.num(lateral));
        }
        if let Some(base) = metrics.base_area {
            let _ = writeln!(out, "  base area       {} units²", self.num(base));
        }
        let _ = writeln!(
            out,
            "  faces/edges/vertices  {} / {} / {}",
            metrics.faces, metrics.edges, metrics.vertices
        );
        for (name, value) in detail_lines(&metrics.detail) {
            let _ = writeln!(out, "  {:<15} {}", name, self.num(value));
        }

        let _ = writeln!(out, "Views");
        for extent in ViewExtents.display(geometry, metrics) {
            let _ = writeln!(
                out,
                "  {:<6} {} × {}  (silhouette {} units²)",
                extent.view.name(),
                self.num(extent.width),
                self.num(extent.height),
                self.num(extent.silhouette_area)
            );
        }
        let _ = writeln!(
            out,
            "  mesh: {} vertices, {} triangles, {} edges",
            geometry.vertex_count(),
            geometry.triangle_count(),
            geometry.edge_count()
        );
        out
    }
}

fn detail_lines(detail: &MetricDetail) -> Vec<(&'static str, f64)> {
    match *detail {
        MetricDetail::TriangularPrism { side3, perimeter } => {
            vec![("hypotenuse", side3), ("base perimeter", perimeter)]
        }
        MetricDetail::Box { space_diagonal, face_diagonal } => {
            let mut lines = vec![("space diagonal", space_diagonal)];
            if let Some(d) = face_diagonal {
                lines.push(("face diagonal", d));
            }
            lines
        }
        MetricDetail::Cylinder { base_circumference } => vec![("circumference", base_circumference)],
        MetricDetail::Cone { slant_height, apex_angle_deg, sector_angle_deg } => vec![
            ("slant height", slant_height),
            ("apex angle °", apex_angle_deg),
            ("net sector °", sector_angle_deg),
        ],
        MetricDetail::Sphere { diameter, great_circle_area, great_circle_circumference } => vec![
            ("diameter", diameter),
            ("great circle", great_circle_area),
            ("circumference", great_circle_circumference),
        ],
        MetricDetail::Tesseract { inner_size, cells, hypervolume } => vec![
            ("inner cube", inner_size),
            ("cells", cells as f64),
            ("hypervolume", hypervolume),
        ],
    }
}

/// Heading and one line per dimension
pub fn describe_params(params: &ShapeParams, parsed: Option<&ParsedShape>) -> String {
    let mut out = String::new();
    let _ = write!(out, "{}", params.kind().display_name());
    if let Some(parsed) = parsed {
        let source = match parsed.kind_source {
            KindSource::Keyword => "named".to_string(),
            KindSource::Inferred(cue) => format!("inferred from '{}'", cue),
            KindSource::NumberCount(n) => format!("guessed from {} numbers", n),
        };
        let _ = write!(out, " ({})", source);
    }
    let _ = writeln!(out);

    for dim in params.dimensions() {
        let _ = write!(out, "  {:<8} {:.2} units", dim.field, dim.value);
        if let Some(source) = parsed.and_then(|p| p.source_of(dim.field)) {
            let text = match source {
                FieldSource::Labelled => "labelled",
                FieldSource::Positional => "by position",
                FieldSource::Derived => "from diameter",
            };
            let _ = write!(out, "  [{}]", text);
        }
        let _ = writeln!(out);
    }
    for (field, value) in params.segments() {
        let _ = writeln!(out, "  {:<8} {}", field, value);
    }
    out
}

/// One line per ambiguity, empty when the reading was clear
pub fn describe_ambiguities(parsed: &ParsedShape) -> String {
    let mut out = String::new();
    for ambiguity in &parsed.ambiguities {
        let line = match ambiguity {
            Ambiguity::PositionalFallback { field, value } => {
                format!("{} = {} was taken by position", field, value)
            }
            Ambiguity::PositionalReuse { field, value, labelled_as } => {
                format!("{} = {} reuses the number labelled as {}", field, value, labelled_as)
            }
            Ambiguity::KindFromNumberCount(n) => format!("shape guessed from {} numbers", n),
            Ambiguity::KindInferred { cue } => format!("shape inferred from '{}'", cue),
            Ambiguity::UnusedNumbers(values) => {
                let list: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                format!("ignored numbers: {}", list.join(", "))
            }
        };
        let _ = writeln!(out, "  note: {}", line);
    }
    out
}

/// Summary of the unfolded net
pub fn describe_net(net: &Result<NetLayout, ShapeError>) -> String {
    let mut out = String::from("Net\n");
    match net {
        Ok(net) => {
            let bounds = net.bounds();
            let _ = writeln!(
                out,
                "  {} faces, {} folds, {:.0} px per unit, {:.0} × {:.0} px",
                net.faces.len(),
                net.fold_edges.len(),
                net.scale,
                bounds.width(),
                bounds.height()
            );
            for face in &net.faces {
                let _ = writeln!(out, "  - {}", face.label);
            }
            if let Some(note) = &net.note {
                let _ = writeln!(out, "  {}", note);
            }
        }
        Err(e) => {
            let _ = writeln!(out, "  {}", e);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoview_core::{compute_metrics, compute_net, generate_solid};
    use geoview_parse::parse_description;

    #[test]
    fn test_text_report_for_cylinder() {
        let params = ShapeParams::cylinder(2.0, 4.0);
        let text = TextReport::default().display(&generate_solid(&params), &compute_metrics(&params));
        assert!(text.contains("volume          50.27 units³"));
        assert!(text.contains("surface area    75.40 units²"));
        assert!(text.contains("front  4.00 × 4.00"));
    }

    #[test]
    fn test_params_show_provenance() {
        let parsed = parse_description("9 4 3").unwrap();
        let text = describe_params(&parsed.params, Some(&parsed));
        assert!(text.starts_with("Rectangular Prism (guessed from 3 numbers)"));
        assert!(text.contains("height   9.00 units  [by position]"));
        assert!(describe_ambiguities(&parsed).contains("height = 9 was taken by position"));
    }

    #[test]
    fn test_net_summary() {
        let cube = describe_net(&compute_net(&ShapeParams::cube(2.0)));
        assert!(cube.contains("6 faces, 5 folds"));
        let tesseract = describe_net(&compute_net(&ShapeParams::tesseract(2.0)));
        assert!(tesseract.contains("No net is defined for"));
    }
}
