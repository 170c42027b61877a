//! Description parser
//!
//! Turns free text such as `"Cylinder 4 units high with radius 2"` into
//! [`ShapeParams`]. The rules run in a fixed priority order:
//!
//! 1. kind keywords (`cube`, `cylinder`, ...)
//! 2. inference cues (`pointed`, `round`, `equal sides`, ...)
//! 3. labelled numbers (`height of 4`, `3 wide`, `diameter 6`, ...)
//! 4. positional fallback: the i-th number in the text fills the kind's
//!    i-th field
//! 5. a kind guessed from how many numbers there are
//!
//! Heuristic decisions are never hidden. Every fallback that could have
//! picked a different reading is recorded as an [`Ambiguity`].

use serde::Serialize;
use std::ops::Range;

use geoview_core::{
    ShapeKind, ShapeParams, DEFAULT_HEIGHT_SEGMENTS, DEFAULT_RADIAL_SEGMENTS, DEFAULT_WIDTH_SEGMENTS,
    MAX_DIMENSION,
};

use crate::error::ParseError;
use crate::patterns::*;

/// Tessellation counts given to curved solids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParserOptions {
    pub radial_segments: u32,
    pub width_segments: u32,
    pub height_segments: u32,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            radial_segments: DEFAULT_RADIAL_SEGMENTS,
            width_segments: DEFAULT_WIDTH_SEGMENTS,
            height_segments: DEFAULT_HEIGHT_SEGMENTS,
        }
    }
}

/// How the kind was decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KindSource {
    /// Named directly
    Keyword,
    /// Inferred from a descriptive cue
    Inferred(&'static str),
    /// Guessed from the number of numbers
    NumberCount(usize),
}

/// Where a field's value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldSource {
    /// Attached to a label such as `height` or `wide`
    Labelled,
    /// Taken by position from the list of numbers
    Positional,
    /// Computed from another label (a radius from a diameter)
    Derived,
}

/// A reading that could reasonably have gone another way
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Ambiguity {
    /// A field was filled by position rather than by label
    PositionalFallback { field: &'static str, value: f64 },
    /// The positional number was already claimed by a label for another field
    PositionalReuse { field: &'static str, value: f64, labelled_as: &'static str },
    /// The kind was guessed from the count of numbers
    KindFromNumberCount(usize),
    /// The kind was inferred from a cue, not named
    KindInferred { cue: &'static str },
    /// Numbers that no field used
    UnusedNumbers(Vec<f64>),
}

/// Result of a successful parse
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedShape {
    pub params: ShapeParams,
    pub kind_source: KindSource,
    /// Source of each dimension, in the kind's field order
    pub fields: Vec<(&'static str, FieldSource)>,
    pub ambiguities: Vec<Ambiguity>,
}

impl ParsedShape {
    pub fn kind(&self) -> ShapeKind {
        self.params.kind()
    }

    pub fn source_of(&self, field: &str) -> Option<FieldSource> {
        self.fields.iter().find(|(f, _)| *f == field).map(|(_, s)| *s)
    }

    pub fn is_ambiguous(&self) -> bool {
        !self.ambiguities.is_empty()
    }
}

/// A number found in the text
#[derive(Debug, Clone)]
struct Number {
    value: f64,
    span: Range<usize>,
}

/// A field value and the span of the number it came from
#[derive(Debug, Clone)]
struct Found {
    field: &'static str,
    value: f64,
    start: usize,
    source: FieldSource,
}

/// Field order used by the positional fallback
fn expected_fields(kind: ShapeKind) -> &'static [&'static str] {
    match kind {
        ShapeKind::TriangularPrism => &["height", "side1", "side2"],
        ShapeKind::RectangularPrism => &["height", "width", "length"],
        ShapeKind::Cube | ShapeKind::Tesseract => &["size"],
        ShapeKind::Cylinder | ShapeKind::Cone => &["radius", "height"],
        ShapeKind::Sphere => &["radius"],
    }
}

/// Description parser with fixed tessellation options
#[derive(Debug, Clone, Default)]
pub struct Parser {
    options: ParserOptions,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Parse one description
    pub fn parse(&self, input: &str) -> Result<ParsedShape, ParseError> {
        let text = normalize(input);
        let numbers = find_numbers(&text);
        let mut ambiguities = Vec::new();

        let (kind, kind_source) = detect_kind(&text, numbers.len()).ok_or_else(|| {
            ParseError::NoShapeKindRecognized { input: input.to_string() }
        })?;
        log::debug!("Kind {} from {:?}", kind, kind_source);
        match kind_source {
            KindSource::Keyword => {}
            KindSource::Inferred(cue) => ambiguities.push(Ambiguity::KindInferred { cue }),
            KindSource::NumberCount(n) => ambiguities.push(Ambiguity::KindFromNumberCount(n)),
        }

        let mut found = labelled_fields(&text, kind, &numbers);

        // Positional fallback for whatever is still missing
        let expected = expected_fields(kind);
        for (index, &field) in expected.iter().enumerate() {
            if found.iter().any(|f| f.field == field) {
                continue;
            }
            let Some(number) = numbers.get(index) else {
                continue;
            };
            ambiguities.push(Ambiguity::PositionalFallback { field, value: number.value });
            if let Some(claim) = found.iter().find(|f| f.start == number.span.start) {
                ambiguities.push(Ambiguity::PositionalReuse {
                    field,
                    value: number.value,
                    labelled_as: claim.field,
                });
            }
            found.push(Found {
                field,
                value: number.value,
                start: number.span.start,
                source: FieldSource::Positional,
            });
        }

        let unused: Vec<f64> = numbers
            .iter()
            .filter(|n| !found.iter().any(|f| f.start == n.span.start))
            .map(|n| n.value)
            .collect();
        if !unused.is_empty() {
            ambiguities.push(Ambiguity::UnusedNumbers(unused));
        }

        // Present values are checked before missing ones are reported
        for &field in expected {
            if let Some(f) = found.iter().find(|f| f.field == field) {
                check_dimension(field, f.value)?;
            }
        }
        let missing: Vec<&'static str> = expected
            .iter()
            .copied()
            .filter(|field| !found.iter().any(|f| f.field == *field))
            .collect();
        if !missing.is_empty() {
            return Err(ParseError::InsufficientNumbers { kind, missing });
        }

        let value = |field: &str| {
            found
                .iter()
                .find(|f| f.field == field)
                .map_or(0.0, |f| f.value)
        };
        let params = self.build(kind, value);
        params.validate()?;

        for ambiguity in &ambiguities {
            log::warn!("Ambiguous description '{}': {:?}", input, ambiguity);
        }

        let fields = expected
            .iter()
            .filter_map(|&field| found.iter().find(|f| f.field == field).map(|f| (field, f.source)))
            .collect();

        Ok(ParsedShape { params, kind_source, fields, ambiguities })
    }

    fn build(&self, kind: ShapeKind, value: impl Fn(&str) -> f64) -> ShapeParams {
        let o = &self.options;
        match kind {
            ShapeKind::TriangularPrism => {
                ShapeParams::triangular_prism(value("height"), value("side1"), value("side2"))
            }
            ShapeKind::RectangularPrism => {
                ShapeParams::rectangular_prism(value("width"), value("height"), value("length"))
            }
            ShapeKind::Cube => ShapeParams::cube(value("size")),
            ShapeKind::Tesseract => ShapeParams::tesseract(value("size")),
            ShapeKind::Cylinder => ShapeParams::Cylinder {
                radius: value("radius"),
                height: value("height"),
                radial_segments: o.radial_segments,
            },
            ShapeKind::Cone => ShapeParams::Cone {
                radius: value("radius"),
                height: value("height"),
                radial_segments: o.radial_segments,
            },
            ShapeKind::Sphere => ShapeParams::Sphere {
                radius: value("radius"),
                width_segments: o.width_segments,
                height_segments: o.height_segments,
            },
        }
    }
}

/// Parse with default options
pub fn parse_description(input: &str) -> Result<ParsedShape, ParseError> {
    Parser::new().parse(input)
}

fn normalize(input: &str) -> String {
    let mut text = input.to_lowercase();
    // Overlapping products like 3x4x5 need more than one pass
    loop {
        let next = TIMES.replace_all(&text, "$1 by $2").into_owned();
        if next == text {
            return text;
        }
        text = next;
    }
}

/// Number tokens in order of appearance. A token with a glued suffix that is
/// not a unit (`4d`, `2.5q`) is not a number.
fn find_numbers(text: &str) -> Vec<Number> {
    NUMBER
        .captures_iter(text)
        .filter_map(|caps| {
            let m = caps.get(1)?;
            if let Some(suffix) = caps.get(2) {
                if !UNIT_SUFFIX.is_match(suffix.as_str()) {
                    log::debug!("Skipping '{}{}': not a number", m.as_str(), suffix.as_str());
                    return None;
                }
            }
            let value = m.as_str().parse::<f64>().ok()?;
            Some(Number { value, span: m.range() })
        })
        .collect()
}

/// The token starting at `start`, if any
fn token_at(numbers: &[Number], start: usize) -> Option<&Number> {
    numbers.iter().find(|n| n.span.start == start)
}

fn detect_kind(text: &str, number_count: usize) -> Option<(ShapeKind, KindSource)> {
    let keyword = KIND_KEYWORDS.iter().find(|(kind, re)| {
        re.is_match(text) && !(*kind == ShapeKind::Cube && HYPER.is_match(text))
    });
    if let Some((kind, _)) = keyword {
        return Some((*kind, KindSource::Keyword));
    }

    if TRIANGLE_BASE.is_match(text) {
        return Some((ShapeKind::TriangularPrism, KindSource::Inferred("triangle base")));
    }
    if EQUAL_SIDES.is_match(text) {
        return Some((ShapeKind::Cube, KindSource::Inferred("equal sides")));
    }
    if POINTED.is_match(text) {
        return Some((ShapeKind::Cone, KindSource::Inferred("pointed")));
    }
    if ROUND.is_match(text) {
        return if HEIGHT_WORDS.is_match(text) || number_count >= 2 {
            Some((ShapeKind::Cylinder, KindSource::Inferred("round with height")))
        } else {
            Some((ShapeKind::Sphere, KindSource::Inferred("round")))
        };
    }
    if NESTED_CUBES.is_match(text) {
        return Some((ShapeKind::Tesseract, KindSource::Inferred("nested cubes")));
    }

    let kind = match number_count {
        1 if RADIUS_WORDS.is_match(text) => ShapeKind::Sphere,
        1 if INNER_WORDS.is_match(text) => ShapeKind::Tesseract,
        1 => ShapeKind::Cube,
        2 if TIP_WORDS.is_match(text) => ShapeKind::Cone,
        2 => ShapeKind::Cylinder,
        3 => ShapeKind::RectangularPrism,
        _ => return None,
    };
    Some((kind, KindSource::NumberCount(number_count)))
}

/// Labelled values for the fields of `kind`, in pattern priority order
fn labelled_fields(text: &str, kind: ShapeKind, numbers: &[Number]) -> Vec<Found> {
    let expected = expected_fields(kind);
    let mut found: Vec<Found> = Vec::new();

    if kind == ShapeKind::TriangularPrism {
        if let Some(caps) = TRIANGLE_SIDES.iter().find_map(|re| re.captures(text)) {
            for (field, group) in [("side1", 1), ("side2", 2)] {
                if let Some(number) = caps.get(group).and_then(|m| token_at(numbers, m.start())) {
                    found.push(Found {
                        field,
                        value: number.value,
                        start: number.span.start,
                        source: FieldSource::Labelled,
                    });
                }
            }
        }
    }

    for (field, patterns) in FIELD_PATTERNS.iter() {
        if !expected.contains(field) || found.iter().any(|f| f.field == *field) {
            continue;
        }
        if let Some(hit) = first_capture(text, patterns, numbers) {
            log::debug!("Labelled {} = {}", field, hit.0);
            found.push(Found { field: *field, value: hit.0, start: hit.1, source: FieldSource::Labelled });
        }
    }

    if expected.contains(&"radius") && !found.iter().any(|f| f.field == "radius") {
        if let Some((diameter, start)) = first_capture(text, &DIAMETER, numbers) {
            log::debug!("Radius {} from diameter {}", diameter / 2.0, diameter);
            found.push(Found {
                field: "radius",
                value: diameter / 2.0,
                start,
                source: FieldSource::Derived,
            });
        }
    }

    found
}

/// Value and start offset of the first pattern match that lines up with a
/// whole number token
fn first_capture(text: &str, patterns: &[regex::Regex], numbers: &[Number]) -> Option<(f64, usize)> {
    patterns.iter().find_map(|re| {
        re.captures_iter(text).find_map(|caps| {
            let number = token_at(numbers, caps.get(1)?.start())?;
            Some((number.value, number.span.start))
        })
    })
}

fn check_dimension(field: &'static str, value: f64) -> Result<(), ParseError> {
    if value <= 0.0 {
        return Err(ParseError::NonPositiveDimension { field });
    }
    let extent = if field == "radius" { value * 2.0 } else { value };
    if extent > MAX_DIMENSION {
        return Err(ParseError::DimensionExceedsMax { field, value, extent, max: MAX_DIMENSION });
    }
    Ok(())
}
