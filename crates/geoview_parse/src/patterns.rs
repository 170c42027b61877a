//! Compiled regular expressions used by the parser
//!
//! All patterns expect lower-cased input.

use geoview_core::ShapeKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// Text of a number inside a labelled pattern. A match only counts when it
/// starts where a [`NUMBER`] token starts.
const NUM: &str = r"(-?(?:\d+(?:\.\d+)?|\.\d+))";

/// Units that may follow a number, glued (`2.5m`) or spaced (`4 units`)
const UNIT: &str = r"(?:mm|cm|km|m|inch(?:es)?|in|ft|feet|foot|units?)";

/// Optional linking word between a label and its number
const LINK: &str = r"\s*(?:of|is|=|:)?\s*";

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => panic!("invalid built-in pattern {:?}: {}", pattern, e),
    }
}

/// `label <link> N`
fn after(label: &str) -> Regex {
    compile(&format!(r"\b(?:{}){}{}", label, LINK, NUM))
}

/// `N [unit] [-] suffix`, as in `4 units high` or `2-unit radius`
fn before(suffix: &str) -> Regex {
    compile(&format!(
        r"{}[a-z]*(?:\s*-)?\s*(?:{}\s*-?\s*)?(?:{})\b",
        NUM, UNIT, suffix
    ))
}

/// A whole number token: group 1 is the value, group 2 any glued suffix.
/// The token is taken greedily, so `2.5m` is never read as `2`.
pub(crate) static NUMBER: Lazy<Regex> =
    Lazy::new(|| compile(r"(?:^|[^\w.])(-?(?:\d+(?:\.\d+)?|\.\d+))([a-z]\w*)?"));

/// Glued suffixes that leave a token a number
pub(crate) static UNIT_SUFFIX: Lazy<Regex> = Lazy::new(|| compile(&format!("^{}$", UNIT)));

/// `3x4x5` and `3 × 4` become `3 by 4 by 5` before anything else runs
pub(crate) static TIMES: Lazy<Regex> = Lazy::new(|| compile(r"(\d)\s*[x×*]\s*(\d)"));

/// Kind keywords in priority order; the first match wins
pub(crate) static KIND_KEYWORDS: Lazy<Vec<(ShapeKind, Regex)>> = Lazy::new(|| {
    vec![
        (ShapeKind::TriangularPrism, compile(r"\btriang(?:ular|le)\s*prism")),
        (ShapeKind::RectangularPrism, compile(r"\brectangular\s*(?:prism|box)|\bcuboid\b|\bbox\b")),
        (ShapeKind::Cube, compile(r"\bcube\b")),
        (ShapeKind::Cylinder, compile(r"\bcylind")),
        (ShapeKind::Cone, compile(r"\bcon(?:e|ical)\b")),
        (ShapeKind::Sphere, compile(r"\bsphere|\bball\b|\bcircle\b")),
        (ShapeKind::Tesseract, compile(r"\btesseract\b|\bhyper\s*cube|\b4d\s*cube")),
    ]
});

/// Words that turn a plain `cube` into a tesseract request
pub(crate) static HYPER: Lazy<Regex> = Lazy::new(|| compile(r"hyper|tesseract|\b4d\b"));

pub(crate) static TRIANGLE_BASE: Lazy<Regex> =
    Lazy::new(|| compile(r"\btriang(?:le|ular)\b.*\bbase\b|\bbase\b.*\btriang(?:le|ular)\b"));
pub(crate) static EQUAL_SIDES: Lazy<Regex> =
    Lazy::new(|| compile(r"\bequal\s*sides\b|\ball\s*sides\s*(?:are\s*)?equal\b"));
pub(crate) static POINTED: Lazy<Regex> = Lazy::new(|| compile(r"\bpointed\b|\bapex\b"));
pub(crate) static ROUND: Lazy<Regex> = Lazy::new(|| compile(r"\bround\b|\bcircular\b"));
pub(crate) static HEIGHT_WORDS: Lazy<Regex> = Lazy::new(|| compile(r"\bheight\b|\bhigh\b|\btall\b"));
pub(crate) static NESTED_CUBES: Lazy<Regex> = Lazy::new(|| compile(r"\b4d\b|\bnested\s*cubes?\b"));

/// Number-count fallback cues
pub(crate) static RADIUS_WORDS: Lazy<Regex> = Lazy::new(|| compile(r"\bradius\b|\bdiameter\b"));
pub(crate) static INNER_WORDS: Lazy<Regex> = Lazy::new(|| compile(r"hyper|\bnested\b|\binner\b"));
pub(crate) static TIP_WORDS: Lazy<Regex> = Lazy::new(|| compile(r"\bpoint(?:ed|y)?\b|\btip\b|\bapex\b"));

/// Labelled patterns per field, highest priority first
pub(crate) static FIELD_PATTERNS: Lazy<Vec<(&'static str, Vec<Regex>)>> = Lazy::new(|| {
    vec![
        ("height", vec![after(r"height|h"), before(r"high|tall|in\s*height")]),
        ("width", vec![after("width|w"), before("wide|in\\s*width")]),
        ("length", vec![after(r"length|l"), before(r"long|deep|in\s*length")]),
        ("radius", vec![after(r"radius|r"), before("radius")]),
        (
            "size",
            vec![
                after(r"side\s*length"),
                after(r"edge(?:\s*length)?"),
                before(r"on\s*(?:each|every|all)\s*sides?"),
                after("size"),
            ],
        ),
    ]
});

/// Diameters are converted into radii
pub(crate) static DIAMETER: Lazy<Vec<Regex>> =
    Lazy::new(|| vec![after("diameter|d"), before("diameter")]);

/// Both legs of a triangular base in one phrase
pub(crate) static TRIANGLE_SIDES: Lazy<Vec<Regex>> = Lazy::new(|| {
    let pair = format!(r"{}[a-z]*\s*(?:{}\s*)?(?:and|,|&|by)\s*{}", NUM, UNIT, NUM);
    vec![
        compile(&format!(r"\b(?:sides|legs){}{}", LINK, pair)),
        compile(&format!(r"\bbase{}{}", LINK, pair)),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(text: &str) -> Vec<(&str, Option<&str>)> {
        NUMBER
            .captures_iter(text)
            .map(|caps| (caps.get(1).unwrap().as_str(), caps.get(2).map(|m| m.as_str())))
            .collect()
    }

    #[test]
    fn test_numbers_are_whole_tokens() {
        assert_eq!(numbers("side1 2.5 and 7"), vec![("2.5", None), ("7", None)]);
        assert_eq!(numbers("radius 2.5m"), vec![("2.5", Some("m"))]);
        assert_eq!(numbers("4d cube 3"), vec![("4", Some("d")), ("3", None)]);
        assert_eq!(numbers("cube .5"), vec![(".5", None)]);
        assert_eq!(numbers("cube -3, 2-4"), vec![("-3", None), ("2", None), ("4", None)]);
    }

    #[test]
    fn test_unit_suffixes() {
        for unit in ["m", "cm", "mm", "in", "ft", "units"] {
            assert!(UNIT_SUFFIX.is_match(unit), "{}", unit);
        }
        for other in ["d", "q", "nd", "mx"] {
            assert!(!UNIT_SUFFIX.is_match(other), "{}", other);
        }
    }

    #[test]
    fn test_times_is_rewritten() {
        let once = TIMES.replace_all("3x4x5", "$1 by $2");
        let twice = TIMES.replace_all(&once, "$1 by $2");
        assert_eq!(twice, "3 by 4 by 5");
    }

    #[test]
    fn test_keyword_priority() {
        let first = |text: &str| {
            KIND_KEYWORDS
                .iter()
                .find(|(_, re)| re.is_match(text))
                .map(|(kind, _)| *kind)
        };
        assert_eq!(first("a cone on a cylinder"), Some(ShapeKind::Cylinder));
        assert_eq!(first("hypercube"), Some(ShapeKind::Tesseract));
        assert_eq!(first("a shoebox"), None);
        assert_eq!(first("a box"), Some(ShapeKind::RectangularPrism));
    }

    #[test]
    fn test_label_patterns() {
        let height = &FIELD_PATTERNS[0].1;
        assert_eq!(&height[0].captures("height of 4").unwrap()[1], "4");
        assert_eq!(&height[1].captures("4 units high").unwrap()[1], "4");
        assert!(height[0].captures("high with radius 2").is_none());
        assert_eq!(&height[1].captures("2.5m tall").unwrap()[1], "2.5");
        let radius = &FIELD_PATTERNS[3].1;
        assert_eq!(&radius[1].captures("a 2-unit radius").unwrap()[1], "2");
        assert_eq!(&radius[1].captures("3 cm radius").unwrap()[1], "3");
        let sides = &TRIANGLE_SIDES[0];
        let caps = sides.captures("legs 3 and 4").unwrap();
        assert_eq!((&caps[1], &caps[2]), ("3", "4"));
    }
}
