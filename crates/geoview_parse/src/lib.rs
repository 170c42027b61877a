//! Free-text shape descriptions for geoview
//!
//! [`parse_description`] reads phrases like `"cube 3 units on each side"`
//! or `"9 4 3"` and produces validated [`ShapeParams`](geoview_core::ShapeParams).
//!
//! - [`Parser`] / [`ParserOptions`] - parsing with explicit tessellation counts
//! - [`ParsedShape`] - the parameters plus how each value was found
//! - [`Ambiguity`] - heuristic choices the caller may want to confirm
//! - [`ParseError`] - failures, each with a user-facing [`hint`](ParseError::hint)

mod error;
mod patterns;
mod parser;

pub use error::ParseError;
pub use parser::{
    parse_description, Ambiguity, FieldSource, KindSource, ParsedShape, Parser, ParserOptions,
};
