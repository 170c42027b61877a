//! geoview - parametric solid geometry viewer
//!
//! Library side of the `geoview` binary: configuration loading, the
//! command-line application state and the plain-text report.

pub mod config;
pub mod app;
pub mod report;
