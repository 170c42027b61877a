//! Core types for the geoview solid-geometry engine
//!
//! This crate derives everything a geometry viewer shows from one set of
//! construction parameters:
//!
//! - [`ShapeKind`] / [`ShapeParams`] - the supported solids and their inputs
//! - [`Metrics`] - exact volume, areas and topology counts
//! - [`SolidGeometry`] - a triangle mesh with feature edges
//! - [`Projection2D`] - top, front, left and right orthographic views
//! - [`NetLayout`] - an unfolded net diagram
//! - [`Catalog`] - named parameter presets
//! - [`DerivationCache`] - memoized derivations
//! - [`ShapeDisplay`] - the seam a renderer implements
//!
//! All engines are pure functions of their parameters.

mod kind;
mod error;
mod params;
mod metrics;
pub mod geometry;
pub mod net;
mod catalog;
mod derive;
mod display;

pub use kind::ShapeKind;
pub use error::ShapeError;
pub use params::{
    Dimension, ShapeParams, DEFAULT_HEIGHT_SEGMENTS, DEFAULT_RADIAL_SEGMENTS,
    DEFAULT_WIDTH_SEGMENTS, MAX_DIMENSION, MIN_SEGMENTS, TESSERACT_INNER_RATIO,
};
pub use metrics::{compute_metrics, compute_metrics_for, cone_sector_angle_deg, MetricDetail, Metrics};
pub use geometry::{
    generate_solid, generate_solid_named, project, project_all, project_front, project_side,
    project_top, Projection2D, SolidGeometry, View,
};
pub use net::{compute_net, FaceShape, FoldEdge, NetFace, NetLabel, NetLayout};
pub use catalog::{Catalog, CatalogError};
pub use derive::{derive, DerivationCache, DerivedShape, ShapeKey};
pub use display::{MeshBuffers, MeshData, ShapeDisplay, ViewExtent, ViewExtents};

// Re-export math types used in the public API
pub use geoview_math::{Bounds2, Bounds3, Vec2, Vec3};
