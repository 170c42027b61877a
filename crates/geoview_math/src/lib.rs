//! Geometry math for geoview
//!
//! Small value types shared by the solid generator, the projections and the
//! net layouts.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vertex position (`f32`, GPU-layout compatible)
//! - [`Vec2`] - 2D point for projections and net diagrams (`f64`)
//! - [`Bounds2`] / [`Bounds3`] - axis-aligned bounding boxes
//!
//! ## Polygon helpers
//!
//! - [`convex_hull`] - silhouette outline of a projected point cloud
//! - [`signed_area`] - shoelace area of a ring

mod vec2;
mod vec3;
pub mod bounds;
pub mod hull;

pub use vec2::Vec2;
pub use vec3::Vec3;
pub use bounds::{Bounds2, Bounds3};
pub use hull::{convex_hull, signed_area};
