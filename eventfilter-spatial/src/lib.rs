//! Spatial `INTERSECTS` predicate for event filters.
//!
//! Decides whether two geometries, each given as Well-Known Text, intersect.
//! The predicate is stateless: every call decodes its two arguments, runs one
//! intersection check and drops the geometries.
//!
//! ```text
//!   wkt1 ──► parse_wkt ──┐
//!                        ├──► Intersector ──► Ok(bool)
//!   wkt2 ──► parse_wkt ──┘         │
//!      │                           └──► Err(ExtentComputation)   (bounding box only)
//!      └──► Err(GeometryParse { argument })
//! ```
//!
//! # Strategies
//!
//! Two intersection semantics are available, selected per predicate through
//! [`IntersectsConfig`]:
//!
//! - [`IntersectionStrategy::BoundingBox`]: envelopes overlap (touching included).
//!   May report `true` for shapes that share no point.
//! - [`IntersectionStrategy::Exact`]: true point-set intersection via `geo`.
//!
//! # Modules
//!
//! - [`config`]: strategy selection
//! - [`geometry`]: WKT decoding and bounding boxes
//! - [`strategy`]: the [`Intersector`] trait and its implementations
//! - [`error`]: error types

pub mod config;
pub mod error;
pub mod geometry;
mod predicate;
pub mod strategy;

pub use config::{IntersectionStrategy, IntersectsConfig};
pub use error::{Argument, IntersectsError, Result, SpatialError};
pub use geometry::{parse_wkt, BBox, GeometryType};
pub use predicate::{SpatialIntersects, INTERSECTS};
pub use strategy::{intersector_for, BoundingBoxIntersector, ExactIntersector, Intersector};
