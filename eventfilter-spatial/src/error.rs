//! Error types for the spatial predicate.

use crate::geometry::GeometryType;
use std::fmt;
use thiserror::Error;

/// Low-level geometry errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpatialError {
    /// WKT parsing error.
    #[error("WKT parse error: {0}")]
    WktParse(String),

    /// Geometry has no coordinates, so no bounding envelope exists.
    #[error("cannot compute extent of empty {0:?} geometry")]
    EmptyExtent(GeometryType),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Position of a predicate argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Argument {
    First,
    Second,
}

impl Argument {
    /// 1-based argument index as seen in the filter expression.
    pub fn index(self) -> usize {
        match self {
            Argument::First => 1,
            Argument::Second => 2,
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::First => f.write_str("first"),
            Argument::Second => f.write_str("second"),
        }
    }
}

/// Errors returned by [`SpatialIntersects::evaluate`](crate::SpatialIntersects::evaluate).
///
/// Every variant is tagged with the argument that caused it. None of these is
/// ever folded into an `Ok(false)` result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IntersectsError {
    /// The argument is not valid WKT.
    #[error("failed to parse {argument} geometry: {source}")]
    GeometryParse {
        argument: Argument,
        #[source]
        source: SpatialError,
    },

    /// The argument parsed but has no bounding envelope.
    #[error("failed to get extent for {argument} geometry: {source}")]
    ExtentComputation {
        argument: Argument,
        #[source]
        source: SpatialError,
    },
}

impl IntersectsError {
    /// The argument this error is attributed to.
    pub fn argument(&self) -> Argument {
        match self {
            IntersectsError::GeometryParse { argument, .. }
            | IntersectsError::ExtentComputation { argument, .. } => *argument,
        }
    }
}

/// Result type for spatial operations.
pub type Result<T> = std::result::Result<T, SpatialError>;
