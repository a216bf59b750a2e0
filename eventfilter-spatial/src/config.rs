//! Predicate configuration types.
//!
//! Selects which intersection semantics a registered `INTERSECTS` predicate
//! uses. Exactly one strategy is active per predicate instance.

use crate::error::{Result, SpatialError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Intersection semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntersectionStrategy {
    /// Envelope overlap (touching included). Over-approximates: shapes whose
    /// envelopes overlap but which share no point still report `true`.
    /// Empty geometries fail with an extent error.
    BoundingBox,

    /// True point-set intersection via the `geo` crate.
    #[default]
    Exact,
}

impl IntersectionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntersectionStrategy::BoundingBox => "bounding_box",
            IntersectionStrategy::Exact => "exact",
        }
    }
}

impl fmt::Display for IntersectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IntersectionStrategy {
    type Err = SpatialError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bounding_box" | "bbox" | "extent" => Ok(IntersectionStrategy::BoundingBox),
            "exact" => Ok(IntersectionStrategy::Exact),
            other => Err(SpatialError::Config(format!(
                "unknown intersection strategy: {}",
                other
            ))),
        }
    }
}

/// Configuration for the `INTERSECTS` predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntersectsConfig {
    /// Intersection semantics. Default: exact.
    pub strategy: IntersectionStrategy,
}

impl IntersectsConfig {
    /// Create a config using the given strategy.
    pub fn new(strategy: IntersectionStrategy) -> Self {
        Self { strategy }
    }

    /// Set the intersection strategy.
    pub fn with_strategy(mut self, strategy: IntersectionStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
