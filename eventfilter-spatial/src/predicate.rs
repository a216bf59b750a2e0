//! The `INTERSECTS` predicate over two WKT strings.

use crate::config::{IntersectionStrategy, IntersectsConfig};
use crate::error::{Argument, IntersectsError};
use crate::geometry::{parse_wkt, GeometryType};
use crate::strategy::{intersector_for, Intersector};
use geo_types::Geometry;
use std::sync::Arc;

/// Function name under which the predicate is registered.
pub const INTERSECTS: &str = "INTERSECTS";

/// Stateless spatial intersection predicate.
///
/// Parses both arguments on every call (argument 1 first) and hands the
/// decoded geometries to the configured [`Intersector`]. Cloning is cheap and
/// clones share the intersector.
#[derive(Debug, Clone)]
pub struct SpatialIntersects {
    intersector: Arc<dyn Intersector>,
}

impl SpatialIntersects {
    /// Create a predicate using the strategy selected in `config`.
    pub fn new(config: &IntersectsConfig) -> Self {
        Self {
            intersector: intersector_for(config.strategy),
        }
    }

    /// Create a predicate around a caller-supplied intersector.
    pub fn with_intersector(intersector: Arc<dyn Intersector>) -> Self {
        Self { intersector }
    }

    pub fn strategy(&self) -> IntersectionStrategy {
        self.intersector.strategy()
    }

    /// Report whether the geometries encoded by `wkt1` and `wkt2` intersect.
    ///
    /// A parse or extent failure is always an `Err`; `Ok(false)` only ever
    /// means the shapes were decoded and do not intersect.
    pub fn evaluate(&self, wkt1: &str, wkt2: &str) -> Result<bool, IntersectsError> {
        let span = tracing::debug_span!(
            "intersects",
            strategy = self.intersector.strategy().as_str(),
            result = tracing::field::Empty,
        );
        let _guard = span.enter();

        let geom1 = decode(wkt1, Argument::First)?;
        let geom2 = decode(wkt2, Argument::Second)?;

        tracing::trace!(
            first = GeometryType::from_geometry(&geom1).as_str(),
            second = GeometryType::from_geometry(&geom2).as_str(),
            "decoded geometries"
        );

        let result = self
            .intersector
            .intersects(&geom1, &geom2)
            .inspect_err(|e| tracing::debug!(error = %e, "intersection failed"))?;
        span.record("result", result);
        Ok(result)
    }
}

impl Default for SpatialIntersects {
    fn default() -> Self {
        Self::new(&IntersectsConfig::default())
    }
}

fn decode(wkt: &str, argument: Argument) -> Result<Geometry<f64>, IntersectsError> {
    parse_wkt(wkt).map_err(|source| {
        tracing::debug!(argument = argument.index(), error = %source, "WKT decode failed");
        IntersectsError::GeometryParse { argument, source }
    })
}
