//! Intersection strategies.
//!
//! - **BoundingBox**: envelope overlap; cheap, conservative, fails on empty geometries
//! - **Exact**: `geo::Intersects`; never fails on decoded geometries

use crate::config::IntersectionStrategy;
use crate::error::{Argument, IntersectsError};
use crate::geometry::BBox;
use geo_types::Geometry;
use std::fmt::Debug;
use std::sync::Arc;

/// Computes whether two decoded geometries intersect.
///
/// Implementations hold no per-call state and must be safe to share across
/// threads.
pub trait Intersector: Debug + Send + Sync {
    /// Which semantics this implementation provides.
    fn strategy(&self) -> IntersectionStrategy;

    /// `first` and `second` are the predicate's first and second arguments;
    /// errors are attributed accordingly.
    fn intersects(
        &self,
        first: &Geometry<f64>,
        second: &Geometry<f64>,
    ) -> Result<bool, IntersectsError>;
}

/// Envelope-overlap intersection.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundingBoxIntersector;

impl Intersector for BoundingBoxIntersector {
    fn strategy(&self) -> IntersectionStrategy {
        IntersectionStrategy::BoundingBox
    }

    fn intersects(
        &self,
        first: &Geometry<f64>,
        second: &Geometry<f64>,
    ) -> Result<bool, IntersectsError> {
        let extent = |geom: &Geometry<f64>, argument: Argument| {
            BBox::from_geometry(geom)
                .map_err(|source| IntersectsError::ExtentComputation { argument, source })
        };
        let bbox1 = extent(first, Argument::First)?;
        let bbox2 = extent(second, Argument::Second)?;
        Ok(bbox1.intersects(&bbox2))
    }
}

/// Exact point-set intersection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactIntersector;

impl Intersector for ExactIntersector {
    fn strategy(&self) -> IntersectionStrategy {
        IntersectionStrategy::Exact
    }

    fn intersects(
        &self,
        first: &Geometry<f64>,
        second: &Geometry<f64>,
    ) -> Result<bool, IntersectsError> {
        use geo::Intersects;
        Ok(first.intersects(second))
    }
}

/// Build the intersector for a strategy.
pub fn intersector_for(strategy: IntersectionStrategy) -> Arc<dyn Intersector> {
    match strategy {
        IntersectionStrategy::BoundingBox => Arc::new(BoundingBoxIntersector),
        IntersectionStrategy::Exact => Arc::new(ExactIntersector),
    }
}
