//! WKT decoding and bounding envelopes.
//!
//! Geometries are decoded with the `wkt` crate into `geo_types::Geometry<f64>`
//! and never cached: each predicate call parses its own inputs and drops them
//! when the call returns.

use crate::error::{Result, SpatialError};
use geo::BoundingRect;
use geo_types::Geometry;

/// Geometry type discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryType {
    /// Classify a geo-types Geometry.
    pub fn from_geometry(geom: &Geometry<f64>) -> Self {
        match geom {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::Line(_) | Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) | Geometry::Rect(_) | Geometry::Triangle(_) => {
                GeometryType::Polygon
            }
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    /// WKT keyword for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryType::Point => "POINT",
            GeometryType::LineString => "LINESTRING",
            GeometryType::Polygon => "POLYGON",
            GeometryType::MultiPoint => "MULTIPOINT",
            GeometryType::MultiLineString => "MULTILINESTRING",
            GeometryType::MultiPolygon => "MULTIPOLYGON",
            GeometryType::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }
}

/// Axis-aligned bounding box.
///
/// Coordinates are taken as-is from the WKT; no CRS is assumed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BBox {
    /// Create a new bounding box.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Check if this bbox intersects another. Touching edges count.
    pub fn intersects(&self, other: &BBox) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    /// Check if this bbox contains a point.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Compute the envelope of a geo-types Geometry.
    ///
    /// Fails with [`SpatialError::EmptyExtent`] when the geometry has no
    /// coordinates (e.g. `GEOMETRYCOLLECTION EMPTY`).
    pub fn from_geometry(geom: &Geometry<f64>) -> Result<Self> {
        let rect = geom
            .bounding_rect()
            .ok_or_else(|| SpatialError::EmptyExtent(GeometryType::from_geometry(geom)))?;
        Ok(Self {
            min_x: rect.min().x,
            min_y: rect.min().y,
            max_x: rect.max().x,
            max_y: rect.max().y,
        })
    }
}

/// Parse WKT string to geo-types Geometry.
pub fn parse_wkt(wkt: &str) -> Result<Geometry<f64>> {
    use std::str::FromStr;
    wkt::Wkt::from_str(wkt)
        .map_err(|e| SpatialError::WktParse(e.to_string()))
        .and_then(|w| {
            w.try_into()
                .map_err(|e: wkt::conversion::Error| SpatialError::WktParse(format!("{:?}", e)))
        })
}
