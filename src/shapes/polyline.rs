//! PolyLine shape (WKT LINESTRING / MULTILINESTRING)

use super::parts::PartedPoints;
use super::Geometry;
use crate::error::Result;
use crate::types::{BoundingBox, Point};

/// One or more line parts written as a single PolyLine record
#[derive(Debug, Clone, PartialEq)]
pub struct PolyLine {
    inner: PartedPoints,
}

impl PolyLine {
    /// Create a polyline from its parts.
    ///
    /// Fails with `EmptyGeometry` if there is no part or a part has no point.
    pub fn from_parts<I>(parts: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<Point>>,
    {
        Ok(PolyLine {
            inner: PartedPoints::from_rings(parts)?,
        })
    }

    /// Create a single-part polyline
    pub fn single(points: Vec<Point>) -> Result<Self> {
        Self::from_parts(std::iter::once(points))
    }

    /// Start index of each part into [`points`](Self::points)
    pub fn parts(&self) -> &[u32] {
        self.inner.parts()
    }

    /// All points of all parts, concatenated
    pub fn points(&self) -> &[Point] {
        self.inner.points()
    }

    /// Iterate over the points of each part
    pub fn lines(&self) -> impl Iterator<Item = &[Point]> + '_ {
        self.inner.rings()
    }
}

impl Geometry for PolyLine {
    fn bounding_box(&self) -> BoundingBox {
        self.inner.bounding_box()
    }

    fn content_length(&self) -> i32 {
        self.inner.content_length()
    }

    fn wkt_type(&self) -> &'static str {
        if self.parts().len() > 1 {
            "MULTILINESTRING"
        } else {
            "LINESTRING"
        }
    }
}
