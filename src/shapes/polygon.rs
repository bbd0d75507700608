//! Polygon shape

use super::parts::PartedPoints;
use super::Geometry;
use crate::error::Result;
use crate::types::{BoundingBox, Point};

/// A polygon: the first ring is the exterior, the rest are holes.
///
/// Ring closure is taken from the input as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    inner: PartedPoints,
}

impl Polygon {
    /// Create a polygon from its rings
    pub fn from_rings<I>(rings: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<Point>>,
    {
        Ok(Polygon {
            inner: PartedPoints::from_rings(rings)?,
        })
    }

    /// Create a polygon with only an exterior ring
    pub fn single(ring: Vec<Point>) -> Result<Self> {
        Self::from_rings(std::iter::once(ring))
    }

    pub fn parts(&self) -> &[u32] {
        self.inner.parts()
    }

    pub fn points(&self) -> &[Point] {
        self.inner.points()
    }

    /// Iterate over the points of each ring
    pub fn rings(&self) -> impl Iterator<Item = &[Point]> + '_ {
        self.inner.rings()
    }
}

impl Geometry for Polygon {
    fn bounding_box(&self) -> BoundingBox {
        self.inner.bounding_box()
    }

    fn content_length(&self) -> i32 {
        self.inner.content_length()
    }

    fn wkt_type(&self) -> &'static str {
        "POLYGON"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_with_hole() {
        let polygon = Polygon::from_rings(vec![
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
                Point::new(0.0, 0.0),
            ],
            vec![
                Point::new(2.0, 2.0),
                Point::new(3.0, 2.0),
                Point::new(3.0, 3.0),
                Point::new(2.0, 2.0),
            ],
        ])
        .unwrap();
        assert_eq!(polygon.parts(), &[0, 5]);
        assert_eq!(polygon.points().len(), 9);
        assert_eq!(polygon.content_length(), (44 + 8 + 144) / 2);
        assert_eq!(polygon.rings().nth(1).map(|r| r.len()), Some(4));
        assert_eq!(polygon.bounding_box().max, Point::new(10.0, 10.0));
    }
}
