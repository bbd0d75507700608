//! MultiPolygon shape

use super::{Geometry, Polygon};
use crate::error::Result;
use crate::types::BoundingBox;

/// A set of polygons, written as one Polygon record per member
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    bbox: BoundingBox,
}

impl MultiPolygon {
    /// Create a multipolygon. Fails with `EmptyGeometry` if `polygons` is empty.
    pub fn new(polygons: Vec<Polygon>) -> Result<Self> {
        // Aggregate the members' own boxes
        let bbox = BoundingBox::from_boxes(polygons.iter().map(|p| p.bounding_box()))?;
        Ok(MultiPolygon { polygons, bbox })
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }
}

impl Geometry for MultiPolygon {
    fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    fn content_length(&self) -> i32 {
        self.polygons.iter().map(|p| p.content_length()).sum()
    }

    fn count(&self) -> usize {
        self.polygons.len()
    }

    fn wkt_type(&self) -> &'static str {
        "MULTIPOLYGON"
    }
}
