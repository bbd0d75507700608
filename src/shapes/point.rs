//! Point shape

use super::Geometry;
use crate::types::{BoundingBox, Point};

/// A single coordinate written as a Point record
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointShape {
    pub coordinate: Point,
}

impl PointShape {
    /// Record body: shape type + x + y, in 16-bit words
    pub const CONTENT_LENGTH: i32 = 10;

    /// Create a new point shape
    pub fn new(coordinate: Point) -> Self {
        PointShape { coordinate }
    }

    /// Create a point shape from coordinates
    pub fn from_coords(x: f64, y: f64) -> Self {
        PointShape::new(Point::new(x, y))
    }
}

impl Geometry for PointShape {
    fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_point(self.coordinate)
    }

    fn content_length(&self) -> i32 {
        Self::CONTENT_LENGTH
    }

    fn wkt_type(&self) -> &'static str {
        "POINT"
    }
}
