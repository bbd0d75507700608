//! Bounding box type for shapes

use super::Point;
use crate::error::{Result, ShpError};
use std::fmt;

/// 2D bounding box, written as `Xmin, Ymin, Xmax, Ymax`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum point (lower-left corner)
    pub min: Point,
    /// Maximum point (upper-right corner)
    pub max: Point,
}

impl BoundingBox {
    /// Create a new bounding box from min and max points
    pub fn new(min: Point, max: Point) -> Self {
        BoundingBox { min, max }
    }

    /// Create a bounding box from a single point
    pub fn from_point(point: Point) -> Self {
        BoundingBox {
            min: point,
            max: point,
        }
    }

    /// Create a bounding box that contains all given points.
    ///
    /// Fails with [`ShpError::EmptyGeometry`] when `points` is empty.
    pub fn from_points(points: &[Point]) -> Result<Self> {
        let (first, rest) = points.split_first().ok_or(ShpError::EmptyGeometry)?;

        let mut bbox = BoundingBox::from_point(*first);
        for point in rest {
            bbox.expand_to_include(*point);
        }
        Ok(bbox)
    }

    /// Create the box enclosing a sequence of boxes.
    ///
    /// Fails with [`ShpError::EmptyGeometry`] when the sequence is empty.
    pub fn from_boxes<I>(boxes: I) -> Result<Self>
    where
        I: IntoIterator<Item = BoundingBox>,
    {
        boxes
            .into_iter()
            .reduce(|acc, b| acc.merge(&b))
            .ok_or(ShpError::EmptyGeometry)
    }

    /// Get the width of the bounding box
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Get the height of the bounding box
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Expand the bounding box to include another point
    pub fn expand_to_include(&mut self, point: Point) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Merge with another bounding box
    pub fn merge(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Map both corners through `f`.
    ///
    /// Corners are transformed independently; the result is not re-normalized.
    pub fn map_corners<F>(&self, mut f: F) -> BoundingBox
    where
        F: FnMut(Point) -> Point,
    {
        BoundingBox {
            min: f(self.min),
            max: f(self.max),
        }
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BBox[{} -> {}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bbox_from_points() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 5.0),
            Point::new(-5.0, 3.0),
        ];
        let bbox = BoundingBox::from_points(&points).unwrap();
        assert_eq!(bbox.min, Point::new(-5.0, 0.0));
        assert_eq!(bbox.max, Point::new(10.0, 5.0));
    }

    #[test]
    fn test_bbox_from_no_points() {
        let err = BoundingBox::from_points(&[]).unwrap_err();
        assert!(matches!(err, ShpError::EmptyGeometry));
    }

    #[test]
    fn test_bbox_from_boxes() {
        let a = BoundingBox::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0));
        let b = BoundingBox::new(Point::new(-2.0, 0.5), Point::new(0.5, 3.0));
        let merged = BoundingBox::from_boxes([a, b]).unwrap();
        assert_eq!(merged.min, Point::new(-2.0, 0.0));
        assert_eq!(merged.max, Point::new(1.0, 3.0));

        assert!(matches!(
            BoundingBox::from_boxes(Vec::new()),
            Err(ShpError::EmptyGeometry)
        ));
    }

    #[test]
    fn test_bbox_dimensions() {
        let bbox = BoundingBox::new(Point::new(0.0, 0.0), Point::new(10.0, 5.0));
        assert_eq!(bbox.width(), 10.0);
        assert_eq!(bbox.height(), 5.0);
        assert!(bbox.contains(Point::new(5.0, 5.0)));
        assert!(!bbox.contains(Point::new(15.0, 5.0)));
    }

    #[test]
    fn test_map_corners() {
        let bbox = BoundingBox::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0));
        let shifted = bbox.map_corners(|p| Point::new(p.x + 1.0, p.y * 2.0));
        assert_eq!(shifted.min, Point::new(2.0, 4.0));
        assert_eq!(shifted.max, Point::new(4.0, 8.0));
    }

    proptest! {
        #[test]
        fn prop_bbox_is_ordered_and_contains_all(
            coords in prop::collection::vec((-1.0e6f64..1.0e6, -1.0e6f64..1.0e6), 1..64)
        ) {
            let points: Vec<Point> = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
            let bbox = BoundingBox::from_points(&points).unwrap();
            prop_assert!(bbox.min.x <= bbox.max.x);
            prop_assert!(bbox.min.y <= bbox.max.y);
            for p in &points {
                prop_assert!(bbox.contains(*p));
            }
        }
    }
}
