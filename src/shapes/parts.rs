//! Part-indexed point storage shared by PolyLine and Polygon

use super::parted_content_length;
use crate::error::{Result, ShpError};
use crate::types::{BoundingBox, Point};

/// Concatenated points plus the start index of each part.
///
/// Parts start at 0, are strictly increasing and each part holds at least
/// one point; the last part runs to the end of `points`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PartedPoints {
    parts: Vec<u32>,
    points: Vec<Point>,
    bbox: BoundingBox,
}

impl PartedPoints {
    pub(crate) fn from_rings<I>(rings: I) -> Result<Self>
    where
        I: IntoIterator<Item = Vec<Point>>,
    {
        let mut parts = Vec::new();
        let mut points = Vec::new();
        for ring in rings {
            if ring.is_empty() {
                return Err(ShpError::EmptyGeometry);
            }
            parts.push(points.len() as u32);
            points.extend(ring);
        }

        let bbox = BoundingBox::from_points(&points)?;
        Ok(Self {
            parts,
            points,
            bbox,
        })
    }

    pub(crate) fn parts(&self) -> &[u32] {
        &self.parts
    }

    pub(crate) fn points(&self) -> &[Point] {
        &self.points
    }

    pub(crate) fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    pub(crate) fn content_length(&self) -> i32 {
        parted_content_length(self.parts.len(), self.points.len())
    }

    /// Iterate over the point slice of each part
    pub(crate) fn rings(&self) -> impl Iterator<Item = &[Point]> + '_ {
        let ends = self
            .parts
            .iter()
            .skip(1)
            .map(|&p| p as usize)
            .chain(std::iter::once(self.points.len()));
        self.parts
            .iter()
            .zip(ends)
            .map(move |(&start, end)| &self.points[start as usize..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_offsets() {
        let parted = PartedPoints::from_rings(vec![
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 0.0)],
            vec![Point::new(5.0, 5.0), Point::new(6.0, 6.0)],
        ])
        .unwrap();
        assert_eq!(parted.parts(), &[0, 3]);
        assert_eq!(parted.points().len(), 5);

        let rings: Vec<&[Point]> = parted.rings().collect();
        assert_eq!(rings.len(), 2);
        assert_eq!(rings[0].len(), 3);
        assert_eq!(rings[1], &[Point::new(5.0, 5.0), Point::new(6.0, 6.0)]);
    }

    #[test]
    fn test_empty_ring_rejected() {
        let err = PartedPoints::from_rings(vec![vec![Point::new(0.0, 0.0)], vec![]]).unwrap_err();
        assert!(matches!(err, ShpError::EmptyGeometry));
    }

    #[test]
    fn test_no_rings_rejected() {
        let err = PartedPoints::from_rings(Vec::<Vec<Point>>::new()).unwrap_err();
        assert!(matches!(err, ShpError::EmptyGeometry));
    }
}
