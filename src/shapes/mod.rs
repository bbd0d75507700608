//! Geometry model: the shape variants a Shapefile can hold
//!
//! Shapes are immutable values. Every constructor computes the bounding box
//! up front, so a constructed shape always has at least one point.

use crate::types::{BoundingBox, ShapeType};

pub mod collection;
pub mod multipolygon;
mod parts;
pub mod point;
pub mod polygon;
pub mod polyline;

pub use collection::GeometryCollection;
pub use multipolygon::MultiPolygon;
pub use point::PointShape;
pub use polygon::Polygon;
pub use polyline::PolyLine;

/// Size of a record header (record number + content length), in 16-bit words
pub const RECORD_HEADER_WORDS: i32 = 4;

/// Size of the main and index file headers, in 16-bit words
pub const FILE_HEADER_WORDS: i32 = 50;

/// Content length of a PolyLine or Polygon record body, in 16-bit words.
///
/// Shape type (4 bytes) + box (32) + part and point counts (8) make the
/// fixed 44 bytes, followed by 4 bytes per part index and 16 per point.
pub fn parted_content_length(part_count: usize, point_count: usize) -> i32 {
    ((44 + 4 * part_count + 16 * point_count) / 2) as i32
}

/// Derived quantities shared by all shape variants
pub trait Geometry {
    /// Enclosing box of every coordinate of the shape
    fn bounding_box(&self) -> BoundingBox;

    /// Length of the record bodies, in 16-bit words, excluding record headers
    fn content_length(&self) -> i32;

    /// Number of Shapefile records the shape is written as
    fn count(&self) -> usize {
        1
    }

    /// Length of all records including their headers, in 16-bit words
    fn full_length(&self) -> i32 {
        self.content_length() + RECORD_HEADER_WORDS * self.count() as i32
    }

    /// WKT keyword of the shape
    fn wkt_type(&self) -> &'static str;
}

/// Any shape parsed from WKT
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Point(PointShape),
    PolyLine(PolyLine),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Shape {
    /// Get a reference to the geometry trait object
    pub fn as_geometry(&self) -> &dyn Geometry {
        match self {
            Shape::Point(s) => s,
            Shape::PolyLine(s) => s,
            Shape::Polygon(s) => s,
            Shape::MultiPolygon(s) => s,
            Shape::GeometryCollection(s) => s,
        }
    }

    /// Shapefile type of the shape.
    ///
    /// `None` for a collection whose members have different types.
    pub fn shape_type(&self) -> Option<ShapeType> {
        match self {
            Shape::Point(_) => Some(ShapeType::Point),
            Shape::PolyLine(_) => Some(ShapeType::PolyLine),
            Shape::Polygon(_) | Shape::MultiPolygon(_) => Some(ShapeType::Polygon),
            Shape::GeometryCollection(c) => match c.shape_types().as_slice() {
                [single] => Some(*single),
                _ => None,
            },
        }
    }

    /// Distinct shape types present, in order of first appearance
    pub fn shape_types(&self) -> Vec<ShapeType> {
        match self {
            Shape::GeometryCollection(c) => c.shape_types(),
            other => other.shape_type().into_iter().collect(),
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.as_geometry().bounding_box()
    }

    pub fn content_length(&self) -> i32 {
        self.as_geometry().content_length()
    }

    pub fn count(&self) -> usize {
        self.as_geometry().count()
    }

    pub fn full_length(&self) -> i32 {
        self.as_geometry().full_length()
    }

    /// Flatten the shape into the records it is written as, in file order
    pub fn records(&self) -> Vec<Record<'_>> {
        let mut records = Vec::with_capacity(self.count());
        self.collect_records(&mut records);
        records
    }

    fn collect_records<'a>(&'a self, out: &mut Vec<Record<'a>>) {
        match self {
            Shape::Point(s) => out.push(Record::Point(s)),
            Shape::PolyLine(s) => out.push(Record::PolyLine(s)),
            Shape::Polygon(s) => out.push(Record::Polygon(s)),
            Shape::MultiPolygon(s) => out.extend(s.polygons().iter().map(Record::Polygon)),
            Shape::GeometryCollection(c) => {
                for member in c.geometries() {
                    member.collect_records(out);
                }
            }
        }
    }

    /// Split the shape into single-type groups.
    ///
    /// Only a heterogeneous collection yields more than one group; any other
    /// shape is returned unchanged.
    pub fn split_by_type(self) -> Vec<(ShapeType, Shape)> {
        match self {
            Shape::GeometryCollection(c) if c.shape_types().len() > 1 => c
                .grouped()
                .into_iter()
                .map(|(ty, group)| (ty, Shape::GeometryCollection(group)))
                .collect(),
            other => match other.shape_type() {
                Some(ty) => vec![(ty, other)],
                None => Vec::new(),
            },
        }
    }
}

impl From<PointShape> for Shape {
    fn from(s: PointShape) -> Self {
        Shape::Point(s)
    }
}

impl From<PolyLine> for Shape {
    fn from(s: PolyLine) -> Self {
        Shape::PolyLine(s)
    }
}

impl From<Polygon> for Shape {
    fn from(s: Polygon) -> Self {
        Shape::Polygon(s)
    }
}

impl From<MultiPolygon> for Shape {
    fn from(s: MultiPolygon) -> Self {
        Shape::MultiPolygon(s)
    }
}

impl From<GeometryCollection> for Shape {
    fn from(s: GeometryCollection) -> Self {
        Shape::GeometryCollection(s)
    }
}

/// One Shapefile record: a borrowed view of a simple shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Record<'a> {
    Point(&'a PointShape),
    PolyLine(&'a PolyLine),
    Polygon(&'a Polygon),
}

impl<'a> Record<'a> {
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Record::Point(_) => ShapeType::Point,
            Record::PolyLine(_) => ShapeType::PolyLine,
            Record::Polygon(_) => ShapeType::Polygon,
        }
    }

    pub fn content_length(&self) -> i32 {
        match self {
            Record::Point(s) => s.content_length(),
            Record::PolyLine(s) => s.content_length(),
            Record::Polygon(s) => s.content_length(),
        }
    }
}
