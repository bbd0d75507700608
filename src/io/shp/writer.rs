//! Shape encoding into `.shp` / `.shx` byte streams

use super::header::ShpHeader;
use super::stream_writer::{Endianness, ShpStreamWriter};
use crate::error::{Result, ShpError};
use crate::projection::UtmZone;
use crate::shapes::{Geometry, Record, Shape, FILE_HEADER_WORDS, RECORD_HEADER_WORDS};
use crate::types::{BoundingBox, Point, ShapeType};
use std::io::Write;

/// Encodes one single-type shape as a Shapefile.
///
/// A heterogeneous [`GeometryCollection`](crate::shapes::GeometryCollection)
/// must be split with [`Shape::split_by_type`] first.
///
/// # Example
///
/// ```rust
/// use wkt2shp::io::shp::ShapefileWriter;
/// use wkt2shp::io::wkt::parse_wkt;
///
/// let shape = parse_wkt("POINT (10 20)")?;
/// let shp = ShapefileWriter::new(&shape)?.shp_to_vec()?;
/// assert_eq!(shp.len(), 128);
/// # Ok::<(), wkt2shp::ShpError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ShapefileWriter<'a> {
    shape: &'a Shape,
    shape_type: ShapeType,
    /// When set, every coordinate is converted from this UTM zone to lat/lng
    projection: Option<UtmZone>,
}

impl<'a> ShapefileWriter<'a> {
    /// Create a writer for `shape`.
    ///
    /// Fails with `MixedShapeTypes` if the shape holds several shape types.
    pub fn new(shape: &'a Shape) -> Result<Self> {
        let shape_type = shape
            .shape_type()
            .ok_or_else(|| ShpError::MixedShapeTypes(shape.shape_types()))?;
        Ok(Self {
            shape,
            shape_type,
            projection: None,
        })
    }

    /// Convert coordinates from UTM `zone` to lat/lng while writing
    pub fn with_projection(mut self, zone: Option<UtmZone>) -> Self {
        self.projection = zone;
        self
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    fn project(&self, point: Point) -> Point {
        match self.projection {
            Some(zone) => zone.to_lat_lng(point),
            None => point,
        }
    }

    /// File box; each corner goes through the projection on its own
    fn file_box(&self) -> BoundingBox {
        self.shape.bounding_box().map_corners(|p| self.project(p))
    }

    /// Write the main `.shp` file
    pub fn write_shp<W: Write>(&self, writer: W) -> Result<()> {
        let mut stream = ShpStreamWriter::new(writer);
        let header = ShpHeader::new(
            FILE_HEADER_WORDS + self.shape.full_length(),
            self.shape_type,
            self.file_box(),
        );
        header.write(&mut stream)?;

        for (index, record) in self.shape.records().into_iter().enumerate() {
            self.write_record(&mut stream, index as i32 + 1, record)?;
        }
        stream.flush()
    }

    /// Write the `.shx` index file
    pub fn write_shx<W: Write>(&self, writer: W) -> Result<()> {
        let mut stream = ShpStreamWriter::new(writer);
        let records = self.shape.records();
        let header = ShpHeader::new(
            FILE_HEADER_WORDS + RECORD_HEADER_WORDS * records.len() as i32,
            self.shape_type,
            self.file_box(),
        );
        header.write(&mut stream)?;

        let mut offset = FILE_HEADER_WORDS;
        for record in records {
            let content_length = record.content_length();
            stream.write_i32(offset, Endianness::Big)?;
            stream.write_i32(content_length, Endianness::Big)?;
            offset += content_length + RECORD_HEADER_WORDS;
        }
        stream.flush()
    }

    /// Encode the main file into a byte vector
    pub fn shp_to_vec(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(self.expected_shp_size());
        self.write_shp(&mut buffer)?;
        Ok(buffer)
    }

    /// Encode the index file into a byte vector
    pub fn shx_to_vec(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_shx(&mut buffer)?;
        Ok(buffer)
    }

    fn expected_shp_size(&self) -> usize {
        2 * (FILE_HEADER_WORDS + self.shape.full_length()) as usize
    }

    fn write_record<W: Write>(
        &self,
        stream: &mut ShpStreamWriter<W>,
        number: i32,
        record: Record<'_>,
    ) -> Result<()> {
        let content_length = record.content_length();
        stream.write_i32(number, Endianness::Big)?;
        stream.write_i32(content_length, Endianness::Big)?;

        let body_start = stream.bytes_written();
        stream.write_i32(record.shape_type().code(), Endianness::Little)?;
        match record {
            Record::Point(point) => stream.write_point(self.project(point.coordinate))?,
            Record::PolyLine(line) => {
                self.write_parts(stream, &line.bounding_box(), line.parts(), line.points())?
            }
            Record::Polygon(polygon) => self.write_parts(
                stream,
                &polygon.bounding_box(),
                polygon.parts(),
                polygon.points(),
            )?,
        }

        debug_assert_eq!(
            stream.bytes_written() - body_start,
            2 * content_length as u64,
            "record {} body does not match its content length",
            number
        );
        Ok(())
    }

    /// Body of a PolyLine/Polygon record after the shape type
    fn write_parts<W: Write>(
        &self,
        stream: &mut ShpStreamWriter<W>,
        bbox: &BoundingBox,
        parts: &[u32],
        points: &[Point],
    ) -> Result<()> {
        stream.write_box(&bbox.map_corners(|p| self.project(p)))?;
        stream.write_i32(parts.len() as i32, Endianness::Little)?;
        stream.write_i32(points.len() as i32, Endianness::Little)?;
        for &part in parts {
            stream.write_i32(part as i32, Endianness::Little)?;
        }
        for &point in points {
            stream.write_point(self.project(point))?;
        }
        Ok(())
    }
}
