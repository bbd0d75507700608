//! Byte-order aware primitive writer

use crate::error::Result;
use crate::types::{BoundingBox, Point};
use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use std::io::Write;

/// Byte order of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Big,
    Little,
}

/// Writes Shapefile primitives and counts the bytes written
pub struct ShpStreamWriter<W: Write> {
    writer: W,
    written: u64,
}

impl<W: Write> ShpStreamWriter<W> {
    /// Create a new stream writer
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Write a 32-bit signed integer
    pub fn write_i32(&mut self, value: i32, endian: Endianness) -> Result<()> {
        match endian {
            Endianness::Big => self.writer.write_i32::<BigEndian>(value)?,
            Endianness::Little => self.writer.write_i32::<LittleEndian>(value)?,
        }
        self.written += 4;
        Ok(())
    }

    /// Write a 64-bit float
    pub fn write_f64(&mut self, value: f64, endian: Endianness) -> Result<()> {
        match endian {
            Endianness::Big => self.writer.write_f64::<BigEndian>(value)?,
            Endianness::Little => self.writer.write_f64::<LittleEndian>(value)?,
        }
        self.written += 8;
        Ok(())
    }

    /// Write `x, y` as little-endian doubles
    pub fn write_point(&mut self, point: Point) -> Result<()> {
        self.write_f64(point.x, Endianness::Little)?;
        self.write_f64(point.y, Endianness::Little)?;
        Ok(())
    }

    /// Write `Xmin, Ymin, Xmax, Ymax` as little-endian doubles
    pub fn write_box(&mut self, bbox: &BoundingBox) -> Result<()> {
        self.write_point(bbox.min)?;
        self.write_point(bbox.max)?;
        Ok(())
    }

    /// Total number of bytes written so far
    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    /// Flush the underlying writer
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    /// Get the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_i32_both_orders() {
        let mut buf = Vec::new();
        {
            let mut writer = ShpStreamWriter::new(&mut buf);
            writer.write_i32(9994, Endianness::Big).unwrap();
            writer.write_i32(1000, Endianness::Little).unwrap();
            assert_eq!(writer.bytes_written(), 8);
        }
        assert_eq!(&buf[0..4], &[0x00, 0x00, 0x27, 0x0A]);
        assert_eq!(&buf[4..8], &[0xE8, 0x03, 0x00, 0x00]);
    }

    #[test]
    fn test_write_f64() {
        let mut buf = Vec::new();
        {
            let mut writer = ShpStreamWriter::new(&mut buf);
            writer.write_f64(1.5, Endianness::Little).unwrap();
            writer.write_f64(1.5, Endianness::Big).unwrap();
        }
        assert_eq!(&buf[0..8], &1.5f64.to_le_bytes());
        assert_eq!(&buf[8..16], &1.5f64.to_be_bytes());
    }

    #[test]
    fn test_write_box_order() {
        let bbox = BoundingBox::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0));
        let mut writer = ShpStreamWriter::new(Vec::new());
        writer.write_box(&bbox).unwrap();
        assert_eq!(writer.bytes_written(), 32);

        let buf = writer.into_inner();
        let values: Vec<f64> = buf
            .chunks(8)
            .map(|c| f64::from_le_bytes(c.try_into().unwrap()))
            .collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
    }
}
