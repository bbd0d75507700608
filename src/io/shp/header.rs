//! The 100-byte header shared by `.shp` and `.shx`

use super::stream_writer::{Endianness, ShpStreamWriter};
use crate::error::Result;
use crate::types::{BoundingBox, ShapeType};
use std::io::Write;

/// Magic number at the start of every Shapefile
pub const FILE_CODE: i32 = 9994;

/// Format version
pub const VERSION: i32 = 1000;

/// Header size in bytes
pub const HEADER_SIZE: u64 = 100;

/// Shapefile header fields
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShpHeader {
    /// Total file length in 16-bit words, header included
    pub file_length: i32,
    pub shape_type: ShapeType,
    pub bbox: BoundingBox,
}

impl ShpHeader {
    pub fn new(file_length: i32, shape_type: ShapeType, bbox: BoundingBox) -> Self {
        Self {
            file_length,
            shape_type,
            bbox,
        }
    }

    /// Write the header
    pub fn write<W: Write>(&self, writer: &mut ShpStreamWriter<W>) -> Result<()> {
        writer.write_i32(FILE_CODE, Endianness::Big)?;
        for _ in 0..5 {
            writer.write_i32(0, Endianness::Big)?;
        }
        writer.write_i32(self.file_length, Endianness::Big)?;
        writer.write_i32(VERSION, Endianness::Little)?;
        writer.write_i32(self.shape_type.code(), Endianness::Little)?;
        writer.write_box(&self.bbox)?;

        // Z and M ranges
        for _ in 0..4 {
            writer.write_f64(0.0, Endianness::Little)?;
        }
        Ok(())
    }
}
