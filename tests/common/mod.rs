//! Shared test utilities for wkt2shp integration tests.
//!
//! Header and record readers for the mixed-endian Shapefile layout, plus
//! logging setup. Test crates import them via `mod common;`.

#![allow(dead_code)]

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::Cursor;
use wkt2shp::{BoundingBox, Point, ShapeType};

/// Route `log` output through the test harness; safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Cursor over `buf` positioned at `offset`
pub fn cursor_at(buf: &[u8], offset: usize) -> Cursor<&[u8]> {
    let mut cursor = Cursor::new(buf);
    cursor.set_position(offset as u64);
    cursor
}

pub fn be_i32(buf: &[u8], offset: usize) -> i32 {
    cursor_at(buf, offset).read_i32::<BigEndian>().unwrap()
}

pub fn le_i32(buf: &[u8], offset: usize) -> i32 {
    cursor_at(buf, offset).read_i32::<LittleEndian>().unwrap()
}

pub fn le_f64(buf: &[u8], offset: usize) -> f64 {
    cursor_at(buf, offset).read_f64::<LittleEndian>().unwrap()
}

/// Decoded 100-byte file header
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub file_code: i32,
    pub file_length: i32,
    pub version: i32,
    pub shape_type: ShapeType,
    pub bbox: BoundingBox,
}

pub fn read_header(buf: &[u8]) -> Header {
    assert!(buf.len() >= 100, "file shorter than its header");
    for unused in (4..24).step_by(4) {
        assert_eq!(be_i32(buf, unused), 0, "unused header word at {unused}");
    }
    for zm in (68..100).step_by(8) {
        assert_eq!(le_f64(buf, zm), 0.0, "Z/M range at {zm}");
    }
    Header {
        file_code: be_i32(buf, 0),
        file_length: be_i32(buf, 24),
        version: le_i32(buf, 28),
        shape_type: ShapeType::from_code(le_i32(buf, 32)).expect("unknown shape type code"),
        bbox: BoundingBox::new(
            Point::new(le_f64(buf, 36), le_f64(buf, 44)),
            Point::new(le_f64(buf, 52), le_f64(buf, 60)),
        ),
    }
}

/// Main file records as `(number, content_length, body)`
pub fn read_records(buf: &[u8]) -> Vec<(i32, i32, &[u8])> {
    let mut records = Vec::new();
    let mut cursor = cursor_at(buf, 100);
    while (cursor.position() as usize) < buf.len() {
        let number = cursor.read_i32::<BigEndian>().unwrap();
        let content_length = cursor.read_i32::<BigEndian>().unwrap();
        let start = cursor.position() as usize;
        let end = start + 2 * content_length as usize;
        records.push((number, content_length, &buf[start..end]));
        cursor.set_position(end as u64);
    }
    records
}

/// Index entries as `(offset, content_length)`
pub fn read_index(buf: &[u8]) -> Vec<(i32, i32)> {
    let mut cursor = cursor_at(buf, 100);
    (0..(buf.len() - 100) / 8)
        .map(|_| {
            let offset = cursor.read_i32::<BigEndian>().unwrap();
            let content_length = cursor.read_i32::<BigEndian>().unwrap();
            (offset, content_length)
        })
        .collect()
}

/// Parts and points of a PolyLine/Polygon record body
pub fn read_parted_body(body: &[u8]) -> (Vec<i32>, Vec<Point>) {
    let mut cursor = cursor_at(body, 36);
    let part_count = cursor.read_i32::<LittleEndian>().unwrap() as usize;
    let point_count = cursor.read_i32::<LittleEndian>().unwrap() as usize;
    let parts = (0..part_count)
        .map(|_| cursor.read_i32::<LittleEndian>().unwrap())
        .collect();
    let points = (0..point_count)
        .map(|_| {
            let x = cursor.read_f64::<LittleEndian>().unwrap();
            let y = cursor.read_f64::<LittleEndian>().unwrap();
            Point::new(x, y)
        })
        .collect();
    (parts, points)
}
