//! Shapefile shape type codes

use std::fmt;

/// Shape type stored in the Shapefile header and in each record.
///
/// Only the 2D types produced from WKT are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i32)]
pub enum ShapeType {
    Point = 1,
    PolyLine = 3,
    Polygon = 5,
}

impl ShapeType {
    /// Numeric code written to the file
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Look up a shape type from its numeric code
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(ShapeType::Point),
            3 => Some(ShapeType::PolyLine),
            5 => Some(ShapeType::Polygon),
            _ => None,
        }
    }

    /// Name used as file suffix when a collection is split per type
    pub const fn name(self) -> &'static str {
        match self {
            ShapeType::Point => "Point",
            ShapeType::PolyLine => "PolyLine",
            ShapeType::Polygon => "Polygon",
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ShapeType::Point.code(), 1);
        assert_eq!(ShapeType::PolyLine.code(), 3);
        assert_eq!(ShapeType::Polygon.code(), 5);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(ShapeType::from_code(3), Some(ShapeType::PolyLine));
        assert_eq!(ShapeType::from_code(8), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ShapeType::PolyLine.to_string(), "PolyLine");
    }
}
