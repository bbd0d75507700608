//! # wkt2shp
//!
//! A pure Rust library for converting Well-Known-Text geometries into
//! ESRI Shapefiles (`.shp` main file and `.shx` index).
//!
//! ## Features
//!
//! - `POINT`, `LINESTRING`, `MULTILINESTRING`, `POLYGON`, `MULTIPOLYGON`
//!   and `GEOMETRYCOLLECTION` input
//! - Point, PolyLine and Polygon output with correct mixed-endian layout
//! - Heterogeneous collections split into one file set per shape type
//! - Optional UTM to lat/lng conversion of every coordinate
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wkt2shp::{convert_to_files, ConversionOptions, UtmZone};
//!
//! let options = ConversionOptions::default().with_projection(UtmZone::new(33, 'U')?);
//! let written = convert_to_files(
//!     "POLYGON ((389000 5819000, 390000 5819000, 390000 5820000, 389000 5819000))",
//!     &options,
//!     "parcel.shp",
//! )?;
//! for path in written {
//!     println!("wrote {}", path.display());
//! }
//! # Ok::<(), wkt2shp::ShpError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`io::wkt`] parses the text into a [`Shape`]
//! - [`Geometry`] - trait implemented by every shape variant (box, lengths)
//! - [`projection`] converts between lat/lng and UTM
//! - [`io::shp`] encodes a single-type shape into Shapefile bytes
//! - [`convert`] ties the steps together

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod convert;
pub mod error;
pub mod io;
pub mod projection;
pub mod shapes;
pub mod types;

// Re-export commonly used types
pub use error::{Result, ShpError};
pub use types::{BoundingBox, Point, ShapeType};

// Re-export shape types
pub use shapes::{
    Geometry, GeometryCollection, MultiPolygon, PointShape, PolyLine, Polygon, Record, Shape,
};

// Re-export projection
pub use projection::{to_lat_lng, to_utm, UtmCoordinate, UtmZone};

// Re-export I/O and pipeline
pub use convert::{convert, convert_file, convert_to_files, ConversionOptions, ShapefileOutput};
pub use io::{parse_wkt, ShapefileWriter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports_work_together() {
        let shape = parse_wkt("LINESTRING (0 0, 3 4)").unwrap();
        assert_eq!(shape.shape_type(), Some(ShapeType::PolyLine));
        assert_eq!(
            shape.bounding_box(),
            BoundingBox::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0))
        );
    }
}
