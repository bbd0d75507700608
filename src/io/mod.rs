//! I/O module: WKT source reading and Shapefile writing

pub mod shp;
pub mod wkt;

pub use shp::ShapefileWriter;
pub use wkt::{parse_wkt, read_source};
