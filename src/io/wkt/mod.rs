//! WKT (Well-Known Text) reading
//!
//! Supported keywords: `POINT`, `LINESTRING`, `MULTILINESTRING`, `POLYGON`,
//! `MULTIPOLYGON` and `GEOMETRYCOLLECTION`, case-sensitive, 2D only.

mod parser;
mod source;

pub use parser::parse_wkt;
pub use source::{decode_source, read_source};
