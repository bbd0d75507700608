//! ESRI Shapefile writing (`.shp` main file and `.shx` index)
//!
//! # File layout
//!
//! Both files start with the same 100-byte header; only the file length
//! differs. Lengths and offsets are counted in 16-bit words.
//!
//! | Offset | Field | Byte order |
//! |---|---|---|
//! | 0 | file code 9994 | big |
//! | 4 | 5 unused integers | big |
//! | 24 | file length | big |
//! | 28 | version 1000 | little |
//! | 32 | shape type | little |
//! | 36 | Xmin, Ymin, Xmax, Ymax | little |
//! | 68 | Zmin, Zmax, Mmin, Mmax (zero) | little |
//!
//! Main file records are `number, content length` (big endian) followed by
//! the little-endian body. Index records are `offset, content length`.

mod header;
mod stream_writer;
mod writer;

pub use header::{ShpHeader, FILE_CODE, HEADER_SIZE, VERSION};
pub use stream_writer::{Endianness, ShpStreamWriter};
pub use writer::ShapefileWriter;
