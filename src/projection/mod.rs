//! UTM ↔ geographic coordinate transforms
//!
//! Pure functions on a WGS84-like ellipsoid. The forward and inverse
//! Transverse Mercator series are truncated, so the two directions are only
//! approximate inverses (well under a meter away from the poles).
//!
//! # Example
//!
//! ```rust
//! use wkt2shp::projection::{to_lat_lng, to_utm};
//! use wkt2shp::types::Point;
//!
//! let berlin = Point::from_lng_lat(13.4050, 52.5200);
//! let utm = to_utm(berlin);
//! assert_eq!((utm.zone_number, utm.zone_letter), (33, 'U'));
//!
//! let back = to_lat_lng(utm.point(), utm.zone_number, utm.zone_letter);
//! assert!((back.latitude() - 52.52).abs() < 1e-4);
//! ```

mod utm;
mod zone;

pub use utm::{to_lat_lng, to_utm, UtmCoordinate};
pub use zone::{utm_letter_designator, utm_zone_number, UtmZone};

/// Semi-major axis of the ellipsoid, in meters
pub const A: f64 = 6378137.0;

/// Squared first eccentricity of the ellipsoid
pub const ECC_SQUARED: f64 = 0.00669438;

/// Scale factor on the central meridian
pub const K0: f64 = 0.9996;

/// False easting applied to every zone
pub const FALSE_EASTING: f64 = 500_000.0;

/// False northing applied in the southern hemisphere
pub const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;
