//! Transverse Mercator forward and inverse series

use super::zone::{utm_letter_designator, utm_zone_number};
use super::{A, ECC_SQUARED, FALSE_EASTING, FALSE_NORTHING_SOUTH, K0};
use crate::types::Point;

/// A position on the UTM grid, rounded to whole meters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtmCoordinate {
    pub easting: i32,
    pub northing: i32,
    pub zone_number: i32,
    pub zone_letter: char,
}

impl UtmCoordinate {
    /// Easting/northing as a planar point
    pub fn point(&self) -> Point {
        Point::new(self.easting as f64, self.northing as f64)
    }
}

/// Meridional arc length from the equator to `lat_rad`
fn meridional_arc(lat_rad: f64) -> f64 {
    let e2 = ECC_SQUARED;
    let e4 = e2 * e2;
    let e6 = e4 * e2;

    A * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * lat_rad
        - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * lat_rad).sin()
        + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * lat_rad).sin()
        - (35.0 * e6 / 3072.0) * (6.0 * lat_rad).sin())
}

fn ecc_prime_squared() -> f64 {
    ECC_SQUARED / (1.0 - ECC_SQUARED)
}

pub(super) fn central_meridian(zone_number: i32) -> f64 {
    ((zone_number - 1) * 6 - 180 + 3) as f64
}

/// Project a geographic point (x = longitude, y = latitude) onto the UTM grid.
///
/// The zone is chosen from the point itself, including the Norway and
/// Svalbard exceptions. Southern points get the 10,000 km false northing.
pub fn to_utm(point: Point) -> UtmCoordinate {
    let latitude = point.latitude();
    let longitude = point.longitude();

    let zone_number = utm_zone_number(longitude, latitude);
    let zone_letter = utm_letter_designator(latitude);

    let lat_rad = latitude.to_radians();
    let long_rad = longitude.to_radians();
    let long_origin_rad = central_meridian(zone_number).to_radians();

    let ep2 = ecc_prime_squared();
    let n = A / (1.0 - ECC_SQUARED * lat_rad.sin().powi(2)).sqrt();
    let t = lat_rad.tan().powi(2);
    let c = ep2 * lat_rad.cos().powi(2);
    let a = lat_rad.cos() * (long_rad - long_origin_rad);
    let m = meridional_arc(lat_rad);

    let easting = K0
        * n
        * (a + (1.0 - t + c) * a.powi(3) / 6.0
            + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * a.powi(5) / 120.0)
        + FALSE_EASTING;

    let mut northing = K0
        * (m + n
            * lat_rad.tan()
            * (a * a / 2.0
                + (5.0 - t + 9.0 * c + 4.0 * c * c) * a.powi(4) / 24.0
                + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * a.powi(6) / 720.0));

    if latitude < 0.0 {
        northing += FALSE_NORTHING_SOUTH;
    }

    UtmCoordinate {
        easting: easting.round() as i32,
        northing: northing.round() as i32,
        zone_number,
        zone_letter,
    }
}

/// Convert a UTM point (x = easting, y = northing) back to geographic
/// coordinates (x = longitude, y = latitude), in degrees.
///
/// `zone_letter` only selects the hemisphere: C through M are southern.
/// No validation happens here; see [`UtmZone`](super::UtmZone) for that.
pub fn to_lat_lng(point: Point, zone_number: i32, zone_letter: char) -> Point {
    let e2 = ECC_SQUARED;
    let ep2 = ecc_prime_squared();
    let e1 = (1.0 - (1.0 - e2).sqrt()) / (1.0 + (1.0 - e2).sqrt());

    let southern = zone_letter.to_ascii_uppercase() < 'N';
    let x = point.easting() - FALSE_EASTING;
    let y = point.northing() - if southern { FALSE_NORTHING_SOUTH } else { 0.0 };

    let m = y / K0;
    let mu = m / (A * (1.0 - e2 / 4.0 - 3.0 * e2 * e2 / 64.0 - 5.0 * e2.powi(3) / 256.0));

    // Footpoint latitude
    let phi1 = mu
        + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
        + (21.0 * e1 * e1 / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
        + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin();

    let sin_phi1 = phi1.sin();
    let n1 = A / (1.0 - e2 * sin_phi1 * sin_phi1).sqrt();
    let t1 = phi1.tan().powi(2);
    let c1 = ep2 * phi1.cos().powi(2);
    let r1 = A * (1.0 - e2) / (1.0 - e2 * sin_phi1 * sin_phi1).powf(1.5);
    let d = x / (n1 * K0);

    let lat = phi1
        - (n1 * phi1.tan() / r1)
            * (d * d / 2.0
                - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ep2) * d.powi(4) / 24.0
                + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1 - 252.0 * ep2 - 3.0 * c1 * c1)
                    * d.powi(6)
                    / 720.0);

    let long = (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
        + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ep2 + 24.0 * t1 * t1) * d.powi(5)
            / 120.0)
        / phi1.cos();

    Point::from_lng_lat(
        central_meridian(zone_number) + long.to_degrees(),
        lat.to_degrees(),
    )
}
