//! UTM zone numbers and latitude band letters

use super::utm::{central_meridian, to_lat_lng};
use crate::error::{Result, ShpError};
use crate::types::Point;
use std::fmt;

/// Latitude band letter for `latitude` (degrees).
///
/// Bands are 8° wide and left-inclusive from -80° ('C') to 72° ('W');
/// 'X' covers 72° to 84° inclusive. Anything outside maps to 'Z'.
pub fn utm_letter_designator(latitude: f64) -> char {
    const BANDS: &[u8; 20] = b"CDEFGHJKLMNPQRSTUVWX";

    if (72.0..=84.0).contains(&latitude) {
        return 'X';
    }
    if !(-80.0..72.0).contains(&latitude) {
        return 'Z';
    }
    let index = ((latitude + 80.0) / 8.0).floor() as usize;
    BANDS[index.min(BANDS.len() - 2)] as char
}

/// UTM zone number for a geographic coordinate (degrees).
///
/// Applies the southern Norway and Svalbard exceptions.
pub fn utm_zone_number(longitude: f64, latitude: f64) -> i32 {
    if (8.0..=13.0).contains(&longitude) && latitude > 54.5 && latitude < 58.0 {
        return 32;
    }
    if (56.0..64.0).contains(&latitude) && (3.0..12.0).contains(&longitude) {
        return 32;
    }
    if (72.0..84.0).contains(&latitude) {
        if (0.0..9.0).contains(&longitude) {
            return 31;
        } else if (9.0..21.0).contains(&longitude) {
            return 33;
        } else if (21.0..33.0).contains(&longitude) {
            return 35;
        } else if (33.0..42.0).contains(&longitude) {
            return 37;
        }
    }

    let zone = ((longitude + 180.0) / 6.0).floor() as i32 + 1;
    zone.clamp(1, 60)
}

/// A validated UTM zone (number 1..=60 and band letter C..X)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtmZone {
    number: i32,
    letter: char,
}

impl UtmZone {
    /// Create a zone.
    ///
    /// `0` and `'0'` are the "not set" values and fail with
    /// `MissingProjectionParameters`; other out-of-grid values fail with
    /// `InvalidZone`. Lowercase letters are accepted.
    pub fn new(number: i32, letter: char) -> Result<Self> {
        if number == 0 || letter == '0' {
            return Err(ShpError::MissingProjectionParameters);
        }

        let letter = letter.to_ascii_uppercase();
        let valid_letter = ('C'..='X').contains(&letter) && letter != 'I' && letter != 'O';
        if !(1..=60).contains(&number) || !valid_letter {
            return Err(ShpError::InvalidZone { number, letter });
        }
        Ok(UtmZone { number, letter })
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    /// Bands C through M lie south of the equator
    pub fn is_southern(&self) -> bool {
        self.letter < 'N'
    }

    /// Longitude of the zone's central meridian, in degrees
    pub fn central_meridian(&self) -> f64 {
        central_meridian(self.number)
    }

    /// Convert a point of this zone (easting, northing) to lat/lng
    pub fn to_lat_lng(&self, point: Point) -> Point {
        to_lat_lng(point, self.number, self.letter)
    }
}

impl fmt::Display for UtmZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_band_boundaries() {
        assert_eq!(utm_letter_designator(48.0), 'U');
        assert_eq!(utm_letter_designator(55.999), 'U');
        assert_eq!(utm_letter_designator(56.0), 'V');
        assert_eq!(utm_letter_designator(-8.0), 'M');
        assert_eq!(utm_letter_designator(-0.0001), 'M');
        assert_eq!(utm_letter_designator(0.0), 'N');
        assert_eq!(utm_letter_designator(-80.0), 'C');
        assert_eq!(utm_letter_designator(71.999), 'W');
        assert_eq!(utm_letter_designator(84.0), 'X');
    }

    #[test]
    fn test_letter_outside_grid() {
        assert_eq!(utm_letter_designator(90.0), 'Z');
        assert_eq!(utm_letter_designator(84.5), 'Z');
        assert_eq!(utm_letter_designator(-80.5), 'Z');
    }

    #[test]
    fn test_standard_zone_numbers() {
        assert_eq!(utm_zone_number(-180.0, 0.0), 1);
        assert_eq!(utm_zone_number(-177.5, 10.0), 1);
        assert_eq!(utm_zone_number(0.0, 0.0), 31);
        assert_eq!(utm_zone_number(13.4, 52.5), 33);
        assert_eq!(utm_zone_number(179.9, 0.0), 60);
        assert_eq!(utm_zone_number(180.0, 0.0), 60);
    }

    #[test]
    fn test_norway_exceptions() {
        assert_eq!(utm_zone_number(5.3, 60.4), 32); // Bergen
        assert_eq!(utm_zone_number(10.0, 56.0), 32);
        assert_eq!(utm_zone_number(2.9, 60.0), 31);
    }

    #[test]
    fn test_svalbard_exceptions() {
        assert_eq!(utm_zone_number(8.0, 78.0), 31);
        assert_eq!(utm_zone_number(15.6, 78.2), 33); // Longyearbyen
        assert_eq!(utm_zone_number(25.0, 78.0), 35);
        assert_eq!(utm_zone_number(40.0, 80.0), 37);
    }

    #[test]
    fn test_zone_validation() {
        let zone = UtmZone::new(33, 'u').unwrap();
        assert_eq!(zone.letter(), 'U');
        assert_eq!(zone.central_meridian(), 15.0);
        assert!(!zone.is_southern());
        assert!(UtmZone::new(23, 'K').unwrap().is_southern());
        assert_eq!(zone.to_string(), "33U");
    }

    #[test]
    fn test_zone_missing_and_invalid() {
        assert!(matches!(
            UtmZone::new(0, '0'),
            Err(ShpError::MissingProjectionParameters)
        ));
        assert!(matches!(
            UtmZone::new(33, '0'),
            Err(ShpError::MissingProjectionParameters)
        ));
        assert!(matches!(
            UtmZone::new(61, 'U'),
            Err(ShpError::InvalidZone { number: 61, .. })
        ));
        assert!(matches!(
            UtmZone::new(33, 'O'),
            Err(ShpError::InvalidZone { letter: 'O', .. })
        ));
    }
}
