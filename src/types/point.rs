//! Planar coordinate type

use std::fmt;

/// A 2D coordinate.
///
/// In geographic space `x` is the longitude and `y` the latitude, in degrees.
/// In UTM space `x` is the easting and `y` the northing, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point from its x and y components
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Create a point from geographic coordinates
    pub const fn from_lng_lat(longitude: f64, latitude: f64) -> Self {
        Point::new(longitude, latitude)
    }

    /// Origin
    pub const ZERO: Point = Point::new(0.0, 0.0);

    /// Longitude in degrees (alias of `x`)
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.x
    }

    /// Latitude in degrees (alias of `y`)
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.y
    }

    /// Easting in meters (alias of `x`)
    #[inline]
    pub fn easting(&self) -> f64 {
        self.x
    }

    /// Northing in meters (alias of `y`)
    #[inline]
    pub fn northing(&self) -> f64 {
        self.y
    }
}

impl Default for Point {
    fn default() -> Self {
        Point::ZERO
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.x, self.y)
    }
}
