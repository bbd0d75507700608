//! Error types for wkt2shp

use std::io;
use thiserror::Error;

use crate::types::ShapeType;

/// Main error type for conversion operations
#[derive(Debug, Error)]
pub enum ShpError {
    /// IO error occurred while writing the output files
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// WKT keyword that has no Shapefile counterpart
    #[error("'{0}' is not a supported geometry type")]
    UnsupportedGeometryType(String),

    /// Coordinate token that is not a finite floating-point value
    #[error("Malformed number: '{0}'")]
    MalformedNumber(String),

    /// Structural WKT error (unbalanced parentheses, missing separators, trailing text)
    #[error("Malformed WKT at offset {offset}: {message}")]
    MalformedWkt { offset: usize, message: String },

    /// A bounding box was requested for a geometry without any point
    #[error("Geometry has no points")]
    EmptyGeometry,

    /// UTM conversion was requested without a zone number and letter
    #[error("'zone-number' and 'zone-letter' are not defined")]
    MissingProjectionParameters,

    /// Zone number or letter outside the UTM grid
    #[error("Invalid UTM zone: {number}{letter}")]
    InvalidZone { number: i32, letter: char },

    /// A single Shapefile can only hold one shape type
    #[error("Cannot write mixed shape types {0:?} into one file")]
    MixedShapeTypes(Vec<ShapeType>),
}

/// Result type alias for wkt2shp operations
pub type Result<T> = std::result::Result<T, ShpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShpError::UnsupportedGeometryType("CIRCULARSTRING".to_string());
        assert_eq!(
            err.to_string(),
            "'CIRCULARSTRING' is not a supported geometry type"
        );
    }

    #[test]
    fn test_invalid_zone_display() {
        let err = ShpError::InvalidZone {
            number: 61,
            letter: 'U',
        };
        assert_eq!(err.to_string(), "Invalid UTM zone: 61U");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read-only");
        let shp_err: ShpError = io_err.into();
        assert!(matches!(shp_err, ShpError::Io(_)));
    }
}
