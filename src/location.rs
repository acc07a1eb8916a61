//! Bridging between geo URIs and platform location objects.
//!
//! The bridge is deliberately thin: coordinates pass through untouched, and
//! everything still funnels through the validating construction path.

use crate::coordinate::GeoUri;
use crate::error::GeoUriError;

/// A bare latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// A platform location fix.
///
/// Unlike a geo URI, a fix always carries an altitude and a horizontal
/// accuracy, meaningful or not; platform APIs report a negative accuracy
/// when the fix is invalid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Meters above the reference geoid; depths are negative.
    pub altitude: f64,
    /// Uncertainty radius of the fix, in meters.
    pub horizontal_accuracy: f64,
}

impl GeoUri {
    /// Builds a geo URI from a bare coordinate pair.
    pub fn from_coordinate(coordinate: Coordinate) -> Result<Self, GeoUriError> {
        GeoUri::new(coordinate.latitude, coordinate.longitude)
    }

    /// Builds a geo URI from a location fix. The fix's altitude and
    /// horizontal accuracy always travel along, so an invalid (negative)
    /// accuracy fails with [`GeoUriError::InvalidUncertainty`].
    pub fn from_location(location: Location) -> Result<Self, GeoUriError> {
        GeoUri::with_details(
            location.latitude,
            location.longitude,
            Some(location.altitude),
            Some(location.horizontal_accuracy),
        )
    }

    /// The two-dimensional position of this URI.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude(),
            longitude: self.longitude(),
        }
    }

    /// Projects this URI onto a location fix. An unspecified altitude and
    /// an unknown uncertainty both project to zero.
    pub fn location(&self) -> Location {
        Location {
            latitude: self.latitude(),
            longitude: self.longitude(),
            altitude: self.altitude().unwrap_or(0.0),
            horizontal_accuracy: self.uncertainty().unwrap_or(0.0),
        }
    }
}

impl TryFrom<Coordinate> for GeoUri {
    type Error = GeoUriError;

    fn try_from(coordinate: Coordinate) -> Result<Self, Self::Error> {
        GeoUri::from_coordinate(coordinate)
    }
}

impl TryFrom<Location> for GeoUri {
    type Error = GeoUriError;

    fn try_from(location: Location) -> Result<Self, Self::Error> {
        GeoUri::from_location(location)
    }
}

impl From<&GeoUri> for Coordinate {
    fn from(uri: &GeoUri) -> Self {
        uri.coordinate()
    }
}

impl From<&GeoUri> for Location {
    fn from(uri: &GeoUri) -> Self {
        uri.location()
    }
}
