//! Range validation and normalization for geographic coordinates.

use crate::coordinate::{Crs, GeoUri};
use crate::error::GeoUriError;

/// Validates raw coordinate fields and produces a [`GeoUri`].
///
/// This is the only construction path: every value that exists has passed
/// through here. Validation is all-or-nothing and the first violation wins.
///
/// Longitude is normalized on the way in: at the poles (latitude of exactly
/// -90 or 90) longitude is undefined and stored as 0; -180 and +180 name the
/// same meridian and are stored canonically as +180.
pub fn validate(
    latitude: f64,
    longitude: f64,
    altitude: Option<f64>,
    uncertainty: Option<f64>,
) -> Result<GeoUri, GeoUriError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(GeoUriError::InvalidLatitude(latitude));
    }

    if !(-180.0..=180.0).contains(&longitude) {
        return Err(GeoUriError::InvalidLongitude(longitude));
    }

    let longitude = if latitude == -90.0 || latitude == 90.0 {
        0.0
    } else if longitude == -180.0 {
        180.0
    } else {
        longitude
    };

    if let Some(uncertainty) = uncertainty {
        if uncertainty.is_nan() || uncertainty < 0.0 {
            return Err(GeoUriError::InvalidUncertainty);
        }
    }

    Ok(GeoUri {
        latitude,
        longitude,
        altitude,
        crs: Crs::Wgs84,
        uncertainty,
    })
}
