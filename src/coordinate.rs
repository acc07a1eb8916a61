//! The geo URI value type and its trait surface.

use std::fmt;
use std::str::FromStr;

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

use crate::error::{GeoUriError, UrlParsingError};
use crate::{parser, serializer, validate};

/// Coordinate reference system used to interpret coordinate values.
///
/// WGS-84 is the only CRS RFC 5870 defines. The enum is closed so that a
/// future registration can be added without reshaping the API; any token
/// other than a known member is a hard parse error, never a fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crs {
    /// The World Geodetic System 1984.
    #[default]
    Wgs84,
}

impl Crs {
    /// The wire token, always lowercase.
    pub fn token(self) -> &'static str {
        match self {
            Crs::Wgs84 => "wgs84",
        }
    }

    /// Matches a wire token case-insensitively.
    pub(crate) fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("wgs84") {
            Some(Crs::Wgs84)
        } else {
            None
        }
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A geographic location identifier using the `geo` URI scheme (RFC 5870).
///
/// A value is produced whole by one of the validating entry points or not at
/// all, and is never mutated afterwards. The invariants hold for its entire
/// lifetime: latitude within [-90, 90]; longitude within [-180, 180] with
/// the pole and date-line normalizations applied; uncertainty absent or at
/// least zero.
///
/// Equality is structural and exact over all five fields, per RFC 5870
/// §3.4.4. An absent altitude means "unspecified" and compares unequal to an
/// altitude of zero; absent uncertainty means "unknown" and compares unequal
/// to an uncertainty of zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoUri {
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
    pub(crate) altitude: Option<f64>,
    pub(crate) crs: Crs,
    pub(crate) uncertainty: Option<f64>,
}

impl GeoUri {
    /// Creates a validated geo URI from a latitude/longitude pair in decimal
    /// degrees.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoUriError> {
        validate::validate(latitude, longitude, None, None)
    }

    /// Creates a validated geo URI with an optional altitude and uncertainty
    /// radius, both in meters.
    pub fn with_details(
        latitude: f64,
        longitude: f64,
        altitude: Option<f64>,
        uncertainty: Option<f64>,
    ) -> Result<Self, GeoUriError> {
        validate::validate(latitude, longitude, altitude, uncertainty)
    }

    /// Latitude in decimal degrees. Southern hemisphere values are negative.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees. Western hemisphere values are negative.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Altitude in meters, if specified. Depths below the reference geoid
    /// are negative. An absent altitude may be read as "on the surface at
    /// this position" but must not be conflated with an altitude of zero.
    pub fn altitude(&self) -> Option<f64> {
        self.altitude
    }

    /// The coordinate reference system the values are expressed in.
    pub fn crs(&self) -> Crs {
        self.crs
    }

    /// Uncertainty radius in meters, if known. Zero means "precisely this
    /// point" and is not the same thing as unknown.
    pub fn uncertainty(&self) -> Option<f64> {
        self.uncertainty
    }

    /// Parses the strict string form, e.g. `geo:48.201,16.3695;u=10`.
    pub fn parse(input: &str) -> Result<Self, GeoUriError> {
        parser::parse_str(input)
    }

    /// Like [`GeoUri::parse`], but tolerates surrounding whitespace.
    pub fn parse_trimmed(input: &str) -> Result<Self, GeoUriError> {
        parser::parse_str(input.trim())
    }

    /// Parses the URL form of a geo URI.
    pub fn from_url(url: &Url) -> Result<Self, UrlParsingError> {
        parser::parse_url(url)
    }

    /// Decomposes `input` as a URL and parses the result.
    pub fn from_url_str(input: &str) -> Result<Self, UrlParsingError> {
        parser::parse_url_str(input)
    }

    /// Renders the semicolon-delimited string form.
    pub fn to_uri_string(&self, include_crs: bool) -> String {
        serializer::to_uri_string(self, include_crs)
    }

    /// The short form: the CRS parameter is omitted, uncertainty is still
    /// included when known.
    pub fn to_short_string(&self) -> String {
        self.to_uri_string(false)
    }

    /// The full form: the CRS parameter is always included.
    pub fn to_full_string(&self) -> String {
        self.to_uri_string(true)
    }

    /// Renders the URL form, carrying the CRS and uncertainty as query
    /// items.
    pub fn to_url(&self) -> Url {
        serializer::to_url(self)
    }
}

impl fmt::Display for GeoUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_full_string())
    }
}

impl FromStr for GeoUri {
    type Err = GeoUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_str(s)
    }
}

impl<'de> Deserialize<'de> for GeoUri {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            latitude: f64,
            longitude: f64,
            #[serde(default)]
            altitude: Option<f64>,
            #[serde(default)]
            crs: Option<Crs>,
            #[serde(default)]
            uncertainty: Option<f64>,
        }

        // Deserialized values take the same validated path as parsed ones,
        // so an out-of-invariant instance cannot come in through serde.
        let raw = Raw::deserialize(deserializer)?;
        let crs = raw.crs.unwrap_or_default();
        let uri = validate::validate(raw.latitude, raw.longitude, raw.altitude, raw.uncertainty)
            .map_err(Error::custom)?;
        Ok(GeoUri { crs, ..uri })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_minimal_value() {
        let uri = GeoUri::new(48.201, 16.3695).unwrap();
        assert_eq!(uri.latitude(), 48.201);
        assert_eq!(uri.longitude(), 16.3695);
        assert_eq!(uri.altitude(), None);
        assert_eq!(uri.crs(), Crs::Wgs84);
        assert_eq!(uri.uncertainty(), None);
    }

    #[test]
    fn equality_covers_every_field() {
        let a = GeoUri::new(48.201, 16.3695).unwrap();
        let b = GeoUri::new(48.201, 16.3695).unwrap();
        assert_eq!(a, b);

        let moved = GeoUri::new(48.20101, 16.3695).unwrap();
        assert_ne!(a, moved);

        let surfaced = GeoUri::with_details(48.201, 16.3695, Some(0.0), None).unwrap();
        assert_ne!(a, surfaced);

        let pinned = GeoUri::with_details(48.201, 16.3695, None, Some(0.0)).unwrap();
        assert_ne!(a, pinned);
    }

    #[test]
    fn display_is_the_full_form() {
        let uri = GeoUri::with_details(48.201, 16.3695, Some(183.0), Some(66.6)).unwrap();
        assert_eq!(uri.to_string(), "geo:48.201,16.3695,183;crs=wgs84;u=66.6");
    }

    #[test]
    fn from_str_is_the_strict_surface() {
        let uri: GeoUri = "geo:48.201,16.3695".parse().unwrap();
        assert_eq!(uri.latitude(), 48.201);
        assert_eq!(
            " geo:48.201,16.3695".parse::<GeoUri>(),
            Err(GeoUriError::Malformed)
        );
    }

    #[test]
    fn parse_trimmed_tolerates_whitespace() {
        let uri = GeoUri::parse_trimmed(" geo:48.201,16.3695 ").unwrap();
        assert_eq!(uri.latitude(), 48.201);
    }

    #[test]
    fn crs_token_round_trips() {
        assert_eq!(Crs::from_token("wgs84"), Some(Crs::Wgs84));
        assert_eq!(Crs::from_token("WGS84"), Some(Crs::Wgs84));
        assert_eq!(Crs::from_token("nad27"), None);
        assert_eq!(Crs::Wgs84.to_string(), "wgs84");
    }

    #[test]
    fn serde_round_trip() {
        let uri = GeoUri::with_details(-48.201, -16.3695, Some(300.0), Some(10.0)).unwrap();
        let json = serde_json::to_string(&uri).unwrap();
        let back: GeoUri = serde_json::from_str(&json).unwrap();
        assert_eq!(back, uri);
    }

    #[test]
    fn serde_defaults_optional_fields() {
        let uri: GeoUri =
            serde_json::from_str(r#"{"latitude":48.201,"longitude":16.3695}"#).unwrap();
        assert_eq!(uri.altitude(), None);
        assert_eq!(uri.crs(), Crs::Wgs84);
        assert_eq!(uri.uncertainty(), None);
    }

    #[test]
    fn serde_enforces_invariants() {
        assert!(
            serde_json::from_str::<GeoUri>(r#"{"latitude":90.01,"longitude":16.3695}"#).is_err()
        );
        assert!(serde_json::from_str::<GeoUri>(
            r#"{"latitude":48.201,"longitude":16.3695,"uncertainty":-1.0}"#
        )
        .is_err());
        assert!(serde_json::from_str::<GeoUri>(
            r#"{"latitude":48.201,"longitude":16.3695,"crs":"nad27"}"#
        )
        .is_err());
    }

    #[test]
    fn serde_normalizes_like_construction() {
        let uri: GeoUri =
            serde_json::from_str(r#"{"latitude":90.0,"longitude":16.3695}"#).unwrap();
        assert_eq!(uri.longitude(), 0.0);

        let uri: GeoUri =
            serde_json::from_str(r#"{"latitude":48.201,"longitude":-180.0}"#).unwrap();
        assert_eq!(uri.longitude(), 180.0);
    }
}
