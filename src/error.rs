//! Error taxonomy for geo URI parsing and validation.

use thiserror::Error;

/// Errors produced while parsing or validating a geo URI.
///
/// Every variant is terminal: invalid input is a permanent, caller-fixable
/// condition, so nothing is retried and no partial value is ever produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoUriError {
    /// The text does not match the geo URI grammar.
    #[error("syntax is invalid")]
    Malformed,

    /// The URL could not be decomposed into a geo URI.
    #[error("the URL is not a valid geo URI")]
    BadUrl,

    /// The URL scheme is not `geo`.
    #[error("the URL scheme must be 'geo'")]
    IncorrectScheme,

    #[error("invalid latitude: {0} (must be between -90 and 90)")]
    InvalidLatitude(f64),

    #[error("invalid longitude: {0} (must be between -180 and 180)")]
    InvalidLongitude(f64),

    /// The uncertainty is negative or not a number.
    #[error("invalid uncertainty (must be zero or greater)")]
    InvalidUncertainty,

    /// A coordinate reference system other than WGS-84 was requested.
    #[error("unsupported coordinate reference system '{0}'")]
    UnsupportedCrs(String),

    #[error("the '{0}' query item was specified more than once")]
    DuplicateQueryItem(String),

    #[error("the '{0}' query item is invalid")]
    InvalidQueryItem(String),
}

/// An error parsing a geo URI from a URL.
///
/// Wraps the underlying [`GeoUriError`] together with the input that caused
/// it, so callers can report both what was wrong and in which URL.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("cannot parse geo URI from '{url}': {kind}")]
pub struct UrlParsingError {
    /// The URL that could not be parsed.
    pub url: String,
    /// The underlying failure.
    #[source]
    pub kind: GeoUriError,
}
