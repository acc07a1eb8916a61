//! Parsing, validation, and formatting of RFC 5870 `geo` URIs
//!
//! A `geo` URI identifies a geographic location by latitude, longitude, an
//! optional altitude, a coordinate reference system (always WGS-84), and an
//! optional uncertainty radius. This crate turns such URIs into immutable
//! [`GeoUri`] values and back, with nothing stored that has not passed
//! validation.
//!
//! # Features
//!
//! - Strict string-surface grammar and a URL surface with its own error
//!   kinds, both feeding a single validating constructor
//! - Pole and date-line longitude normalization applied on construction
//! - Canonical decimal rendering (at most 8 fractional digits, no grouping,
//!   locale-invariant) and round-trippable short/full/URL output forms
//! - Structural, exact equality over all five fields
//! - Everything is pure and side-effect free; values are `Copy` and safe to
//!   share across threads
//!
//! # Example
//!
//! ```rust
//! use geouri::GeoUri;
//!
//! let uri = GeoUri::parse("geo:48.201,16.3695,183;crs=wgs84;u=66.6").unwrap();
//! assert_eq!(uri.latitude(), 48.201);
//! assert_eq!(uri.altitude(), Some(183.0));
//! assert_eq!(uri.uncertainty(), Some(66.6));
//!
//! assert_eq!(uri.to_short_string(), "geo:48.201,16.3695,183;u=66.6");
//! assert_eq!(uri.to_url().as_str(), "geo:48.201,16.3695,183?crs=wgs84&u=66.6");
//! ```

pub mod coordinate;
pub mod error;
pub mod location;
mod number;
pub mod parser;
pub mod serializer;
pub mod validate;

pub use coordinate::{Crs, GeoUri};
pub use error::{GeoUriError, UrlParsingError};
pub use location::{Coordinate, Location};
pub use parser::{parse_str, parse_url, parse_url_str};
pub use serializer::{to_uri_string, to_url};
pub use validate::validate;
