//! Parsers for the two geo URI input surfaces.
//!
//! The string surface matches raw text against the scheme grammar; the URL
//! surface works from already-decomposed URL components. The two surfaces
//! report different top-level error kinds for similar damage ([`Malformed`]
//! versus [`BadUrl`]) because they inspect different lexical contexts, and
//! callers may depend on which one they invoked.
//!
//! [`Malformed`]: GeoUriError::Malformed
//! [`BadUrl`]: GeoUriError::BadUrl

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;
use url::Url;

use crate::coordinate::{Crs, GeoUri};
use crate::error::{GeoUriError, UrlParsingError};
use crate::validate;

/// Punctuation permitted in a geo URI string, besides letters and digits.
const ALLOWED_PUNCTUATION: &str = ":-,.;=";

/// The scheme grammar: `geo:` latitude `,` longitude, an optional third path
/// segment, and an optional `;`-delimited parameter list.
static GEO_URI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^geo:(-?[0-9]+(?:\.[0-9]+)?),(-?[0-9]+(?:\.[0-9]+)?)(?:,([^,;]+))?((?:;[^;]+)*)$")
        .expect("valid geo URI grammar")
});

/// Parses the strict string form of a geo URI.
///
/// Scheme and CRS tokens match case-insensitively. Whitespace anywhere,
/// stray characters, wrong separators, or an unparseable tail all fail with
/// [`GeoUriError::Malformed`]; there is no partial recovery.
pub fn parse_str(input: &str) -> Result<GeoUri, GeoUriError> {
    trace!(input, "parsing geo URI string");

    // Numeric content contains no letters, so folding the whole string is
    // safe and makes scheme and token matching case-insensitive in one go.
    let input = input.to_ascii_lowercase();

    if !input
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || ALLOWED_PUNCTUATION.contains(c))
    {
        return Err(GeoUriError::Malformed);
    }
    // A trailing separator means an incomplete field.
    if input.ends_with(',') || input.ends_with('=') {
        return Err(GeoUriError::Malformed);
    }

    let caps = GEO_URI_RE.captures(&input).ok_or(GeoUriError::Malformed)?;

    let latitude: f64 = caps[1].parse().map_err(|_| GeoUriError::Malformed)?;
    let longitude: f64 = caps[2].parse().map_err(|_| GeoUriError::Malformed)?;
    // The third path segment is an altitude only when it is numeric; a
    // non-numeric segment parses as "no altitude" rather than an error.
    let altitude = caps.get(3).and_then(|m| m.as_str().parse::<f64>().ok());

    let mut uncertainty = None;
    if let Some(params) = caps.get(4).filter(|m| !m.as_str().is_empty()) {
        for segment in params.as_str()[1..].split(';') {
            let (name, value) = match segment.split_once('=') {
                Some((name, value)) => {
                    if name.is_empty() || value.is_empty() || value.contains('=') {
                        return Err(GeoUriError::Malformed);
                    }
                    (name, Some(value))
                }
                None => (segment, None),
            };
            match (name, value) {
                ("crs", Some(token)) => {
                    Crs::from_token(token)
                        .ok_or_else(|| GeoUriError::UnsupportedCrs(token.to_string()))?;
                }
                ("u", Some(value)) => {
                    // Numeric values are taken, the last one winning;
                    // negatives fail validation below. Anything else carries
                    // no usable uncertainty and is dropped.
                    if let Ok(parsed) = value.parse::<f64>() {
                        uncertainty = Some(parsed);
                    }
                }
                // Bare crs/u carry no value; unknown parameters are ignored.
                _ => {}
            }
        }
    }

    validate::validate(latitude, longitude, altitude, uncertainty)
}

/// Parses a geo URI from an already-decomposed [`Url`].
///
/// All failures are wrapped with the offending URL so callers can report
/// both the error and the input it came from.
pub fn parse_url(url: &Url) -> Result<GeoUri, UrlParsingError> {
    trace!(%url, "parsing geo URI from URL");

    parse_url_parts(url).map_err(|kind| UrlParsingError {
        url: url.to_string(),
        kind,
    })
}

/// Decomposes `input` as a URL and parses the result; inputs that are not
/// URLs at all fail with [`GeoUriError::BadUrl`].
pub fn parse_url_str(input: &str) -> Result<GeoUri, UrlParsingError> {
    let url = Url::parse(input).map_err(|_| UrlParsingError {
        url: input.to_string(),
        kind: GeoUriError::BadUrl,
    })?;
    parse_url(&url)
}

fn parse_url_parts(url: &Url) -> Result<GeoUri, GeoUriError> {
    if !url.scheme().eq_ignore_ascii_case("geo") {
        return Err(GeoUriError::IncorrectScheme);
    }

    let segments: Vec<&str> = url.path().split(',').collect();
    if !matches!(segments.len(), 2 | 3) {
        return Err(GeoUriError::BadUrl);
    }
    let mut numbers = Vec::with_capacity(segments.len());
    for segment in &segments {
        numbers.push(segment.parse::<f64>().map_err(|_| GeoUriError::BadUrl)?);
    }
    let latitude = numbers[0];
    let longitude = numbers[1];
    let altitude = numbers.get(2).copied();

    // Query items are resolved before range validation, so a bad CRS is
    // reported even when the coordinates are out of range too.
    if let Some(token) = query_value(url, "crs", &["crs"])? {
        Crs::from_token(token).ok_or_else(|| GeoUriError::UnsupportedCrs(token.to_string()))?;
    }
    let uncertainty = match query_value(url, "u", &["u", "uncertainty"])? {
        Some(value) => Some(
            value
                .parse::<f64>()
                .map_err(|_| GeoUriError::InvalidUncertainty)?,
        ),
        None => None,
    };

    validate::validate(latitude, longitude, altitude, uncertainty)
}

/// Looks up a query item by case-folded name, `names` listing the accepted
/// spellings. Returns `None` when the item is absent; more than one
/// occurrence or an item without a value at all (`?u` as opposed to `?u=`)
/// is an error. Unrelated query items are ignored.
fn query_value<'u>(
    url: &'u Url,
    canonical: &str,
    names: &[&str],
) -> Result<Option<&'u str>, GeoUriError> {
    let Some(query) = url.query() else {
        return Ok(None);
    };

    let mut found: Option<Option<&str>> = None;
    for item in query.split('&') {
        if item.is_empty() {
            continue;
        }
        let (name, value) = match item.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (item, None),
        };
        if !names.iter().any(|n| name.eq_ignore_ascii_case(n)) {
            continue;
        }
        if found.is_some() {
            return Err(GeoUriError::DuplicateQueryItem(canonical.to_string()));
        }
        found = Some(value);
    }

    match found {
        None => Ok(None),
        Some(Some(value)) => Ok(Some(value)),
        Some(None) => Err(GeoUriError::InvalidQueryItem(canonical.to_string())),
    }
}
