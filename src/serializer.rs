//! Rendering of geo URIs back to text and URLs.

use std::fmt::Write;

use url::Url;

use crate::coordinate::GeoUri;
use crate::number::format_number;

/// Renders the semicolon-delimited string form of a geo URI.
///
/// The path carries latitude, longitude, and the altitude when one is
/// present; `include_crs` controls the `;crs=` parameter; `;u=` is appended
/// whenever the uncertainty is known, regardless of `include_crs`.
pub fn to_uri_string(uri: &GeoUri, include_crs: bool) -> String {
    let mut out = String::from("geo:");
    out.push_str(&coordinate_path(uri));

    if include_crs {
        write!(out, ";crs={}", uri.crs()).unwrap();
    }
    if let Some(uncertainty) = uri.uncertainty() {
        write!(out, ";u={}", format_number(uncertainty)).unwrap();
    }

    out
}

/// Renders the URL form of a geo URI. The `crs` query item is always
/// emitted; `u` only when the uncertainty is known.
pub fn to_url(uri: &GeoUri) -> Url {
    let mut out = String::from("geo:");
    out.push_str(&coordinate_path(uri));

    write!(out, "?crs={}", uri.crs()).unwrap();
    if let Some(uncertainty) = uri.uncertainty() {
        write!(out, "&u={}", format_number(uncertainty)).unwrap();
    }

    // The rendering above uses only unreserved URL characters.
    Url::parse(&out).expect("rendered geo URI is a valid URL")
}

fn coordinate_path(uri: &GeoUri) -> String {
    let mut path = format_number(uri.latitude());
    path.push(',');
    path.push_str(&format_number(uri.longitude()));
    if let Some(altitude) = uri.altitude() {
        path.push(',');
        path.push_str(&format_number(altitude));
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::GeoUri;

    #[test]
    fn renders_short_and_full_forms() {
        let uri = GeoUri::new(48.2010, 16.3695).unwrap();
        assert_eq!(to_uri_string(&uri, false), "geo:48.201,16.3695");
        assert_eq!(to_uri_string(&uri, true), "geo:48.201,16.3695;crs=wgs84");
    }

    #[test]
    fn altitude_is_omitted_when_absent() {
        let uri = GeoUri::with_details(48.2010, 16.3695, Some(183.0), None).unwrap();
        assert_eq!(to_uri_string(&uri, true), "geo:48.201,16.3695,183;crs=wgs84");
    }

    #[test]
    fn uncertainty_is_rendered_in_both_forms() {
        let uri = GeoUri::with_details(48.2010, 16.3695, Some(183.0), Some(66.6)).unwrap();
        assert_eq!(
            to_uri_string(&uri, true),
            "geo:48.201,16.3695,183;crs=wgs84;u=66.6"
        );
        assert_eq!(to_uri_string(&uri, false), "geo:48.201,16.3695,183;u=66.6");
    }

    #[test]
    fn renders_urls_with_query_items() {
        let uri = GeoUri::new(48.2010, 16.3695).unwrap();
        assert_eq!(to_url(&uri).as_str(), "geo:48.201,16.3695?crs=wgs84");

        let uri = GeoUri::with_details(48.2010, 16.3695, Some(123.45), Some(666.0)).unwrap();
        assert_eq!(
            to_url(&uri).as_str(),
            "geo:48.201,16.3695,123.45?crs=wgs84&u=666"
        );
    }

    #[test]
    fn renders_normalized_polar_and_date_line_urls() {
        let north = GeoUri::new(90.0, 16.3695).unwrap();
        assert_eq!(to_url(&north).as_str(), "geo:90,0?crs=wgs84");

        let south = GeoUri::new(-90.0, 16.3695).unwrap();
        assert_eq!(to_url(&south).as_str(), "geo:-90,0?crs=wgs84");

        let west = GeoUri::new(48.2010, -180.0).unwrap();
        assert_eq!(to_url(&west).as_str(), "geo:48.201,180?crs=wgs84");
    }
}
