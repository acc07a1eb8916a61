//! Canonical decimal rendering of coordinate values.

/// Eight decimal degrees is roughly 1.1 mm at the equator; anything finer is
/// noise and gets dropped rather than rounded.
const MAX_FRACTION_DIGITS: usize = 8;

/// Renders a value in plain decimal notation, never scientific: at most
/// eight fractional digits with the excess truncated, trailing fractional
/// zeros trimmed, no grouping separators, and a leading `-` only for
/// negative values.
pub(crate) fn format_number(value: f64) -> String {
    // f64's Display is the shortest decimal expansion that round-trips, so
    // only the fraction length needs policing.
    let mut out = value.to_string();
    if let Some(dot) = out.find('.') {
        out.truncate(dot + 1 + MAX_FRACTION_DIGITS);
        while out.ends_with('0') {
            out.pop();
        }
        if out.ends_with('.') {
            out.pop();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_integers_without_fraction() {
        assert_eq!(format_number(183.0), "183");
        assert_eq!(format_number(-10920.0), "-10920");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(format_number(48.2010), "48.201");
        assert_eq!(format_number(66.60), "66.6");
    }

    #[test]
    fn truncates_to_eight_fraction_digits() {
        assert_eq!(format_number(1.0 / 3.0), "0.33333333");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(0.000000001), "0");
    }

    #[test]
    fn never_uses_scientific_notation() {
        assert_eq!(format_number(1e9), "1000000000");
        assert_eq!(format_number(1e-7), "0.0000001");
    }

    #[test]
    fn signs_negative_values_only() {
        assert_eq!(format_number(-0.5), "-0.5");
        assert_eq!(format_number(8848.86), "8848.86");
    }
}
