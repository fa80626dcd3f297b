//! Sexagesimal coordinate parsing.
//!
//! Catalog entries carry their coordinates as display strings: right ascension
//! in hours/minutes/seconds (`"00h 42m 44s"`) and declination in signed
//! degrees/arcminutes/arcseconds (`"+41° 16′ 09″"`). This module converts both
//! to decimal degrees.
//!
//! Parsing is deliberately forgiving: a string that does not match the
//! expected pattern resolves to `0.0` rather than an error, so one malformed
//! catalog entry produces a well-defined (if wrong) coordinate instead of
//! aborting a whole visibility batch.

use once_cell::sync::Lazy;
use regex::Regex;

static RA_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*h\s*(\d+)\s*m\s*(\d+(?:\.\d+)?)\s*s").unwrap()
});

static DEC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([+-]?\d+)\s*[°d]\s*(\d+)\s*[′'m]\s*(\d+(?:\.\d+)?)\s*[″"s]?"#).unwrap()
});

/// Parse a right ascension string (`"HHh MMm SSs"`) to decimal degrees.
///
/// One hour of right ascension is 15 degrees. Returns `0.0` when the input
/// does not contain the three numeric groups.
pub fn parse_ra_to_degrees(text: &str) -> f64 {
    let Some(caps) = RA_REGEX.captures(text) else {
        return 0.0;
    };
    let hours: f64 = caps[1].parse().unwrap_or(0.0);
    let minutes: f64 = caps[2].parse().unwrap_or(0.0);
    let seconds: f64 = caps[3].parse().unwrap_or(0.0);

    (hours + minutes / 60.0 + seconds / 3600.0) * 15.0
}

/// Parse a declination string (`"±DD° MM′ SS″"`) to decimal degrees.
///
/// A Unicode minus sign (U+2212) is accepted in place of an ASCII hyphen.
/// The sign is taken from a literal leading `-` on the degrees group, so
/// `"-00° 30′ 00″"` parses to `-0.5` (a numeric sign test would lose the
/// sign of a zero-degree southern coordinate). Returns `0.0` on non-matching
/// input.
pub fn parse_dec_to_degrees(text: &str) -> f64 {
    let normalized = text.replace('\u{2212}', "-");
    let Some(caps) = DEC_REGEX.captures(&normalized) else {
        return 0.0;
    };
    let degrees_raw = &caps[1];
    let sign = if degrees_raw.starts_with('-') { -1.0 } else { 1.0 };
    let degrees: f64 = degrees_raw.trim_start_matches(['+', '-']).parse().unwrap_or(0.0);
    let minutes: f64 = caps[2].parse().unwrap_or(0.0);
    let seconds: f64 = caps[3].parse().unwrap_or(0.0);

    sign * (degrees + minutes / 60.0 + seconds / 3600.0)
}
