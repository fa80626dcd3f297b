//! Equatorial to horizontal coordinate transform.
//!
//! Converts an object's right ascension and declination into a topocentric
//! altitude for an observer at a given latitude/longitude and instant. The
//! chain is: Greenwich Sidereal Time -> Local Sidereal Time -> hour angle ->
//! altitude via the spherical-trigonometry formula. No refraction or other
//! astrometric corrections are applied.

use chrono::{DateTime, Utc};

use super::time::{greenwich_sidereal_time, julian_date};

/// Local Sidereal Time in degrees, longitude positive east.
///
/// `gst` is expected in `[0, 360)`; the `+360` keeps the intermediate
/// non-negative for west longitudes before the modulo.
pub fn local_sidereal_time(gst_deg: f64, lon_deg: f64) -> f64 {
    (gst_deg + lon_deg + 360.0) % 360.0
}

/// Hour angle in degrees, folded into `[-180, 180)`.
///
/// The raw `lst - ra` difference can land anywhere in `(-360, 360)`; the
/// `+540 / -180` fold keeps the subsequent trig well-conditioned regardless
/// of wraparound. An exact meridian-opposite difference maps to -180, which
/// is equivalent to +180 under the even cosine.
pub fn hour_angle(lst_deg: f64, ra_deg: f64) -> f64 {
    ((lst_deg - ra_deg + 540.0) % 360.0) - 180.0
}

/// Topocentric altitude in degrees, in `[-90, 90]`.
///
/// `sin(alt) = sin(dec)·sin(lat) + cos(dec)·cos(lat)·cos(HA)`. The sine is
/// clamped to `[-1, 1]` before the inverse so floating-point overshoot can
/// never produce a NaN for one entry of a batch.
pub fn altitude_degrees(
    t: DateTime<Utc>,
    lat_deg: f64,
    lon_deg: f64,
    ra_deg: f64,
    dec_deg: f64,
) -> f64 {
    let gst = greenwich_sidereal_time(julian_date(t));
    let lst = local_sidereal_time(gst, lon_deg);
    let ha = hour_angle(lst, ra_deg).to_radians();

    let lat = lat_deg.to_radians();
    let dec = dec_deg.to_radians();

    let sin_alt = dec.sin() * lat.sin() + dec.cos() * lat.cos() * ha.cos();
    sin_alt.clamp(-1.0, 1.0).asin().to_degrees()
}
