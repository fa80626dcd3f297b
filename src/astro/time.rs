//! Astronomical time scales.
//!
//! Civil timestamps come in as UTC instants and leave as a Julian Date, from
//! which Greenwich Sidereal Time is derived. Both are expressed as plain
//! `f64` values: days for JD, degrees in `[0, 360)` for GST.

use chrono::{DateTime, Utc};

/// Julian Date of the Unix epoch (1970-01-01 00:00:00 UTC).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Date of the J2000.0 reference epoch.
const J2000_JD: f64 = 2_451_545.0;

/// Convert a UTC instant to a Julian Date.
///
/// Exact to the millisecond resolution of the input instant.
pub fn julian_date(t: DateTime<Utc>) -> f64 {
    t.timestamp_millis() as f64 / 86_400_000.0 + UNIX_EPOCH_JD
}

/// Greenwich Mean Sidereal Time for a Julian Date, in degrees.
///
/// Uses the IAU 1982 polynomial in Julian centuries since J2000.0. The raw
/// polynomial grows without bound (and is negative before J2000), so the
/// result is reduced into `[0, 360)` with a sign-correcting modulo.
pub fn greenwich_sidereal_time(jd: f64) -> f64 {
    let d = jd - J2000_JD;
    let t = d / 36_525.0;
    let theta = 280.460_618_37
        + 360.985_647_366_29 * d
        + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;

    ((theta % 360.0) + 360.0) % 360.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn julian_date_of_unix_epoch() {
        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        assert_eq!(julian_date(epoch), 2_440_587.5);
    }

    #[test]
    fn julian_date_millisecond_resolution() {
        let t = Utc.timestamp_millis_opt(86_400_000 + 500).unwrap();
        let jd = julian_date(t);
        let expected = 2_440_588.5 + 500.0 / 86_400_000.0;
        assert!((jd - expected).abs() < 1e-12);
    }

    #[test]
    fn gst_in_range_for_modern_dates() {
        let t = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let gst = greenwich_sidereal_time(julian_date(t));
        assert!((0.0..360.0).contains(&gst));
    }

    #[test]
    fn gst_in_range_before_j2000() {
        // Negative polynomial intermediate still reduces into range.
        let t = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        let gst = greenwich_sidereal_time(julian_date(t));
        assert!((0.0..360.0).contains(&gst));

        let t = Utc.with_ymd_and_hms(1900, 3, 15, 6, 30, 0).unwrap();
        let gst = greenwich_sidereal_time(julian_date(t));
        assert!((0.0..360.0).contains(&gst));
    }

    #[test]
    fn gst_in_range_far_future() {
        let t = Utc.with_ymd_and_hms(2500, 12, 31, 23, 59, 59).unwrap();
        let gst = greenwich_sidereal_time(julian_date(t));
        assert!((0.0..360.0).contains(&gst));
    }

    #[test]
    fn gst_known_value_j2000() {
        // GMST at the J2000.0 epoch itself: the polynomial's constant term.
        let gst = greenwich_sidereal_time(J2000_JD);
        assert!((gst - 280.460_618_37).abs() < 1e-9);
    }
}
