//! Visibility classification over the catalog.
//!
//! Applies the horizontal transform to every catalog entry for one observer
//! context and classifies each against the minimum-altitude threshold. All
//! functions here are pure: no I/O, no shared state, safe to call
//! concurrently.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::horizontal::altitude_degrees;
use super::sexagesimal::{parse_dec_to_degrees, parse_ra_to_degrees};
use crate::catalog::CelestialObject;

/// Default minimum altitude in degrees when the caller supplies none.
pub const DEFAULT_MIN_ALTITUDE_DEG: f64 = 15.0;

/// Observer location, instant, and threshold for one visibility request.
///
/// Transient: built per request, never stored.
#[derive(Debug, Clone, Copy)]
pub struct ObserverContext {
    /// Geodetic latitude, degrees north.
    pub latitude_deg: f64,
    /// Longitude, degrees east positive.
    pub longitude_deg: f64,
    pub timestamp: DateTime<Utc>,
    pub min_altitude_deg: f64,
}

impl ObserverContext {
    pub fn new(latitude_deg: f64, longitude_deg: f64, timestamp: DateTime<Utc>) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            timestamp,
            min_altitude_deg: DEFAULT_MIN_ALTITUDE_DEG,
        }
    }

    pub fn with_min_altitude(mut self, min_altitude_deg: f64) -> Self {
        self.min_altitude_deg = min_altitude_deg;
        self
    }
}

/// A catalog entry annotated with its computed altitude.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityResult {
    #[serde(flatten)]
    pub object: CelestialObject,
    /// Topocentric altitude, rounded to one decimal place.
    pub altitude: f64,
    pub visible: bool,
}

/// Annotate every catalog entry with altitude and visibility, catalog order
/// preserved. Entries below the threshold are included with `visible: false`.
///
/// Altitude is rounded to one decimal place with `f64::round` semantics
/// (half away from zero).
pub fn annotate_all(catalog: &[CelestialObject], ctx: &ObserverContext) -> Vec<VisibilityResult> {
    catalog
        .iter()
        .map(|object| {
            let ra_deg = parse_ra_to_degrees(&object.ra);
            let dec_deg = parse_dec_to_degrees(&object.dec);
            let altitude = round1(altitude_degrees(
                ctx.timestamp,
                ctx.latitude_deg,
                ctx.longitude_deg,
                ra_deg,
                dec_deg,
            ));
            VisibilityResult {
                object: object.clone(),
                altitude,
                visible: altitude >= ctx.min_altitude_deg,
            }
        })
        .collect()
}

/// The subset of [`annotate_all`] with `altitude >= min_altitude_deg`,
/// catalog order preserved.
pub fn visible_objects(catalog: &[CelestialObject], ctx: &ObserverContext) -> Vec<VisibilityResult> {
    annotate_all(catalog, ctx)
        .into_iter()
        .filter(|r| r.visible)
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
