//! Data Transfer Objects for the HTTP API.
//!
//! Request/response serialization types. Wire names are camelCase. The
//! visibility results, catalog entries, and telescope state already derive
//! `Serialize` in their own modules and are re-exported here.

use serde::{Deserialize, Serialize};

pub use crate::astro::visibility::VisibilityResult;
pub use crate::catalog::CelestialObject;
pub use crate::telescope::{ConfigUpdate, TelescopeState};
pub use crate::weather::WeatherReading;

/// Query parameters for the catalog search endpoint.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ObjectsQuery {
    /// Case-insensitive substring to match against id, name, or type
    #[serde(default)]
    pub q: Option<String>,
}

/// Query parameters for the visibility endpoint. Every field is optional;
/// missing values fall back to the configured site, "now", and 15 degrees.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct VisibleQuery {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    /// RFC 3339 timestamp
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default, rename = "minAlt")]
    pub min_alt: Option<f64>,
}

/// Envelope for the weather endpoint. The shape is fixed: `ok` plus either
/// a reading or an error string.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<WeatherReading>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WeatherResponse {
    pub fn success(reading: WeatherReading) -> Self {
        Self {
            ok: true,
            reading: Some(reading),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            reading: None,
            error: Some(error.into()),
        }
    }
}

/// Request body for the target-change endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SetTargetRequest {
    /// Catalog id of the new target
    pub id: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_success_envelope_shape() {
        let reading = WeatherReading {
            temperature: Some(18.5),
            humidity: None,
            pressure: Some(1013.2),
            wind_speed: Some(4.7),
            read_at: "2024-01-15T10:00:00Z".to_string(),
        };
        let json = serde_json::to_value(WeatherResponse::success(reading)).unwrap();

        assert_eq!(json["ok"], true);
        assert_eq!(json["reading"]["temperature"], 18.5);
        assert_eq!(json["reading"]["humidity"], serde_json::Value::Null);
        assert_eq!(json["reading"]["windSpeed"], 4.7);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn weather_failure_envelope_shape() {
        let json = serde_json::to_value(WeatherResponse::failure("feed unreachable")).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["error"], "feed unreachable");
        assert!(json.get("reading").is_none());
    }

    #[test]
    fn visible_query_accepts_min_alt_camel_case() {
        let q: VisibleQuery =
            serde_json::from_str(r#"{"lat": -37.8, "minAlt": 20.0}"#).unwrap();
        assert_eq!(q.lat, Some(-37.8));
        assert_eq!(q.min_alt, Some(20.0));
        assert!(q.time.is_none());
    }

    #[test]
    fn visibility_result_serializes_flat() {
        use crate::astro::{visible_objects, ObserverContext};
        use chrono::TimeZone;

        let t = chrono::Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let ctx = ObserverContext::new(-37.8136, 144.9631, t).with_min_altitude(-90.0);
        let results = visible_objects(crate::catalog::all(), &ctx);
        let json = serde_json::to_value(&results[0]).unwrap();

        // Catalog fields are flattened alongside the annotations.
        assert!(json["id"].is_string());
        assert!(json["type"].is_string());
        assert!(json["altitude"].is_number());
        assert!(json["visible"].is_boolean());
    }
}
