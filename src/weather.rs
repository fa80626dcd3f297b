//! Weather feed proxy.
//!
//! Fetches a third-party weather feed and reshapes it into the fixed
//! `WeatherReading` form the API exposes. Upstream payloads are loosely
//! typed (numbers sometimes arrive as strings), so each numeric field is
//! coerced individually and becomes `null` when it is missing or not a
//! finite number. Failures are surfaced to the caller; there is no retry
//! here.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Errors from the upstream weather fetch.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("weather feed returned status {0}")]
    Status(u16),

    #[error("weather feed payload could not be decoded: {0}")]
    Decode(String),
}

/// Reshaped weather reading. Numeric fields are `None` when the upstream
/// value was absent or not finite-parseable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReading {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub pressure: Option<f64>,
    pub wind_speed: Option<f64>,
    /// Upstream observation timestamp, or the fetch time when absent.
    pub read_at: String,
}

/// Raw upstream payload. Field values are kept as JSON values so string and
/// numeric encodings can both be coerced.
#[derive(Debug, Deserialize)]
pub struct UpstreamPayload {
    #[serde(default)]
    temperature: Option<Value>,
    #[serde(default)]
    humidity: Option<Value>,
    #[serde(default)]
    pressure: Option<Value>,
    #[serde(default, alias = "windSpeed", alias = "wind_speed")]
    wind_speed: Option<Value>,
    #[serde(default, alias = "readAt", alias = "read_at", alias = "timestamp")]
    read_at: Option<String>,
}

/// Fetch the current reading from the configured feed URL.
pub async fn fetch_current(client: &reqwest::Client, url: &str) -> Result<WeatherReading, WeatherError> {
    debug!(url, "fetching weather feed");
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(WeatherError::Status(status.as_u16()));
    }

    let payload: UpstreamPayload = response
        .json()
        .await
        .map_err(|e| WeatherError::Decode(e.to_string()))?;

    Ok(reshape(payload))
}

/// Reshape an upstream payload into a `WeatherReading`. Pure; split out from
/// the fetch so it can be tested without a server.
pub fn reshape(payload: UpstreamPayload) -> WeatherReading {
    WeatherReading {
        temperature: coerce_finite(payload.temperature),
        humidity: coerce_finite(payload.humidity),
        pressure: coerce_finite(payload.pressure),
        wind_speed: coerce_finite(payload.wind_speed),
        read_at: payload.read_at.unwrap_or_else(|| Utc::now().to_rfc3339()),
    }
}

/// Coerce a JSON value to a finite f64. Strings are parsed; anything else,
/// and any NaN/infinite result, becomes `None`.
fn coerce_finite(value: Option<Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    parsed.is_finite().then_some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(v: Value) -> UpstreamPayload {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn reshape_numeric_fields() {
        let reading = reshape(payload(json!({
            "temperature": 18.5,
            "humidity": 62,
            "pressure": 1013.2,
            "windSpeed": 4.7,
            "readAt": "2024-01-15T10:00:00Z",
        })));

        assert_eq!(reading.temperature, Some(18.5));
        assert_eq!(reading.humidity, Some(62.0));
        assert_eq!(reading.pressure, Some(1013.2));
        assert_eq!(reading.wind_speed, Some(4.7));
        assert_eq!(reading.read_at, "2024-01-15T10:00:00Z");
    }

    #[test]
    fn reshape_string_encoded_numbers() {
        let reading = reshape(payload(json!({
            "temperature": "21.3",
            "humidity": " 55 ",
            "pressure": "n/a",
            "windSpeed": "",
        })));

        assert_eq!(reading.temperature, Some(21.3));
        assert_eq!(reading.humidity, Some(55.0));
        assert_eq!(reading.pressure, None);
        assert_eq!(reading.wind_speed, None);
    }

    #[test]
    fn reshape_missing_fields_are_null() {
        let reading = reshape(payload(json!({})));
        assert_eq!(reading.temperature, None);
        assert_eq!(reading.humidity, None);
        assert_eq!(reading.pressure, None);
        assert_eq!(reading.wind_speed, None);
        // Fallback timestamp is the fetch time.
        assert!(!reading.read_at.is_empty());
    }

    #[test]
    fn reshape_rejects_non_finite() {
        let reading = reshape(payload(json!({
            "temperature": "inf",
            "humidity": "NaN",
        })));
        assert_eq!(reading.temperature, None);
        assert_eq!(reading.humidity, None);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = WeatherError::Status(503);
        assert!(err.to_string().contains("503"));
    }
}
