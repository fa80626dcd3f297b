//! Server configuration loaded from environment variables.
//!
//! All ambient lookups happen here, once, at startup. The rest of the
//! application receives an explicit `Config` (and the visibility endpoint an
//! explicit [`SiteConfig`]) rather than reading the environment itself.

use std::env;

use crate::astro::visibility::DEFAULT_MIN_ALTITUDE_DEG;

/// Default observer site: Melbourne Observatory.
pub const DEFAULT_SITE_LAT: f64 = -37.8136;
pub const DEFAULT_SITE_LON: f64 = 144.9631;

/// Observer site defaults used when a visibility request omits parameters.
#[derive(Debug, Clone, Copy)]
pub struct SiteConfig {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub min_altitude_deg: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            latitude_deg: DEFAULT_SITE_LAT,
            longitude_deg: DEFAULT_SITE_LON,
            min_altitude_deg: DEFAULT_MIN_ALTITUDE_DEG,
        }
    }
}

/// Full server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind host (default: 0.0.0.0)
    pub host: String,
    /// Bind port (default: 8080)
    pub port: u16,
    /// Observer site defaults for the visibility endpoint
    pub site: SiteConfig,
    /// Third-party weather feed URL
    pub weather_url: String,
    /// Directory served as the static frontend
    pub static_dir: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0)
    /// - `PORT` (optional, default: 8080)
    /// - `SITE_LAT` (optional, default: -37.8136): observer latitude, degrees north
    /// - `SITE_LON` (optional, default: 144.9631): observer longitude, degrees east
    /// - `MIN_ALT_DEG` (optional, default: 15.0): visibility threshold
    /// - `WEATHER_URL` (optional): upstream weather feed
    /// - `STATIC_DIR` (optional, default: static): frontend directory
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let site = SiteConfig {
            latitude_deg: env_f64("SITE_LAT", DEFAULT_SITE_LAT),
            longitude_deg: env_f64("SITE_LON", DEFAULT_SITE_LON),
            min_altitude_deg: env_f64("MIN_ALT_DEG", DEFAULT_MIN_ALTITUDE_DEG),
        };

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            site,
            weather_url: env::var("WEATHER_URL").unwrap_or_else(|_| default_weather_url(&site)),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
        }
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn default_weather_url(site: &SiteConfig) -> String {
    format!(
        "https://api.open-meteo.com/v1/forecast?latitude={}&longitude={}&current_weather=true",
        site.latitude_deg, site.longitude_deg
    )
}
