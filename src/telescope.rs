//! Simulated telescope state.
//!
//! A single mutable record representing the telescope's current pointing and
//! imaging configuration. The record lives for the whole process behind a
//! `parking_lot::RwLock` in the application state; every mutation is a
//! whole-field replacement under one write lock, so handlers never observe a
//! half-applied update. The coordinate pipeline never writes here, it only
//! supplies new targets from the catalog.

use serde::{Deserialize, Serialize};

use crate::catalog::CelestialObject;

/// Current pointing and imaging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelescopeState {
    pub azimuth_deg: f64,
    pub elevation_deg: f64,
    /// Right ascension of the current target, sexagesimal display string.
    pub ra: String,
    /// Declination of the current target, sexagesimal display string.
    pub dec: String,
    pub target_name: String,
    pub field_of_view: String,
    pub exposure_seconds: f64,
    pub filter: String,
    pub binning: u32,
    pub gain: u32,
    pub region_of_interest: String,
    pub tracking_active: bool,
}

impl Default for TelescopeState {
    /// Power-on state: parked at the zenith, no target, tracking off.
    fn default() -> Self {
        Self {
            azimuth_deg: 0.0,
            elevation_deg: 90.0,
            ra: String::new(),
            dec: String::new(),
            target_name: String::new(),
            field_of_view: String::new(),
            exposure_seconds: 30.0,
            filter: "L".to_string(),
            binning: 1,
            gain: 100,
            region_of_interest: "full".to_string(),
            tracking_active: false,
        }
    }
}

/// Partial imaging-configuration update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigUpdate {
    pub exposure_seconds: Option<f64>,
    pub filter: Option<String>,
    pub binning: Option<u32>,
    pub gain: Option<u32>,
    pub region_of_interest: Option<String>,
    pub tracking_active: Option<bool>,
}

impl TelescopeState {
    /// Apply a partial configuration update.
    pub fn apply_config(&mut self, update: ConfigUpdate) {
        if let Some(exposure) = update.exposure_seconds {
            self.exposure_seconds = exposure;
        }
        if let Some(filter) = update.filter {
            self.filter = filter;
        }
        if let Some(binning) = update.binning {
            self.binning = binning;
        }
        if let Some(gain) = update.gain {
            self.gain = gain;
        }
        if let Some(roi) = update.region_of_interest {
            self.region_of_interest = roi;
        }
        if let Some(tracking) = update.tracking_active {
            self.tracking_active = tracking;
        }
    }

    /// Slew to a catalog object: replace pointing coordinates, target name,
    /// and field of view, and re-enable tracking.
    pub fn point_at(&mut self, object: &CelestialObject) {
        self.ra = object.ra.clone();
        self.dec = object.dec.clone();
        self.target_name = object.name.clone();
        self.field_of_view = object.fov.clone();
        self.tracking_active = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn default_state_is_parked() {
        let state = TelescopeState::default();
        assert_eq!(state.elevation_deg, 90.0);
        assert!(!state.tracking_active);
        assert!(state.target_name.is_empty());
    }

    #[test]
    fn partial_config_leaves_other_fields_alone() {
        let mut state = TelescopeState::default();
        state.apply_config(ConfigUpdate {
            exposure_seconds: Some(120.0),
            gain: Some(200),
            ..Default::default()
        });

        assert_eq!(state.exposure_seconds, 120.0);
        assert_eq!(state.gain, 200);
        assert_eq!(state.filter, "L");
        assert_eq!(state.binning, 1);
        assert!(!state.tracking_active);
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let mut state = TelescopeState::default();
        let before = format!("{state:?}");
        state.apply_config(ConfigUpdate::default());
        assert_eq!(before, format!("{state:?}"));
    }

    #[test]
    fn point_at_replaces_target_and_resumes_tracking() {
        let mut state = TelescopeState::default();
        let m42 = catalog::find_by_id("M42").unwrap();
        state.point_at(m42);

        assert_eq!(state.ra, m42.ra);
        assert_eq!(state.dec, m42.dec);
        assert_eq!(state.target_name, "Orion Nebula");
        assert_eq!(state.field_of_view, m42.fov);
        assert!(state.tracking_active);
    }

    #[test]
    fn config_update_parses_camel_case() {
        let update: ConfigUpdate =
            serde_json::from_str(r#"{"exposureSeconds": 60.0, "trackingActive": false}"#).unwrap();
        assert_eq!(update.exposure_seconds, Some(60.0));
        assert_eq!(update.tracking_active, Some(false));
        assert!(update.filter.is_none());
    }
}
