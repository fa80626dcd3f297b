//! Static astronomical-object catalog.
//!
//! A read-only list of well-known deep-sky objects with their coordinates as
//! sexagesimal display strings. The catalog is the input contract of the
//! visibility pipeline: RA/Dec strings here feed the sexagesimal parser, so
//! every entry is expected to match its pattern (a malformed entry degrades
//! to 0°, it does not fail a request).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One immutable catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialObject {
    /// Unique short code, e.g. `"M31"`.
    pub id: String,
    pub name: String,
    /// Right ascension as `"HHh MMm SSs"`.
    pub ra: String,
    /// Declination as `"±DD° MM′ SS″"`.
    pub dec: String,
    pub magnitude: f64,
    /// Category label, e.g. `"Galaxy"`.
    #[serde(rename = "type")]
    pub object_type: String,
    /// Suggested field of view, display only.
    pub fov: String,
}

impl CelestialObject {
    fn new(id: &str, name: &str, ra: &str, dec: &str, magnitude: f64, object_type: &str, fov: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            ra: ra.to_string(),
            dec: dec.to_string(),
            magnitude,
            object_type: object_type.to_string(),
            fov: fov.to_string(),
        }
    }
}

static CATALOG: Lazy<Vec<CelestialObject>> = Lazy::new(|| {
    vec![
        CelestialObject::new("M31", "Andromeda Galaxy", "00h 42m 44s", "+41° 16′ 09″", 3.4, "Galaxy", "3.2° × 1.0°"),
        CelestialObject::new("M42", "Orion Nebula", "05h 35m 17s", "-05° 23′ 28″", 4.0, "Nebula", "1.5° × 1.0°"),
        CelestialObject::new("M45", "Pleiades", "03h 47m 24s", "+24° 07′ 00″", 1.6, "Open Cluster", "2.0°"),
        CelestialObject::new("M13", "Hercules Cluster", "16h 41m 41s", "+36° 27′ 37″", 5.8, "Globular Cluster", "20′"),
        CelestialObject::new("M8", "Lagoon Nebula", "18h 03m 37s", "-24° 23′ 12″", 6.0, "Nebula", "90′ × 40′"),
        CelestialObject::new("M104", "Sombrero Galaxy", "12h 39m 59s", "-11° 37′ 23″", 8.0, "Galaxy", "9′ × 4′"),
        CelestialObject::new("M57", "Ring Nebula", "18h 53m 35s", "+33° 01′ 45″", 8.8, "Planetary Nebula", "1.4′ × 1.0′"),
        CelestialObject::new("M51", "Whirlpool Galaxy", "13h 29m 53s", "+47° 11′ 43″", 8.4, "Galaxy", "11′ × 7′"),
        CelestialObject::new("NGC104", "47 Tucanae", "00h 24m 06s", "-72° 04′ 53″", 4.1, "Globular Cluster", "31′"),
        CelestialObject::new("NGC3372", "Carina Nebula", "10h 45m 09s", "-59° 41′ 04″", 1.0, "Nebula", "2.0°"),
    ]
});

/// All catalog entries, in fixed catalog order.
pub fn all() -> &'static [CelestialObject] {
    &CATALOG
}

/// Case-insensitive substring search over id, name, and type.
pub fn search(query: &str) -> Vec<&'static CelestialObject> {
    let q = query.to_lowercase();
    CATALOG
        .iter()
        .filter(|o| {
            o.id.to_lowercase().contains(&q)
                || o.name.to_lowercase().contains(&q)
                || o.object_type.to_lowercase().contains(&q)
        })
        .collect()
}

/// Exact id lookup, case-insensitive.
pub fn find_by_id(id: &str) -> Option<&'static CelestialObject> {
    CATALOG.iter().find(|o| o.id.eq_ignore_ascii_case(id))
}
