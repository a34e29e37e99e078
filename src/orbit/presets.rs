//! Reference-satellite presets.
//!
//! Real missions the front ends offer as one-key configurations, and the
//! comparison table the dashboards show next to the user's orbit.

use serde::Serialize;

use crate::error::SatResult;
use crate::orbit::physics::OrbitRequest;

/// A well-known satellite used as a preset configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SatellitePreset {
    /// Mission name.
    pub name: &'static str,
    /// Orbit altitude (km).
    pub altitude_km: f64,
    /// Satellite mass (kg).
    pub mass_kg: f64,
    /// What it is for.
    pub purpose: &'static str,
}

impl SatellitePreset {
    /// Build an [`OrbitRequest`] from this preset.
    ///
    /// # Errors
    ///
    /// Propagates request validation, though preset values are always valid.
    pub fn to_request(&self) -> SatResult<OrbitRequest> {
        OrbitRequest::new(self.mass_kg, self.altitude_km)
    }
}

/// The preset table shared by every front end.
pub const PRESETS: &[SatellitePreset] = &[
    SatellitePreset {
        name: "ISS",
        altitude_km: 408.0,
        mass_kg: 420_000.0,
        purpose: "Space station",
    },
    SatellitePreset {
        name: "Hubble",
        altitude_km: 547.0,
        mass_kg: 11_110.0,
        purpose: "Space telescope",
    },
    SatellitePreset {
        name: "GPS",
        altitude_km: 20_200.0,
        mass_kg: 2000.0,
        purpose: "Navigation",
    },
    SatellitePreset {
        name: "Geostationary",
        altitude_km: 35_786.0,
        mass_kg: 5000.0,
        purpose: "Communication",
    },
    SatellitePreset {
        name: "Starlink",
        altitude_km: 550.0,
        mass_kg: 260.0,
        purpose: "Internet constellation",
    },
];

/// Look a preset up by (case-insensitive) name.
#[must_use]
pub fn find_preset(name: &str) -> Option<&'static SatellitePreset> {
    PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}

/// Whether the given altitude matches a preset closely enough to call it
/// "the same orbit" on a comparison table.
#[must_use]
pub fn matches_altitude(preset: &SatellitePreset, altitude_km: f64) -> bool {
    (preset.altitude_km - altitude_km).abs() < 100.0
}
