//! Visualization support shared by the front ends.
//!
//! Defines [`OrbitSnapshot`], the serializable bundle every presentation
//! layer consumes: physics parameters, classification, mission analysis
//! and screen-space geometry for one request, captured together so a
//! front end never recomputes pieces out of sync.

use serde::Serialize;

use crate::error::{SatError, SatResult};
use crate::orbit::analysis::MissionAnalysis;
use crate::orbit::classify::{classify_orbit, OrbitClassification};
use crate::orbit::physics::{OrbitRequest, OrbitalParameters};
use crate::orbit::scale::{DisplayGeometry, ScaleConfig};

#[cfg(feature = "web")]
pub mod web;

#[cfg(feature = "web")]
pub use web::WebVisualization;

/// Everything a front end needs to draw one orbit state.
#[derive(Debug, Clone, Serialize)]
pub struct OrbitSnapshot {
    /// Satellite mass (kg).
    pub mass_kg: f64,
    /// Orbit altitude (km).
    pub altitude_km: f64,
    /// Derived physics parameters.
    pub parameters: OrbitalParameters,
    /// Orbit band and metadata.
    pub classification: OrbitClassification,
    /// Qualitative mission assessment.
    pub analysis: MissionAnalysis,
    /// Screen-space geometry under the capturing front end's scaler.
    pub geometry: DisplayGeometry,
    /// Satellite position on its circle (rad).
    pub angle_rad: f64,
    /// Whether the animation is advancing.
    pub running: bool,
}

impl OrbitSnapshot {
    /// Capture a snapshot for the given request and animation state.
    #[must_use]
    pub fn capture(
        request: &OrbitRequest,
        scale: &ScaleConfig,
        angle_rad: f64,
        running: bool,
    ) -> Self {
        let altitude_km = request.altitude().as_km();
        Self {
            mass_kg: request.mass().as_kg(),
            altitude_km,
            parameters: OrbitalParameters::compute(request),
            classification: classify_orbit(altitude_km),
            analysis: MissionAnalysis::assess(request),
            geometry: DisplayGeometry::compute(altitude_km, scale),
            angle_rad,
            running,
        }
    }

    /// Serialize to a JSON string for streaming.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> SatResult<String> {
        serde_json::to_string(self)
            .map_err(|e| SatError::serialization(format!("snapshot serialization failed: {e}")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::orbit::classify::OrbitBand;

    fn snapshot() -> OrbitSnapshot {
        let request = OrbitRequest::new(1000.0, 400.0).unwrap();
        OrbitSnapshot::capture(&request, &ScaleConfig::default(), 1.0, true)
    }

    #[test]
    fn test_capture_is_internally_consistent() {
        let snap = snapshot();
        assert_eq!(snap.classification.band, OrbitBand::Leo);
        assert!((snap.parameters.orbital_radius_km - 6771.0).abs() < 0.5);
        assert!(snap.geometry.orbit_px > snap.geometry.earth_px);
        assert!(snap.running);
    }

    #[test]
    fn test_json_contains_all_sections() {
        let json = snapshot().to_json().unwrap();
        for key in [
            "\"mass_kg\"",
            "\"parameters\"",
            "\"classification\"",
            "\"analysis\"",
            "\"geometry\"",
            "\"angle_rad\"",
        ] {
            assert!(json.contains(key), "missing {key} in {json}");
        }
    }

    #[test]
    fn test_json_band_label() {
        let json = snapshot().to_json().unwrap();
        assert!(json.contains("Leo"));
    }
}
