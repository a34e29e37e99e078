//! Orbital mechanics core.
//!
//! Three stateless pieces shared by every front end:
//! - [`physics`]: closed-form two-body circular-orbit quantities
//! - [`classify`]: altitude band classification with display metadata
//! - [`scale`]: adaptive screen-space scaling (presentation heuristic)
//!
//! plus display-only helpers: [`analysis`] (mission assessment),
//! [`presets`] (reference satellites) and [`render`] (platform-agnostic
//! draw commands).
//!
//! # Example
//!
//! ```rust
//! use satorb::orbit::{compute_orbit, classify::classify_orbit};
//!
//! let params = compute_orbit(1000.0, 400.0)?;
//! let class = classify_orbit(400.0);
//!
//! assert!(params.period_minutes() < 95.0);
//! assert_eq!(class.band.label(), "LEO");
//! # Ok::<(), satorb::SatError>(())
//! ```

pub mod analysis;
pub mod classify;
pub mod physics;
pub mod presets;
pub mod render;
pub mod scale;
pub mod units;

#[cfg(feature = "wasm")]
pub mod wasm;

use crate::error::SatResult;
use physics::{OrbitRequest, OrbitalParameters};

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::analysis::{ground_coverage, launch_cost, MissionAnalysis, MissionDuration};
    pub use super::classify::{classify_orbit, OrbitBand, OrbitClassification};
    pub use super::physics::{
        angular_velocity, centripetal_force, escape_velocity, orbital_energy, orbital_period,
        orbital_velocity, OrbitRequest, OrbitalParameters,
    };
    pub use super::presets::{find_preset, SatellitePreset, PRESETS};
    pub use super::render::{render_scene, Color, OrbitTrail, RenderCommand};
    pub use super::scale::{scale_for_display, DisplayGeometry, ScaleConfig};
    pub use super::units::{
        Altitude, SatMass, EARTH_MASS, EARTH_MU, EARTH_RADIUS_KM, EARTH_RADIUS_M, G,
        GEO_ALTITUDE_KM,
    };
}

/// Compute all orbital parameters from raw mass/altitude values.
///
/// Convenience wrapper around [`OrbitRequest::new`] +
/// [`OrbitalParameters::compute`] for callers that don't keep a request
/// around.
///
/// # Errors
///
/// Returns an error for non-positive or non-finite mass, or a non-finite
/// altitude. Out-of-range altitudes are clamped, not rejected.
pub fn compute_orbit(mass_kg: f64, altitude_km: f64) -> SatResult<OrbitalParameters> {
    let request = OrbitRequest::new(mass_kg, altitude_km)?;
    Ok(OrbitalParameters::compute(&request))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use classify::{classify_orbit, OrbitBand};

    #[test]
    fn test_compute_orbit_iss() {
        let params = compute_orbit(420_000.0, 408.0).unwrap();
        assert!((params.period_minutes() - 92.6).abs() < 0.5);
        assert_eq!(classify_orbit(408.0).band, OrbitBand::Leo);
    }

    #[test]
    fn test_compute_orbit_rejects_bad_mass() {
        assert!(compute_orbit(-1.0, 400.0).is_err());
    }

    #[test]
    fn test_prelude_imports() {
        use prelude::*;

        let request = OrbitRequest::new(1000.0, 550.0).unwrap();
        let params = OrbitalParameters::compute(&request);
        let geometry = DisplayGeometry::compute(550.0, &ScaleConfig::default());

        assert!(params.is_finite());
        assert!(geometry.orbit_px > geometry.earth_px);
        assert_eq!(PRESETS.len(), 5);
    }
}
