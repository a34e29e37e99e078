//! Mission analysis derived from a computed orbit.
//!
//! Display-only heuristics: risk factors, mission recommendations, a
//! rough launch-cost figure, an expected-lifetime class, and the ground
//! area visible from the orbit. Nothing here feeds back into the
//! physics engine.

use serde::Serialize;

use crate::orbit::physics::OrbitRequest;
use crate::orbit::units::{EARTH_RADIUS_KM, GEO_ALTITUDE_KM};

/// Baseline launch cost to LEO (USD per kg).
const BASE_COST_PER_KG: f64 = 5000.0;

/// How long a satellite at this altitude stays up without reboosting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MissionDuration {
    /// Below ~300 km: drag deorbits the satellite within months.
    WeeksToMonths,
    /// 300–600 km: typical constellation lifetime.
    Years,
    /// 600–2000 km: decay is negligible on mission timescales.
    Decades,
    /// Above 2000 km: effectively permanent.
    Centuries,
}

impl MissionDuration {
    /// Human-readable duration estimate.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WeeksToMonths => "weeks to months",
            Self::Years => "5-15 years",
            Self::Decades => "decades",
            Self::Centuries => "centuries or more",
        }
    }
}

/// Qualitative assessment of one orbit request.
#[derive(Debug, Clone, Serialize)]
pub struct MissionAnalysis {
    /// Conditions that work against the mission.
    pub risk_factors: Vec<&'static str>,
    /// Altitudes this request is well suited for.
    pub recommendations: Vec<&'static str>,
    /// Rough launch cost (USD).
    pub launch_cost_usd: f64,
    /// Expected time on orbit.
    pub duration: MissionDuration,
    /// Ground area visible from the satellite (km²).
    pub ground_coverage_km2: f64,
}

impl MissionAnalysis {
    /// Assess a request.
    #[must_use]
    pub fn assess(request: &OrbitRequest) -> Self {
        let altitude_km = request.altitude().as_km();
        let mass_kg = request.mass().as_kg();

        let mut risk_factors = Vec::new();
        if altitude_km < 200.0 {
            risk_factors.push("high atmospheric drag");
        }
        if altitude_km > 30_000.0 {
            risk_factors.push("high radiation environment");
        }
        if mass_kg > 10_000.0 {
            risk_factors.push("heavy payload raises launch cost");
        }

        let mut recommendations = Vec::new();
        if (400.0..=600.0).contains(&altitude_km) {
            recommendations.push("excellent for Earth observation");
        }
        if (500.0..=1200.0).contains(&altitude_km) {
            recommendations.push("good for satellite constellations");
        }
        if (altitude_km - GEO_ALTITUDE_KM).abs() < 500.0 {
            recommendations.push("suited to geostationary applications");
        }

        Self {
            risk_factors,
            recommendations,
            launch_cost_usd: launch_cost(mass_kg, altitude_km),
            duration: mission_duration(altitude_km),
            ground_coverage_km2: ground_coverage(altitude_km),
        }
    }
}

/// Rough launch cost: per-kg baseline scaled up with altitude.
#[must_use]
pub fn launch_cost(mass_kg: f64, altitude_km: f64) -> f64 {
    mass_kg * BASE_COST_PER_KG * (1.0 + altitude_km / 10_000.0)
}

/// Expected mission lifetime class for an altitude.
#[must_use]
pub fn mission_duration(altitude_km: f64) -> MissionDuration {
    if altitude_km < 300.0 {
        MissionDuration::WeeksToMonths
    } else if altitude_km < 600.0 {
        MissionDuration::Years
    } else if altitude_km < 2000.0 {
        MissionDuration::Decades
    } else {
        MissionDuration::Centuries
    }
}

/// Ground area within line of sight (km²): `π·d²` for horizon distance
/// `d = sqrt(2·R·h + h²)`.
#[must_use]
pub fn ground_coverage(altitude_km: f64) -> f64 {
    let altitude_km = altitude_km.max(0.0);
    let horizon_km = (2.0 * EARTH_RADIUS_KM * altitude_km + altitude_km * altitude_km).sqrt();
    std::f64::consts::PI * horizon_km * horizon_km
}
