//! Orbit band classification.
//!
//! Maps an altitude to exactly one named band using fixed thresholds,
//! first match wins. The geostationary window takes precedence over the
//! MEO upper bound so that 35786 ± 100 km always reads as GEO. Band
//! metadata is static display text; nothing in the numeric engine
//! depends on it.

use serde::Serialize;

use crate::orbit::units::GEO_ALTITUDE_KM;

/// Altitude below which atmospheric drag makes an orbit unstable (km).
pub const UNSTABLE_ALTITUDE_KM: f64 = 160.0;

/// Upper bound of low Earth orbit (km).
pub const LEO_CEILING_KM: f64 = 2000.0;

/// Half-width of the geostationary band (km).
pub const GEO_WINDOW_KM: f64 = 100.0;

/// Named orbit altitude band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum OrbitBand {
    /// Below 160 km: atmospheric drag dominates, orbit decays quickly.
    VeryLow,
    /// Low Earth orbit, up to 2000 km.
    Leo,
    /// Medium Earth orbit, between LEO and the geostationary radius.
    Meo,
    /// Geostationary orbit, 35786 ± 100 km.
    Geo,
    /// High Earth orbit, beyond geostationary.
    Heo,
}

impl OrbitBand {
    /// Short display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "VERY LOW",
            Self::Leo => "LEO",
            Self::Meo => "MEO",
            Self::Geo => "GEO",
            Self::Heo => "HEO",
        }
    }

    /// Whether orbits in this band hold their altitude without constant
    /// reboosting.
    #[must_use]
    pub const fn is_stable(self) -> bool {
        !matches!(self, Self::VeryLow)
    }
}

impl std::fmt::Display for OrbitBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification result: the band plus its static descriptive metadata.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitClassification {
    /// The altitude band.
    pub band: OrbitBand,
    /// Long-form band name.
    pub full_name: &'static str,
    /// One-line description for dashboards.
    pub description: &'static str,
    /// Typical applications.
    pub applications: &'static [&'static str],
    /// Risk factors and operational challenges.
    pub challenges: &'static [&'static str],
    /// Advantages of the band.
    pub advantages: &'static [&'static str],
    /// Real missions flying there.
    pub examples: &'static [&'static str],
}

impl OrbitClassification {
    const VERY_LOW: Self = Self {
        band: OrbitBand::VeryLow,
        full_name: "Very Low Earth Orbit",
        description: "Extreme atmospheric drag, rapid orbital decay",
        applications: &["Brief atmospheric research", "Deorbiting maneuvers"],
        challenges: &[
            "Severe atmospheric drag",
            "Rapid orbital decay",
            "Constant reboost demand",
        ],
        advantages: &["Highest-resolution imagery", "Minimal signal latency"],
        examples: &["Deorbiting spacecraft", "Short-lived research missions"],
    };

    const LEO: Self = Self {
        band: OrbitBand::Leo,
        full_name: "Low Earth Orbit",
        description: "Optimal for Earth observation and human spaceflight",
        applications: &["Earth observation", "Human spaceflight", "Small satellites"],
        challenges: &[
            "Atmospheric drag",
            "Limited coverage per pass",
            "Frequent ground-station handovers",
        ],
        advantages: &["High resolution", "Low launch cost", "Easy servicing"],
        examples: &["ISS", "Starlink", "Planet Labs", "Most CubeSats"],
    };

    const MEO: Self = Self {
        band: OrbitBand::Meo,
        full_name: "Medium Earth Orbit",
        description: "Navigation and regional communication territory",
        applications: &["Satellite navigation", "Regional communication", "Science missions"],
        challenges: &[
            "Van Allen radiation environment",
            "Higher launch cost",
            "Complex constellation geometry",
        ],
        advantages: &["Wide coverage", "Stable orbits", "Good altitude compromise"],
        examples: &["GPS", "GLONASS", "Galileo", "O3b"],
    };

    const GEO: Self = Self {
        band: OrbitBand::Geo,
        full_name: "Geostationary Earth Orbit",
        description: "Fixed position over the equator, ideal for communications",
        applications: &["Communications", "Weather monitoring", "Broadcasting"],
        challenges: &[
            "High launch cost",
            "Launch window constraints",
            "Orbital slot competition",
        ],
        advantages: &[
            "Fixed coverage area",
            "No ground antenna tracking",
            "Continuous service",
        ],
        examples: &["Weather satellites", "TV broadcast", "Military relays"],
    };

    const HEO: Self = Self {
        band: OrbitBand::Heo,
        full_name: "High Earth Orbit",
        description: "Deep-space staging and specialized vantage points",
        applications: &["Deep-space missions", "Lagrange-point observatories"],
        challenges: &[
            "Extreme launch energy",
            "Long communication delay",
            "Harsh radiation environment",
        ],
        advantages: &["Unique vantage points", "Minimal orbital perturbation"],
        examples: &["James Webb Space Telescope", "Solar observatories"],
    };
}

/// Classify an altitude into exactly one band.
///
/// Thresholds are evaluated in order; the geostationary window is checked
/// before MEO's upper bound so the GEO band is reachable from both sides.
/// Negative inputs are treated as zero.
#[must_use]
pub fn classify_orbit(altitude_km: f64) -> OrbitClassification {
    let altitude_km = altitude_km.max(0.0);

    if altitude_km < UNSTABLE_ALTITUDE_KM {
        OrbitClassification::VERY_LOW
    } else if altitude_km <= LEO_CEILING_KM {
        OrbitClassification::LEO
    } else if (altitude_km - GEO_ALTITUDE_KM).abs() < GEO_WINDOW_KM {
        OrbitClassification::GEO
    } else if altitude_km <= GEO_ALTITUDE_KM {
        OrbitClassification::MEO
    } else {
        OrbitClassification::HEO
    }
}
